//! Accessor-level errors.
//!
//! These are raised by the type-erased readers and writers that
//! [`ClassBuilder`](crate::ClassBuilder) produces, and by [`FromValue`](crate::FromValue)
//! when a value does not fit the Rust type of a writer parameter. The
//! converter wraps them with the owning type and property name.

use thiserror::Error;

/// A failure inside a single reader or writer call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccessError {
    /// The value shape does not match the accessor's Rust type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// An integer does not fit the accessor's integer width.
    #[error("integer {value} out of range for {target_type}")]
    IntegerOverflow {
        value: i64,
        target_type: &'static str,
    },

    /// A bean value handed to a writer is not of the declared type.
    #[error("bean of type '{actual}' cannot be used as '{expected}'")]
    BeanMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// The accessor was invoked on an instance of another type.
    #[error("accessor of '{expected}' called on a different receiver type")]
    Receiver { expected: &'static str },

    /// The accessor itself reported a failure.
    #[error("{0}")]
    Failed(String),
}

impl AccessError {
    /// Create an accessor failure with a custom message.
    pub fn failed(message: impl Into<String>) -> Self {
        AccessError::Failed(message.into())
    }
}
