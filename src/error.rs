//! Conversion errors.

use thiserror::Error;

use beanmap_core::{AccessError, TypeTag, Value};
use beanmap_registry::AmbiguousPropertyError;

/// A value could not be coerced to the declared type of its destination.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot coerce {from} value {value} to {to}")]
pub struct CoercionError {
    /// Shape of the source value (`"int"`, `"string"`, ...).
    pub from: &'static str,
    pub to: TypeTag,
    /// Rendering of the offending value.
    pub value: String,
}

impl CoercionError {
    pub fn new(value: &Value, to: &TypeTag) -> Self {
        Self {
            from: value.type_name(),
            to: to.clone(),
            value: render(value),
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Char(c) => format!("'{c}'"),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::String(s) => format!("\"{s}\""),
        Value::Seq(items) => format!("[{} items]", items.len()),
        Value::Map(map) => format!("{{{} entries}}", map.len()),
        Value::Object(bean) => format!("<{}>", bean.type_name()),
    }
}

/// Errors produced while converting between beans and maps.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    AmbiguousProperty(#[from] AmbiguousPropertyError),

    #[error(transparent)]
    Coercion(#[from] CoercionError),

    /// The target type registered no zero-argument constructor.
    #[error("type '{type_name}' cannot be constructed: no default constructor")]
    Unconstructible { type_name: &'static str },

    /// A reader or writer failed while accessing a property.
    #[error("conversion of '{type_name}.{property}' failed: {source}")]
    Conversion {
        type_name: &'static str,
        property: String,
        #[source]
        source: AccessError,
    },

    /// Bean nesting went past the configured maximum depth.
    #[error("nesting of '{type_name}' exceeds the maximum depth of {depth}")]
    CyclicReference { type_name: &'static str, depth: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
