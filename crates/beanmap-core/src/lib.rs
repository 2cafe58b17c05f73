//! Core types for beanmap.
//!
//! This crate holds everything the property model and the converter share:
//!
//! - [`TypeHash`]: deterministic type identity
//! - [`PrimitiveKind`] and [`TypeTag`]: declared accessor types
//! - [`Value`] and [`ConversionMap`]: the dynamic side of a conversion
//! - [`Describe`], [`Bean`] and [`ClassBuilder`]: the introspection capability
//! - [`Reflect`], [`IntoValue`], [`FromValue`]: typed accessor glue
//! - [`AccessError`]: accessor-level failures

mod bean;
mod convert;
mod error;
mod primitive_kind;
mod type_hash;
mod type_tag;
mod value;

pub use bean::{
    Bean, ClassBuilder, Describe, Factory, Member, MemberKind, ReadFn, Reader, TypeDescriptor,
    WriteFn, Writer,
};
pub use convert::{FromValue, IntoValue, Reflect};
pub use error::AccessError;
pub use primitive_kind::PrimitiveKind;
pub use type_hash::TypeHash;
pub use type_tag::{ObjectRef, TypeTag};
pub use value::{ConversionMap, Value};
