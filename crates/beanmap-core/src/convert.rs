//! Conversion traits between Rust types and [`Value`].
//!
//! - [`Reflect`]: the declared [`TypeTag`] of a Rust type
//! - [`IntoValue`]: turn a reader's result into a [`Value`]
//! - [`FromValue`]: extract a writer argument from a [`Value`]
//!
//! ## Type mapping
//!
//! | Rust | TypeTag |
//! |---|---|
//! | `bool`, `char`, `i8`..`i64`, `f32`, `f64` | `Primitive(kind)` |
//! | `Option<scalar>` | `Boxed(kind)` |
//! | `String` / `Option<String>` | `String` |
//! | `Vec<T>` / `Option<Vec<T>>` | `Array(T)` |
//! | bean types (via [`impl_bean_value!`](crate::impl_bean_value)) | `Object(ref)` |
//! | `Value` | `Unknown` |

use crate::{AccessError, PrimitiveKind, TypeTag, Value};

/// Declared type of a Rust accessor type.
pub trait Reflect {
    fn type_tag() -> TypeTag;
}

/// Convert a reader result into a dynamic value.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Extract a writer argument from a dynamic value.
///
/// Values reaching a writer have already been coerced to the writer's
/// declared tag, so implementations only check shape and width.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, AccessError>;
}

// ============================================================================
// Integer implementations
// ============================================================================

macro_rules! impl_int {
    ($($ty:ty => $kind:ident),*) => {
        $(
            impl Reflect for $ty {
                fn type_tag() -> TypeTag {
                    TypeTag::Primitive(PrimitiveKind::$kind)
                }
            }

            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::Int(self as i64)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, AccessError> {
                    match value {
                        Value::Int(v) => {
                            if v >= Self::MIN as i64 && v <= Self::MAX as i64 {
                                Ok(v as Self)
                            } else {
                                Err(AccessError::IntegerOverflow {
                                    value: v,
                                    target_type: stringify!($ty),
                                })
                            }
                        }
                        other => Err(AccessError::TypeMismatch {
                            expected: stringify!($ty),
                            actual: other.type_name(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_int!(i8 => Int8, i16 => Int16, i32 => Int32, i64 => Int64);

// ============================================================================
// Float implementations
// ============================================================================

impl Reflect for f32 {
    fn type_tag() -> TypeTag {
        TypeTag::Primitive(PrimitiveKind::Float)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Float(self as f64)
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, AccessError> {
        match value {
            Value::Float(v) => Ok(v as f32),
            Value::Int(v) => Ok(v as f32),
            other => Err(AccessError::TypeMismatch {
                expected: "f32",
                actual: other.type_name(),
            }),
        }
    }
}

impl Reflect for f64 {
    fn type_tag() -> TypeTag {
        TypeTag::Primitive(PrimitiveKind::Double)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, AccessError> {
        match value {
            Value::Float(v) => Ok(v),
            Value::Int(v) => Ok(v as f64),
            other => Err(AccessError::TypeMismatch {
                expected: "f64",
                actual: other.type_name(),
            }),
        }
    }
}

// ============================================================================
// Bool, char and String
// ============================================================================

impl Reflect for bool {
    fn type_tag() -> TypeTag {
        TypeTag::Primitive(PrimitiveKind::Bool)
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, AccessError> {
        match value {
            Value::Bool(v) => Ok(v),
            other => Err(AccessError::TypeMismatch {
                expected: "bool",
                actual: other.type_name(),
            }),
        }
    }
}

impl Reflect for char {
    fn type_tag() -> TypeTag {
        TypeTag::Primitive(PrimitiveKind::Char)
    }
}

impl IntoValue for char {
    fn into_value(self) -> Value {
        Value::Char(self)
    }
}

impl FromValue for char {
    fn from_value(value: Value) -> Result<Self, AccessError> {
        match value {
            Value::Char(v) => Ok(v),
            other => Err(AccessError::TypeMismatch {
                expected: "char",
                actual: other.type_name(),
            }),
        }
    }
}

impl Reflect for String {
    fn type_tag() -> TypeTag {
        TypeTag::String
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, AccessError> {
        match value {
            Value::String(v) => Ok(v),
            other => Err(AccessError::TypeMismatch {
                expected: "string",
                actual: other.type_name(),
            }),
        }
    }
}

// ============================================================================
// Untyped values
// ============================================================================

impl Reflect for Value {
    fn type_tag() -> TypeTag {
        TypeTag::Unknown
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, AccessError> {
        Ok(value)
    }
}

// ============================================================================
// Option and Vec
// ============================================================================

impl<T: Reflect> Reflect for Option<T> {
    fn type_tag() -> TypeTag {
        T::type_tag().boxed()
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Null,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, AccessError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_tag() -> TypeTag {
        TypeTag::array_of(T::type_tag())
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::Seq(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, AccessError> {
        match value {
            Value::Seq(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(AccessError::TypeMismatch {
                expected: "sequence",
                actual: other.type_name(),
            }),
        }
    }
}

/// Implement [`Reflect`], [`IntoValue`] and [`FromValue`] for bean types.
///
/// Each type must already implement [`Describe`](crate::Describe).
///
/// ```ignore
/// impl_bean_value!(Address, Person);
/// ```
#[macro_export]
macro_rules! impl_bean_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                fn type_tag() -> $crate::TypeTag {
                    $crate::TypeTag::Object($crate::ObjectRef::of::<$ty>())
                }
            }

            impl $crate::IntoValue for $ty {
                fn into_value(self) -> $crate::Value {
                    $crate::Value::Object(::std::boxed::Box::new(self))
                }
            }

            impl $crate::FromValue for $ty {
                fn from_value(
                    value: $crate::Value,
                ) -> ::std::result::Result<Self, $crate::AccessError> {
                    match value {
                        $crate::Value::Object(bean) => {
                            let actual = bean.type_name();
                            bean.downcast::<$ty>().ok_or($crate::AccessError::BeanMismatch {
                                expected: <$ty as $crate::Describe>::type_name(),
                                actual,
                            })
                        }
                        other => Err($crate::AccessError::TypeMismatch {
                            expected: <$ty as $crate::Describe>::type_name(),
                            actual: other.type_name(),
                        }),
                    }
                }
            }
        )+
    };
}
