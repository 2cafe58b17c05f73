//! Scalar and array coercion against declared type tags.
//!
//! Coercion never builds beans; a map headed for an object-typed property is
//! handled by the construction pass before it gets here.

use beanmap_core::{PrimitiveKind, TypeTag, Value};

use crate::config::ConverterConfig;
use crate::error::CoercionError;

/// Applies the coercion table under one configuration.
#[derive(Debug, Clone, Copy)]
pub struct Coercer {
    config: ConverterConfig,
}

impl Coercer {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Coerce `value` so it can be handed to an accessor declared as `target`.
    pub fn coerce(&self, value: Value, target: &TypeTag) -> Result<Value, CoercionError> {
        if value.is_null() {
            return if target.is_nullable() {
                Ok(Value::Null)
            } else {
                Err(CoercionError::new(&value, target))
            };
        }
        match target {
            TypeTag::Unknown => Ok(value),
            TypeTag::Primitive(kind) | TypeTag::Boxed(kind) => {
                self.coerce_scalar(value, *kind, target)
            }
            TypeTag::String => self.coerce_string(value, target),
            TypeTag::Array(element) => match value {
                Value::Seq(items) => items
                    .into_iter()
                    .map(|item| self.coerce(item, element))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Seq),
                other => Err(CoercionError::new(&other, target)),
            },
            TypeTag::Object(object) => match value {
                Value::Object(bean) if bean.type_hash() == object.type_hash => {
                    Ok(Value::Object(bean))
                }
                other => Err(CoercionError::new(&other, target)),
            },
        }
    }

    fn coerce_scalar(
        &self,
        value: Value,
        kind: PrimitiveKind,
        target: &TypeTag,
    ) -> Result<Value, CoercionError> {
        match kind {
            PrimitiveKind::Bool => match value {
                Value::Bool(b) => Ok(Value::Bool(b)),
                Value::String(s) if self.config.parse_strings => match s.trim() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    _ => Err(CoercionError::new(&Value::String(s), target)),
                },
                other => Err(CoercionError::new(&other, target)),
            },
            PrimitiveKind::Char => match value {
                Value::Char(c) => Ok(Value::Char(c)),
                Value::String(s) if self.config.parse_strings => {
                    let mut chars = s.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Ok(Value::Char(c)),
                        _ => Err(CoercionError::new(&Value::String(s), target)),
                    }
                }
                other => Err(CoercionError::new(&other, target)),
            },
            kind if kind.is_integer() => self.coerce_integer(value, kind, target),
            _ => self.coerce_float(value, kind, target),
        }
    }

    fn coerce_integer(
        &self,
        value: Value,
        kind: PrimitiveKind,
        target: &TypeTag,
    ) -> Result<Value, CoercionError> {
        let (min, max) = kind.integer_range().unwrap_or((i64::MIN, i64::MAX));
        let raw = match value {
            Value::Int(v) => v,
            Value::Float(f) => {
                // `max as f64 + 1.0` is exact for every width, including 2^63.
                let in_range = f >= min as f64 && f < max as f64 + 1.0;
                if f.fract() == 0.0 && in_range {
                    f as i64
                } else if self.config.allow_truncation && f.is_finite() {
                    f.trunc() as i64
                } else {
                    return Err(CoercionError::new(&Value::Float(f), target));
                }
            }
            Value::String(s) if self.config.parse_strings => match s.trim().parse::<i64>() {
                Ok(v) => v,
                Err(_) => return Err(CoercionError::new(&Value::String(s), target)),
            },
            other => return Err(CoercionError::new(&other, target)),
        };

        if raw >= min && raw <= max {
            Ok(Value::Int(raw))
        } else if self.config.allow_truncation {
            Ok(Value::Int(wrap(raw, kind)))
        } else {
            Err(CoercionError::new(&Value::Int(raw), target))
        }
    }

    fn coerce_float(
        &self,
        value: Value,
        kind: PrimitiveKind,
        target: &TypeTag,
    ) -> Result<Value, CoercionError> {
        let v = match value {
            Value::Int(i) => i as f64,
            Value::Float(f) => f,
            Value::String(s) if self.config.parse_strings => match s.trim().parse::<f64>() {
                Ok(v) => v,
                Err(_) => return Err(CoercionError::new(&Value::String(s), target)),
            },
            other => return Err(CoercionError::new(&other, target)),
        };

        if kind == PrimitiveKind::Double {
            return Ok(Value::Float(v));
        }
        let fits = !v.is_finite() || (v >= f32::MIN as f64 && v <= f32::MAX as f64);
        if fits || self.config.allow_truncation {
            Ok(Value::Float(v as f32 as f64))
        } else {
            Err(CoercionError::new(&Value::Float(v), target))
        }
    }

    fn coerce_string(&self, value: Value, target: &TypeTag) -> Result<Value, CoercionError> {
        match value {
            Value::String(s) => Ok(Value::String(s)),
            Value::Bool(b) if self.config.parse_strings => Ok(Value::String(b.to_string())),
            Value::Char(c) if self.config.parse_strings => Ok(Value::String(c.to_string())),
            Value::Int(i) if self.config.parse_strings => Ok(Value::String(i.to_string())),
            Value::Float(f) if self.config.parse_strings => Ok(Value::String(f.to_string())),
            other => Err(CoercionError::new(&other, target)),
        }
    }
}

impl Default for Coercer {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

/// Two's-complement wrap of `value` into the width of `kind`.
fn wrap(value: i64, kind: PrimitiveKind) -> i64 {
    match kind {
        PrimitiveKind::Int8 => value as i8 as i64,
        PrimitiveKind::Int16 => value as i16 as i64,
        PrimitiveKind::Int32 => value as i32 as i64,
        _ => value,
    }
}
