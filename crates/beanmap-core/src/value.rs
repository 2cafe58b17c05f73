//! Dynamic values moved between beans and maps.

use indexmap::IndexMap;

use crate::Bean;

/// Ordered mapping from property name to value.
///
/// Insertion order follows property discovery order, so projecting the same
/// bean twice yields identically ordered maps.
pub type ConversionMap = IndexMap<String, Value>;

/// A dynamic value at any level of a conversion.
///
/// Integers of every width are carried as `i64` and floats as `f64`; the
/// declared [`TypeTag`](crate::TypeTag) of the receiving property decides the
/// final width.
///
/// Note: `Value` does not implement `Clone` because `Object` owns a bean that
/// may not be cloneable. Use [`Value::clone_if_possible`] for data-only values.
#[derive(Debug, Default)]
pub enum Value {
    /// Null / absent
    #[default]
    Null,
    Bool(bool),
    Char(char),
    /// Integer value (int8 through int64 all stored as i64)
    Int(i64),
    /// Floating point value (float32 and float64 both stored as f64)
    Float(f64),
    String(String),
    /// Sequence (projected arrays, or array input for construction)
    Seq(Vec<Value>),
    /// Nested conversion map
    Map(ConversionMap),
    /// Live bean instance, as returned by readers or accepted by writers
    Object(Box<dyn Bean>),
}

impl Value {
    /// Get a human-readable name for this value's shape.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for bool, char, int, float and string values.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Bool(_) | Value::Char(_) | Value::Int(_) | Value::Float(_) | Value::String(_)
        )
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ConversionMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&dyn Bean> {
        match self {
            Value::Object(bean) => Some(bean.as_ref()),
            _ => None,
        }
    }

    /// Clone the value if it contains no bean instances.
    ///
    /// Returns None when an `Object` appears anywhere inside.
    pub fn clone_if_possible(&self) -> Option<Self> {
        match self {
            Value::Null => Some(Value::Null),
            Value::Bool(v) => Some(Value::Bool(*v)),
            Value::Char(v) => Some(Value::Char(*v)),
            Value::Int(v) => Some(Value::Int(*v)),
            Value::Float(v) => Some(Value::Float(*v)),
            Value::String(s) => Some(Value::String(s.clone())),
            Value::Seq(items) => items
                .iter()
                .map(Value::clone_if_possible)
                .collect::<Option<Vec<_>>>()
                .map(Value::Seq),
            Value::Map(map) => map
                .iter()
                .map(|(k, v)| v.clone_if_possible().map(|v| (k.clone(), v)))
                .collect::<Option<ConversionMap>>()
                .map(Value::Map),
            Value::Object(_) => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            // Bean instances can't be compared for equality
            (Value::Object(_), Value::Object(_)) => false,
            _ => false,
        }
    }
}

macro_rules! impl_value_from {
    ($($ty:ty => $variant:ident as $cast:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v as $cast)
                }
            }
        )*
    };
}

impl_value_from!(
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    f32 => Float as f64,
    f64 => Float as f64,
);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<ConversionMap> for Value {
    fn from(v: ConversionMap) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Seq(v.into_iter().map(Into::into).collect())
    }
}

/// Build a [`ConversionMap`] from `key => value` pairs.
///
/// Values go through `Value::from`, so literals, strings, vectors and nested
/// maps can be written inline.
///
/// ```
/// use beanmap_core::{conversion_map, Value};
///
/// let map = conversion_map! {
///     "name" => "Ada",
///     "scores" => vec![1, 2, 3],
///     "address" => conversion_map! { "city" => "London" },
/// };
/// assert_eq!(map["name"], Value::from("Ada"));
/// ```
#[macro_export]
macro_rules! conversion_map {
    () => {
        $crate::ConversionMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::ConversionMap::new();
        $(
            map.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        map
    }};
}
