//! Primitive scalar kinds shared by the type tags and the coercion table.

use std::fmt;

/// Primitive scalar kinds.
///
/// These are the unboxed scalar types a bean property can declare. The same
/// kinds appear boxed (nullable) through [`TypeTag::Boxed`](crate::TypeTag::Boxed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Char,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Get the name of this primitive type.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Int8 => "int8",
            PrimitiveKind::Int16 => "int16",
            PrimitiveKind::Int32 => "int32",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::Float => "float32",
            PrimitiveKind::Double => "float64",
        }
    }

    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Int8 | PrimitiveKind::Int16 | PrimitiveKind::Int32 | PrimitiveKind::Int64
        )
    }

    /// Inclusive integer range for the integer kinds.
    pub const fn integer_range(self) -> Option<(i64, i64)> {
        match self {
            PrimitiveKind::Int8 => Some((i8::MIN as i64, i8::MAX as i64)),
            PrimitiveKind::Int16 => Some((i16::MIN as i64, i16::MAX as i64)),
            PrimitiveKind::Int32 => Some((i32::MIN as i64, i32::MAX as i64)),
            PrimitiveKind::Int64 => Some((i64::MIN, i64::MAX)),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_ranges() {
        assert_eq!(PrimitiveKind::Int8.integer_range(), Some((-128, 127)));
        assert_eq!(PrimitiveKind::Int16.integer_range(), Some((-32768, 32767)));
        assert_eq!(PrimitiveKind::Float.integer_range(), None);
    }

    #[test]
    fn classification() {
        assert!(PrimitiveKind::Int16.is_integer());
        assert!(!PrimitiveKind::Double.is_integer());
        assert!(!PrimitiveKind::Bool.is_integer());
    }

    #[test]
    fn display_names() {
        assert_eq!(PrimitiveKind::Int32.to_string(), "int32");
        assert_eq!(PrimitiveKind::Double.to_string(), "float64");
    }
}
