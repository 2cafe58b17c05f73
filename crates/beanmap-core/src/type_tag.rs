//! Declared types of bean properties.
//!
//! [`TypeTag`] is the closed set of shapes a reader can return or a writer
//! can accept. Every coercion and recursion decision is driven by it.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Describe, PrimitiveKind, TypeDescriptor, TypeHash};

/// Reference to a nested bean type.
///
/// Carries enough to describe (and therefore construct) the nested type
/// without a separate lookup table. Equality and hashing use the type hash only.
#[derive(Clone, Copy)]
pub struct ObjectRef {
    pub type_hash: TypeHash,
    pub name: &'static str,
    describe: fn() -> TypeDescriptor,
}

impl ObjectRef {
    /// Reference the bean type `T`.
    pub fn of<T: Describe>() -> Self {
        Self {
            type_hash: T::type_hash(),
            name: T::type_name(),
            describe: T::describe,
        }
    }

    /// Run the type's introspection and return its raw member list.
    pub fn describe(&self) -> TypeDescriptor {
        (self.describe)()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("name", &self.name)
            .field("type_hash", &self.type_hash)
            .finish()
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_hash == other.type_hash
    }
}

impl Eq for ObjectRef {}

impl Hash for ObjectRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_hash.hash(state);
    }
}

/// Declared type of a property accessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Unboxed scalar; never null.
    Primitive(PrimitiveKind),
    /// Boxed scalar; accepts null.
    Boxed(PrimitiveKind),
    /// Nullable string.
    String,
    /// Nullable array of the element type.
    Array(Box<TypeTag>),
    /// Nullable nested bean.
    Object(ObjectRef),
    /// No declared type; values pass through untouched.
    Unknown,
}

impl TypeTag {
    /// Build an array tag around `element`.
    pub fn array_of(element: TypeTag) -> Self {
        TypeTag::Array(Box::new(element))
    }

    /// The nullable form of this tag.
    ///
    /// Primitives become boxed; every other tag is already nullable and is
    /// returned unchanged.
    pub fn boxed(self) -> Self {
        match self {
            TypeTag::Primitive(kind) => TypeTag::Boxed(kind),
            other => other,
        }
    }

    /// Innermost non-array tag.
    pub fn base(&self) -> &TypeTag {
        let mut tag = self;
        while let TypeTag::Array(element) = tag {
            tag = element;
        }
        tag
    }

    pub fn is_nullable(&self) -> bool {
        !matches!(self, TypeTag::Primitive(_))
    }

    pub fn is_primitive_bool(&self) -> bool {
        matches!(self, TypeTag::Primitive(PrimitiveKind::Bool))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, TypeTag::Object(_))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Primitive(kind) => write!(f, "{}", kind),
            TypeTag::Boxed(kind) => write!(f, "{}?", kind),
            TypeTag::String => write!(f, "string"),
            TypeTag::Array(element) => write!(f, "{}[]", element),
            TypeTag::Object(object) => write!(f, "{}", object.name),
            TypeTag::Unknown => write!(f, "?"),
        }
    }
}
