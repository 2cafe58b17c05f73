//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] is a 64-bit hash computed from a name. Bean types hash their
//! full Rust type path through [`TypeHash::of`], so two types that share a
//! display name still get distinct identities. It is the key the property
//! registry caches descriptor sets under, and the identity used to check that
//! a bean handed to a writer is of the declared nested type.
//!
//! # Examples
//!
//! ```
//! use beanmap_core::TypeHash;
//!
//! let a = TypeHash::from_name("Person");
//! let b = TypeHash::from_name("Person");
//! assert_eq!(a, b);
//! assert_ne!(a, TypeHash::from_name("Address"));
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Domain marker for type hashes
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;
}

/// A deterministic 64-bit hash identifying a bean type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Create a type hash from a type name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Hash of the full Rust type path of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::from_name(std::any::type_name::<T>())
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
