//! Property model for beanmap.
//!
//! Turns the raw accessor members a type reports through
//! [`Describe`](beanmap_core::Describe) into named properties, and caches
//! the result per type.
//!
//! # Example
//!
//! ```
//! use beanmap_core::{ClassBuilder, Describe, TypeDescriptor};
//! use beanmap_registry::PropertyRegistry;
//!
//! #[derive(Debug, Default)]
//! struct Flag {
//!     on: bool,
//! }
//!
//! impl Describe for Flag {
//!     fn type_name() -> &'static str {
//!         "Flag"
//!     }
//!
//!     fn describe() -> TypeDescriptor {
//!         ClassBuilder::<Flag>::new()
//!             .constructor(Flag::default)
//!             .reader("isOn", |f: &Flag| f.on)
//!             .writer("setOn", |f: &mut Flag, on: bool| f.on = on)
//!             .build()
//!     }
//! }
//!
//! let registry = PropertyRegistry::new();
//! let props = registry.properties_of::<Flag>().unwrap();
//! let on = props.get("on").unwrap();
//! assert!(on.can_read() && on.can_write());
//! ```

mod discovery;
mod error;
mod property;
mod registry;

pub use discovery::discover;
pub use error::AmbiguousPropertyError;
pub use property::{
    AccessorRole, PropertyAccess, PropertyDescriptor, TypeProperties, parse_accessor,
};
pub use registry::PropertyRegistry;
