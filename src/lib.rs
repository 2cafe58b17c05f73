//! beanmap - convert property-bearing objects to ordered maps and back.
//!
//! A type opts in by implementing [`Describe`], listing its constructor and
//! its `getX` / `isX` / `setX` accessors through a [`ClassBuilder`]. From
//! those accessors beanmap discovers named properties once per type, then:
//!
//! - [`to_map`] reads every readable property into a [`ConversionMap`],
//!   turning nested beans into nested maps;
//! - [`from_map`] default-constructs the type and sets every writable
//!   property present in the map, coercing values to the declared types.
//!
//! # Example
//!
//! ```
//! use beanmap::{ClassBuilder, Describe, TypeDescriptor, conversion_map};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Point {
//!     x: i32,
//!     label: Option<String>,
//! }
//!
//! impl Describe for Point {
//!     fn type_name() -> &'static str {
//!         "Point"
//!     }
//!
//!     fn describe() -> TypeDescriptor {
//!         ClassBuilder::<Point>::new()
//!             .constructor(Point::default)
//!             .reader("getX", |p: &Point| p.x)
//!             .writer("setX", |p: &mut Point, x: i32| p.x = x)
//!             .reader("getLabel", |p: &Point| p.label.clone())
//!             .writer("setLabel", |p: &mut Point, l: Option<String>| p.label = l)
//!             .build()
//!     }
//! }
//!
//! let map = beanmap::to_map(&Point { x: 3, label: None }).unwrap();
//! assert_eq!(map, conversion_map! { "x" => 3, "label" => beanmap::Value::Null });
//!
//! let back: Point = beanmap::from_map(conversion_map! { "x" => 7 }).unwrap();
//! assert_eq!(back, Point { x: 7, label: None });
//! ```

mod coerce;
mod config;
mod construct;
mod converter;
mod error;
mod project;

use lazy_static::lazy_static;

pub use beanmap_core::{
    AccessError, Bean, ClassBuilder, ConversionMap, Describe, FromValue, IntoValue, ObjectRef,
    PrimitiveKind, Reflect, TypeDescriptor, TypeHash, TypeTag, Value, conversion_map,
    impl_bean_value,
};
pub use beanmap_registry::{
    AmbiguousPropertyError, PropertyAccess, PropertyDescriptor, PropertyRegistry, TypeProperties,
};
pub use coerce::Coercer;
pub use config::ConverterConfig;
pub use converter::Converter;
pub use error::{CoercionError, Error, Result};

lazy_static! {
    static ref DEFAULT: Converter = Converter::default();
}

/// Project `bean` with the default converter.
pub fn to_map(bean: &dyn Bean) -> Result<ConversionMap> {
    DEFAULT.to_map(bean)
}

/// Build a `T` from `map` with the default converter.
pub fn from_map<T: Describe>(map: ConversionMap) -> Result<T> {
    DEFAULT.from_map_as(map)
}
