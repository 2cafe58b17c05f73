//! The public conversion entry point.

use std::sync::Arc;

use tracing::debug;

use beanmap_core::{Bean, ConversionMap, Describe, ObjectRef, TypeTag, Value};
use beanmap_registry::{PropertyRegistry, TypeProperties};

use crate::coerce::Coercer;
use crate::config::ConverterConfig;
use crate::construct::Builder;
use crate::error::{CoercionError, Result};
use crate::project::Projector;

/// Converts beans to [`ConversionMap`]s and back.
///
/// A converter is cheap to clone and safe to share between threads. All
/// converters built with [`Converter::new`] share the process-wide
/// [`PropertyRegistry`], so each type is only discovered once.
#[derive(Clone)]
pub struct Converter {
    registry: Arc<PropertyRegistry>,
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self::with_registry(PropertyRegistry::global(), config)
    }

    /// Converter backed by a private registry.
    pub fn with_registry(registry: Arc<PropertyRegistry>, config: ConverterConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn registry(&self) -> &PropertyRegistry {
        &self.registry
    }

    /// Property set of the type behind `object`.
    pub fn properties(&self, object: &ObjectRef) -> Result<Arc<TypeProperties>> {
        Ok(self.registry.properties(object)?)
    }

    pub fn properties_of<T: Describe>(&self) -> Result<Arc<TypeProperties>> {
        self.properties(&ObjectRef::of::<T>())
    }

    /// Project every readable property of `bean` into a map.
    ///
    /// Nested beans become nested maps, arrays become sequences, and null
    /// property values are kept as [`Value::Null`] entries.
    pub fn to_map(&self, bean: &dyn Bean) -> Result<ConversionMap> {
        #[cfg(feature = "profiling")]
        profiling::scope!("Converter::to_map");

        let map = Projector::new(&self.registry, &self.config).project_bean(bean, 0)?;
        debug!(
            type_name = bean.type_name(),
            entries = map.len(),
            "projected bean"
        );
        Ok(map)
    }

    /// Project an arbitrary value; beans anywhere inside it become maps.
    pub fn to_value(&self, value: Value) -> Result<Value> {
        Projector::new(&self.registry, &self.config).project_value(value, 0)
    }

    /// Build an instance of the type behind `object` from `map`.
    pub fn from_map(&self, map: ConversionMap, object: &ObjectRef) -> Result<Box<dyn Bean>> {
        #[cfg(feature = "profiling")]
        profiling::scope!("Converter::from_map");

        let entries = map.len();
        let bean = Builder::new(&self.registry, &self.config).build_bean(map, object, 0)?;
        debug!(type_name = object.name, entries, "constructed bean");
        Ok(bean)
    }

    /// Typed form of [`Converter::from_map`].
    pub fn from_map_as<T: Describe>(&self, map: ConversionMap) -> Result<T> {
        let object = ObjectRef::of::<T>();
        let bean = self.from_map(map, &object)?;
        let actual = bean.type_name();
        bean.downcast::<T>().ok_or_else(|| {
            CoercionError {
                from: actual,
                to: TypeTag::Object(object),
                value: format!("<{actual}>"),
            }
            .into()
        })
    }

    /// Build a value for a destination declared as `target`.
    ///
    /// Maps under object tags are constructed, everything else is coerced.
    pub fn from_value(&self, value: Value, target: &TypeTag) -> Result<Value> {
        Builder::new(&self.registry, &self.config).build_value(value, target, 0)
    }

    /// Coerce a single value without constructing beans.
    pub fn coerce(
        &self,
        value: Value,
        target: &TypeTag,
    ) -> std::result::Result<Value, CoercionError> {
        Coercer::new(self.config).coerce(value, target)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("config", &self.config)
            .field("cached_types", &self.registry.len())
            .finish()
    }
}
