//! Map to object construction.

use tracing::trace;

use beanmap_core::{Bean, ConversionMap, ObjectRef, TypeTag, Value};
use beanmap_registry::PropertyRegistry;

use crate::coerce::Coercer;
use crate::config::ConverterConfig;
use crate::error::{Error, Result};

/// One construction pass from a map tree.
pub(crate) struct Builder<'a> {
    registry: &'a PropertyRegistry,
    config: &'a ConverterConfig,
    coercer: Coercer,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(registry: &'a PropertyRegistry, config: &'a ConverterConfig) -> Self {
        Self {
            registry,
            config,
            coercer: Coercer::new(*config),
        }
    }

    /// Default-construct the type behind `object` and apply every matching entry.
    ///
    /// Keys without a writable property are skipped. Properties without a key
    /// keep whatever the constructor gave them.
    pub(crate) fn build_bean(
        &self,
        map: ConversionMap,
        object: &ObjectRef,
        depth: usize,
    ) -> Result<Box<dyn Bean>> {
        if depth >= self.config.max_depth {
            return Err(Error::CyclicReference {
                type_name: object.name,
                depth,
            });
        }

        let properties = self.registry.properties(object)?;
        let mut bean = properties.construct().ok_or(Error::Unconstructible {
            type_name: object.name,
        })?;

        for (key, value) in map {
            let Some(property) = properties.get(&key).filter(|p| p.can_write()) else {
                trace!(owner = object.name, key = %key, "no writable property for key");
                continue;
            };
            let target = property.write_type().unwrap_or(&TypeTag::Unknown);
            let value = self.build_value(value, target, depth + 1)?;
            trace!(owner = object.name, property = %key, target = %target, "write property");
            property
                .write(bean.as_mut(), value)
                .map_err(|source| Error::Conversion {
                    type_name: object.name,
                    property: key,
                    source,
                })?;
        }
        Ok(bean)
    }

    /// Build a value for a destination declared as `target`.
    pub(crate) fn build_value(
        &self,
        value: Value,
        target: &TypeTag,
        depth: usize,
    ) -> Result<Value> {
        match (target, value) {
            (TypeTag::Object(object), Value::Map(map)) => {
                self.build_bean(map, object, depth).map(Value::Object)
            }
            (TypeTag::Array(element), Value::Seq(items)) if element.base().is_object() => items
                .into_iter()
                .map(|item| self.build_value(item, element, depth))
                .collect::<Result<Vec<_>>>()
                .map(Value::Seq),
            (target, value) => Ok(self.coercer.coerce(value, target)?),
        }
    }
}
