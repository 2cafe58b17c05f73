//! Object to map projection.

use tracing::trace;

use beanmap_core::{Bean, ConversionMap, Value};
use beanmap_registry::PropertyRegistry;

use crate::config::ConverterConfig;
use crate::error::{Error, Result};

/// One projection pass over a bean graph.
pub(crate) struct Projector<'a> {
    registry: &'a PropertyRegistry,
    config: &'a ConverterConfig,
}

impl<'a> Projector<'a> {
    pub(crate) fn new(registry: &'a PropertyRegistry, config: &'a ConverterConfig) -> Self {
        Self { registry, config }
    }

    /// Read every readable property of `bean` into a map, in discovery order.
    pub(crate) fn project_bean(&self, bean: &dyn Bean, depth: usize) -> Result<ConversionMap> {
        let object = bean.object_ref();
        if depth >= self.config.max_depth {
            return Err(Error::CyclicReference {
                type_name: object.name,
                depth,
            });
        }

        let properties = self.registry.properties(&object)?;
        let mut map = ConversionMap::with_capacity(properties.len());
        for property in properties.readable() {
            let value = property.read(bean).map_err(|source| Error::Conversion {
                type_name: object.name,
                property: property.name.clone(),
                source,
            })?;
            trace!(
                owner = object.name,
                property = %property.name,
                kind = value.type_name(),
                "read property"
            );
            map.insert(property.name.clone(), self.project_value(value, depth + 1)?);
        }
        Ok(map)
    }

    /// Project a value read from a property. Beans become maps at any nesting.
    pub(crate) fn project_value(&self, value: Value, depth: usize) -> Result<Value> {
        match value {
            Value::Object(bean) => self.project_bean(bean.as_ref(), depth).map(Value::Map),
            Value::Seq(items) => items
                .into_iter()
                .map(|item| self.project_value(item, depth))
                .collect::<Result<Vec<_>>>()
                .map(Value::Seq),
            Value::Map(map) => map
                .into_iter()
                .map(|(key, item)| {
                    self.project_value(item, depth).map(|item| (key, item))
                })
                .collect::<Result<ConversionMap>>()
                .map(Value::Map),
            scalar => Ok(scalar),
        }
    }
}
