use thiserror::Error;

use beanmap_core::TypeTag;

/// Two accessors map to the same property and their types cannot be reconciled.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("ambiguous property '{property}' on '{type_name}': {first} vs {second}")]
pub struct AmbiguousPropertyError {
    pub type_name: &'static str,
    pub property: String,
    pub first: TypeTag,
    pub second: TypeTag,
}
