//! PropertyRegistry - memoized property discovery.
//!
//! [`PropertyRegistry`] maps a bean's [`TypeHash`] to its discovered
//! [`TypeProperties`]. Entries are computed on first use and never change.
//!
//! # Thread Safety
//!
//! Lookups are concurrent reads on a sharded map. Discovery of a missing type
//! runs outside any lock; the result is published with a single
//! insert-if-absent, so threads racing on the same type all end up sharing the
//! first published set, and discovery of one type never waits on another.

use std::sync::Arc;

use dashmap::DashMap;
use lazy_static::lazy_static;
use rustc_hash::FxBuildHasher;
use tracing::debug;

use beanmap_core::{Describe, ObjectRef, TypeHash};

use crate::discovery::discover;
use crate::{AmbiguousPropertyError, TypeProperties};

lazy_static! {
    static ref GLOBAL: Arc<PropertyRegistry> = Arc::new(PropertyRegistry::new());
}

/// Cache of discovered property sets, keyed by type identity.
pub struct PropertyRegistry {
    cache: DashMap<TypeHash, Arc<TypeProperties>, FxBuildHasher>,
}

impl PropertyRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            cache: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// The process-wide registry.
    pub fn global() -> Arc<PropertyRegistry> {
        Arc::clone(&GLOBAL)
    }

    /// Property set of the type behind `object`, discovering it on first use.
    pub fn properties(
        &self,
        object: &ObjectRef,
    ) -> Result<Arc<TypeProperties>, AmbiguousPropertyError> {
        if let Some(cached) = self.get(object.type_hash) {
            return Ok(cached);
        }

        let discovered = Arc::new(discover(&object.describe())?);
        let entry = self.cache.entry(object.type_hash).or_insert(discovered);
        debug!(type_name = object.name, type_hash = %object.type_hash, "cached property set");
        Ok(Arc::clone(entry.value()))
    }

    /// Property set of `T`.
    pub fn properties_of<T: Describe>(
        &self,
    ) -> Result<Arc<TypeProperties>, AmbiguousPropertyError> {
        self.properties(&ObjectRef::of::<T>())
    }

    /// Cached property set, without triggering discovery.
    pub fn get(&self, type_hash: TypeHash) -> Option<Arc<TypeProperties>> {
        self.cache.get(&type_hash).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, type_hash: TypeHash) -> bool {
        self.cache.contains_key(&type_hash)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for PropertyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
