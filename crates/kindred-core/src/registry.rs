//! ContextId and ContextRegistry for explicit contract lookup.
//!
//! Generic code normally receives its [`Monad`] instance as a parameter. When
//! instances must be assembled at composition time (plugin tables, test
//! harnesses), the [`ContextRegistry`] maps a context tag's type to its single
//! shared instance. Lookup is always explicit; nothing consults the registry
//! behind the caller's back.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::monad::Monad;

/// Registration-order identifier of a context in a [`ContextRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextId(pub u32);

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContextId({})", self.0)
    }
}

struct Entry {
    id: ContextId,
    name: &'static str,
    instance: Arc<dyn Any + Send + Sync>,
}

/// Typed registry of contract instances keyed by context tag.
///
/// Instances are immutable once registered and handed out as shared
/// [`Arc`]s, so any number of callers may hold the same instance.
#[derive(Default)]
pub struct ContextRegistry {
    /// Entries in registration order, keyed by the tag's type.
    contexts: IndexMap<TypeId, Entry>,
}

impl ContextRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the instance for context `M`, returning its [`ContextId`].
    ///
    /// Returns [`CoreError::DuplicateContext`] if `M` is already registered.
    pub fn register<M>(&mut self, instance: M) -> Result<ContextId, CoreError>
    where
        M: Monad + Send + Sync + 'static,
    {
        let name = type_name::<M>();
        let key = TypeId::of::<M>();
        if self.contexts.contains_key(&key) {
            return Err(CoreError::DuplicateContext { name });
        }

        let id = u32::try_from(self.contexts.len())
            .map(ContextId)
            .map_err(|_| CoreError::RegistryFull { name })?;
        self.contexts.insert(
            key,
            Entry {
                id,
                name,
                instance: Arc::new(instance),
            },
        );
        tracing::debug!(context = name, %id, "registered context");
        Ok(id)
    }

    /// Looks up the shared instance for context `M`.
    pub fn get<M>(&self) -> Result<Arc<M>, CoreError>
    where
        M: Monad + Send + Sync + 'static,
    {
        // Entries are keyed by `TypeId::of::<M>()`, so a hit always downcasts.
        self.contexts
            .get(&TypeId::of::<M>())
            .and_then(|entry| Arc::clone(&entry.instance).downcast::<M>().ok())
            .ok_or(CoreError::ContextNotFound {
                name: type_name::<M>(),
            })
    }

    pub fn contains<M: 'static>(&self) -> bool {
        self.contexts.contains_key(&TypeId::of::<M>())
    }

    /// Returns the [`ContextId`] assigned to `M`, if registered.
    pub fn id_of<M: 'static>(&self) -> Option<ContextId> {
        self.contexts.get(&TypeId::of::<M>()).map(|entry| entry.id)
    }

    /// Type names of the registered contexts, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.contexts.values().map(|entry| entry.name)
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

impl fmt::Debug for ContextRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
