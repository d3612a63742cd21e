//! Core error types for kindred-core.
//!
//! Effect-level failure is structural (an empty shape inside the context), so
//! the only fallible surface in this crate is the [`ContextRegistry`].
//!
//! [`ContextRegistry`]: crate::registry::ContextRegistry

use thiserror::Error;

/// Core errors produced by the kindred-core crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Attempting to register a context tag that is already registered.
    #[error("duplicate context: '{name}'")]
    DuplicateContext { name: &'static str },

    /// No instance is registered for the requested context tag.
    #[error("context not found: '{name}'")]
    ContextNotFound { name: &'static str },

    /// Every [`ContextId`] has been handed out.
    ///
    /// [`ContextId`]: crate::registry::ContextId
    #[error("context registry full, cannot register '{name}'")]
    RegistryFull { name: &'static str },
}
