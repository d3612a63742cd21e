pub mod kind;
pub mod either;
pub mod eval;
pub mod monad;
pub mod registry;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

// Re-export commonly used types
pub use kind::{Kind, Payload};
pub use either::Either;
pub use eval::Eval;
pub use monad::Monad;
pub use registry::{ContextId, ContextRegistry};
pub use error::CoreError;
