//! Sequential-binding translator.
//!
//! Lets a block of dependent effectful steps be written as a straight list of
//! extraction requests and runs it as a chain of [`Monad::bind`] calls.
//!
//! # Architecture
//!
//! - [`Block`] collects extraction requests. Each request produces a wrapped
//!   value from the block's state `S`; its payload is stored back into `S` for
//!   the requests that follow.
//! - [`Binding`] is the state machine that runs a block:
//!   `Ready -> Running -> (Completed | ShortCircuited)`. Pending requests sit
//!   in a queue of links and are driven by a loop, one `bind` per link, so the
//!   native stack does not grow with the number of requests.
//! - [`BindingConfig`] switches on [`TraceEntry`] recording.
//! - [`binding!`] is compile-time sugar that expands a short fixed block into
//!   nested binds.
//!
//! # Usage
//!
//! ```ignore
//! let sum = Block::new(&WeakContext, (0, 0))
//!     .extract(|_| Weak::new(2), |s, a| s.0 = a)
//!     .extract(|s| Weak::new(s.0 + 1), |s, b| s.1 = b)
//!     .finish(|(a, b)| a + b);
//! assert_eq!(sum.observe(), Some(5));
//! ```

pub mod block;
mod macros;
pub mod state;
pub mod trace;

pub use block::Block;
pub use state::{Binding, BindingConfig, BindingState};
pub use trace::{TraceEntry, TraceEvent};

pub use kindred_core::{Kind, Monad, Payload};
