//! Weak observation of values that may stop existing.
//!
//! A [`Weak`] value behaves like an `Option` whose presence is decided at
//! observation time: every access re-checks whether the referent is still
//! reachable. Presence may go from present to absent between two
//! observations, never the reverse.
//!
//! # Modules
//!
//! - [`liveness`]: the reachability primitive ([`Liveness`]) and its
//!   implementations for `std` weak pointers and pinned values
//! - [`weak`]: the [`Weak`] value type and its operators
//! - [`context`]: [`WeakContext`], the composable-effect contract instance
//!
//! # Creating values
//!
//! - `Weak::new(value)` / `value.weak()`: an owned value, alive for as long as
//!   the wrapper exists
//! - `Weak::downgrade(&arc)`: observes an `Arc` owned elsewhere
//! - `Weak::empty()`: never present

pub mod context;
pub mod liveness;
pub mod weak;

pub use context::WeakContext;
pub use liveness::{Liveness, Pinned};
pub use weak::{IntoWeak, Weak};
