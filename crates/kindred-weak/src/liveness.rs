//! Reachability primitive backing [`Weak`](crate::Weak) observation.
//!
//! A [`Liveness`] handle answers "is the referent still alive, and if so,
//! give it to me". Rust's ownership-tracked equivalent of a collector weak
//! reference is `std::sync::Weak` / `std::rc::Weak`: once every strong owner
//! is dropped, `upgrade` fails forever, so the present → absent transition is
//! one-directional.

use std::rc::{self, Rc};
use std::sync::{self, Arc};

use kindred_core::Payload;

/// A handle whose referent may stop being reachable.
///
/// Implementations must never report a referent reachable again after having
/// reported it unreachable.
pub trait Liveness: 'static {
    type Target: Payload;

    /// Returns the referent if it is still reachable.
    fn get_if_reachable(&self) -> Option<Self::Target>;

    fn is_reachable(&self) -> bool {
        self.get_if_reachable().is_some()
    }
}

impl<T: 'static> Liveness for sync::Weak<T> {
    type Target = Arc<T>;

    fn get_if_reachable(&self) -> Option<Arc<T>> {
        self.upgrade()
    }

    fn is_reachable(&self) -> bool {
        self.strong_count() > 0
    }
}

impl<T: 'static> Liveness for rc::Weak<T> {
    type Target = Rc<T>;

    fn get_if_reachable(&self) -> Option<Rc<T>> {
        self.upgrade()
    }

    fn is_reachable(&self) -> bool {
        self.strong_count() > 0
    }
}

/// An owned value that stays reachable for as long as the handle exists.
#[derive(Debug, Clone)]
pub struct Pinned<A>(pub A);

impl<A: Payload> Liveness for Pinned<A> {
    type Target = A;

    fn get_if_reachable(&self) -> Option<A> {
        Some(self.0.clone())
    }

    fn is_reachable(&self) -> bool {
        true
    }
}
