//! Deferred evaluation of a value.
//!
//! [`Eval`] wraps a computation of a value in one of three strategies:
//! - [`Eval::now`]: already evaluated.
//! - [`Eval::always`]: re-evaluated on every [`value`](Eval::value) call, never
//!   memoized. Weak observation relies on this to re-check liveness.
//! - [`Eval::later`]: evaluated on first access, memoized afterwards.
//!
//! Forcing an `Eval` runs its thunk at most once per call and never recurses.

use std::cell::LazyCell;
use std::fmt;
use std::rc::Rc;

type Thunk<T> = Box<dyn FnOnce() -> T>;

/// A possibly deferred, possibly memoized computation of a `T`.
pub enum Eval<T> {
    Now(T),
    Always(Rc<dyn Fn() -> T>),
    Later(Rc<LazyCell<T, Thunk<T>>>),
}

impl<T> Eval<T> {
    /// Wraps an already computed value.
    pub fn now(value: T) -> Self {
        Eval::Now(value)
    }

    /// Wraps a computation that runs again on every observation.
    pub fn always(compute: impl Fn() -> T + 'static) -> Self {
        Eval::Always(Rc::new(compute))
    }

    /// Wraps a computation that runs once, on first observation.
    pub fn later(compute: impl FnOnce() -> T + 'static) -> Self {
        let thunk: Thunk<T> = Box::new(compute);
        Eval::Later(Rc::new(LazyCell::new(thunk)))
    }

    /// Whether repeated observations are guaranteed to yield the same value.
    pub fn is_memoized(&self) -> bool {
        !matches!(self, Eval::Always(_))
    }
}

impl<T: Clone> Eval<T> {
    /// Forces the computation and returns its value.
    pub fn value(&self) -> T {
        match self {
            Eval::Now(value) => value.clone(),
            Eval::Always(compute) => compute(),
            Eval::Later(cell) => LazyCell::force(cell).clone(),
        }
    }
}

impl<T: Clone> Clone for Eval<T> {
    fn clone(&self) -> Self {
        match self {
            Eval::Now(value) => Eval::Now(value.clone()),
            Eval::Always(compute) => Eval::Always(Rc::clone(compute)),
            Eval::Later(cell) => Eval::Later(Rc::clone(cell)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Eval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eval::Now(value) => f.debug_tuple("Now").field(value).finish(),
            Eval::Always(_) => f.write_str("Always(..)"),
            Eval::Later(_) => f.write_str("Later(..)"),
        }
    }
}
