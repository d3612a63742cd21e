//! The [`Weak`] value type.
//!
//! A `Weak<A>` wraps an [`Eval`] of `Option<A>`. Values built from a liveness
//! handle use [`Eval::always`], so each observation re-checks reachability;
//! nothing is cached between observations. Every operator below observes
//! exactly once and works with that single observation.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use kindred_core::{Either, Eval, Payload};

use crate::liveness::{Liveness, Pinned};

/// A value that may stop existing once nothing else keeps it alive.
///
/// Two observable states: present and absent. The only transition is
/// present → absent, driven by the liveness handle; no operation here causes
/// it, and a value that has reported absent never reports present again.
#[derive(Clone)]
pub struct Weak<A> {
    eval: Eval<Option<A>>,
}

impl<A: Payload> Weak<A> {
    /// Wraps an owned value. It stays present for as long as this wrapper
    /// (or a clone of it) exists.
    pub fn new(a: A) -> Self {
        Self::from_liveness(Pinned(a))
    }

    /// Wraps an arbitrary liveness handle.
    pub fn from_liveness<L: Liveness<Target = A>>(handle: L) -> Self {
        Weak {
            eval: Eval::always(move || handle.get_if_reachable()),
        }
    }

    /// A value that is never present.
    pub fn empty() -> Self {
        Weak { eval: Eval::now(None) }
    }

    /// Checks liveness now and returns the payload if still present.
    pub fn observe(&self) -> Option<A> {
        self.eval.value()
    }

    /// Alias of [`observe`](Weak::observe).
    pub fn option(&self) -> Option<A> {
        self.observe()
    }

    /// The deferred observation backing this value.
    pub fn eval(&self) -> &Eval<Option<A>> {
        &self.eval
    }

    pub fn fold<B>(&self, on_absent: impl FnOnce() -> B, on_present: impl FnOnce(A) -> B) -> B {
        match self.observe() {
            Some(a) => on_present(a),
            None => on_absent(),
        }
    }

    /// Applies `f` to the payload if present. The mapped value is owned by the
    /// result and stays present.
    pub fn map<B: Payload>(&self, f: impl FnOnce(A) -> B) -> Weak<B> {
        self.fold(Weak::empty, |a| Weak::new(f(a)))
    }

    /// Delegates to `f`'s own `Weak`, liveness included, if present.
    pub fn bind<B: Payload>(&self, f: impl FnOnce(A) -> Weak<B>) -> Weak<B> {
        self.fold(Weak::empty, f)
    }

    /// Keeps this value unchanged as long as it is present and satisfies `p`.
    pub fn filter(&self, p: impl FnOnce(&A) -> bool) -> Weak<A> {
        self.fold(Weak::empty, |a| if p(&a) { self.clone() } else { Weak::empty() })
    }

    /// Applies a weakly held function to this value.
    pub fn lift<B, G>(&self, ff: &Weak<G>) -> Weak<B>
    where
        B: Payload,
        G: Payload + FnOnce(A) -> B,
    {
        ff.bind(|f| self.map(f))
    }

    pub fn exists(&self, p: impl FnOnce(&A) -> bool) -> bool {
        self.fold(|| false, |a| p(&a))
    }

    /// True only when present and `p` holds; an absent value answers `false`.
    pub fn forall(&self, p: impl FnOnce(&A) -> bool) -> bool {
        self.fold(|| false, |a| p(&a))
    }

    pub fn fold_left<B>(&self, b: B, f: impl FnOnce(B, A) -> B) -> B {
        match self.observe() {
            Some(a) => f(b, a),
            None => b,
        }
    }

    pub fn fold_right<B>(&self, lb: Eval<B>, f: impl FnOnce(A, Eval<B>) -> Eval<B>) -> Eval<B> {
        match self.observe() {
            Some(a) => f(a, lb),
            None => lb,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.observe().is_none()
    }

    pub fn non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the payload, or `fallback()` if the referent is gone.
    pub fn get_or_else(&self, fallback: impl FnOnce() -> A) -> A {
        self.fold(fallback, |a| a)
    }

    /// Returns this value unchanged if present, otherwise `fallback()`.
    pub fn or_else(&self, fallback: impl FnOnce() -> Weak<A>) -> Weak<A> {
        self.fold(fallback, |_| self.clone())
    }

    /// Repeats `f` while it yields [`Either::Left`], wrapping the
    /// [`Either::Right`] result.
    ///
    /// Runs as a loop. An absent observation ends it with
    /// [`empty`](Weak::empty); there is no retry.
    pub fn recursive_bind<S: Payload>(seed: S, mut f: impl FnMut(S) -> Weak<Either<S, A>>) -> Weak<A> {
        let mut current = seed;
        let mut iterations: u64 = 0;
        loop {
            iterations += 1;
            match f(current).observe() {
                None => {
                    tracing::trace!(iterations, "weak referent lost; ending recursive bind");
                    return Weak::empty();
                }
                Some(Either::Left(next)) => current = next,
                Some(Either::Right(done)) => return Weak::new(done),
            }
        }
    }
}

impl<T: 'static> Weak<Arc<T>> {
    /// Observes an `Arc` owned elsewhere; absent once every owner drops it.
    pub fn downgrade(owner: &Arc<T>) -> Self {
        Self::from_liveness(Arc::downgrade(owner))
    }
}

impl<T: 'static> Weak<Rc<T>> {
    /// Single-threaded counterpart of [`Weak::downgrade`].
    pub fn downgrade_rc(owner: &Rc<T>) -> Self {
        Self::from_liveness(Rc::downgrade(owner))
    }
}

impl<A: Payload + fmt::Debug> fmt::Debug for Weak<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.observe() {
            Some(a) => f.debug_tuple("Weak").field(&a).finish(),
            None => f.write_str("Weak(<absent>)"),
        }
    }
}

/// Extension for wrapping any payload with `value.weak()`.
pub trait IntoWeak: Payload + Sized {
    fn weak(self) -> Weak<Self> {
        Weak::new(self)
    }
}

impl<T: Payload> IntoWeak for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn map_on_live_value() {
        assert_eq!(Weak::new(5).map(|x| x + 1).observe(), Some(6));
    }

    #[test]
    fn map_on_empty_stays_absent() {
        assert_eq!(Weak::<i32>::empty().map(|x| x + 1).observe(), None);
    }

    #[test]
    fn weak_extension_wraps_value() {
        let w = "hello".to_string().weak();
        assert_eq!(w.option(), Some("hello".to_string()));
        assert!(w.non_empty());
    }

    #[test]
    fn absence_is_monotonic() {
        let owner = Arc::new(10);
        let w = Weak::downgrade(&owner);
        assert_eq!(w.observe().as_deref(), Some(&10));

        drop(owner);
        for _ in 0..5 {
            assert!(w.observe().is_none());
        }
    }

    #[test]
    fn observations_are_not_cached() {
        let owner = Rc::new("gone soon");
        let w = Weak::downgrade_rc(&owner);
        let before = w.is_empty();
        drop(owner);
        let after = w.is_empty();
        assert!(!before);
        assert!(after);
        assert!(!w.eval().is_memoized());
    }

    #[test]
    fn reclaimed_on_another_thread() {
        let owner = Arc::new(vec![1, 2, 3]);
        let w = Weak::downgrade(&owner);
        assert!(w.non_empty());

        std::thread::spawn(move || drop(owner)).join().unwrap();
        assert!(w.is_empty());
    }

    #[test]
    fn bind_delegates_to_inner_liveness() {
        let inner_owner = Arc::new(7);
        let inner = Weak::downgrade(&inner_owner);
        let outer = Weak::new(());

        let bound = outer.bind(|_| inner.clone());
        assert_eq!(bound.observe().as_deref(), Some(&7));

        drop(inner_owner);
        assert!(bound.is_empty());
    }

    #[test]
    fn bind_on_empty_never_calls_step() {
        let called = Cell::new(false);
        let result = Weak::<i32>::empty().bind(|x| {
            called.set(true);
            Weak::new(x)
        });
        assert!(result.is_empty());
        assert!(!called.get());
    }

    #[test]
    fn filter_keeps_or_drops() {
        let w = Weak::new(4);
        assert_eq!(w.filter(|x| x % 2 == 0).observe(), Some(4));
        assert_eq!(w.filter(|x| x % 2 == 1).observe(), None);
        assert_eq!(Weak::<i32>::empty().filter(|_| true).observe(), None);
    }

    #[test]
    fn filter_keeps_original_liveness() {
        let owner = Arc::new(2);
        let kept = Weak::downgrade(&owner).filter(|x| **x == 2);
        assert!(kept.non_empty());
        drop(owner);
        assert!(kept.is_empty());
    }

    #[test]
    fn lift_applies_weak_function() {
        let double = (|x: i32| x * 2).weak();
        assert_eq!(Weak::new(21).lift(&double).observe(), Some(42));
        assert_eq!(Weak::<i32>::empty().lift(&double).observe(), None);
        assert_eq!(Weak::new(21).lift(&Weak::<fn(i32) -> i32>::empty()).observe(), None);
    }

    #[test]
    fn boolean_queries() {
        let present = Weak::new(3);
        let absent = Weak::<i32>::empty();

        assert!(present.exists(|x| *x == 3));
        assert!(!present.exists(|x| *x == 4));
        assert!(!absent.exists(|_| true));

        assert!(present.forall(|x| *x > 0));
        assert!(!present.forall(|x| *x > 5));
        assert!(!absent.forall(|_| true));

        assert!(absent.is_empty());
        assert!(!absent.non_empty());
    }

    #[test]
    fn forall_on_lost_referent_is_false() {
        let owner = Arc::new(1);
        let w = Weak::downgrade(&owner);
        assert!(w.forall(|x| **x == 1));

        drop(owner);
        assert!(!w.forall(|_| true));
        assert!(!Weak::<i32>::empty().forall(|_| true));
    }

    #[test]
    fn folds() {
        let present = Weak::new(3);
        let absent = Weak::<i32>::empty();

        assert_eq!(present.fold(|| 0, |x| x * 10), 30);
        assert_eq!(absent.fold(|| 0, |x| x * 10), 0);

        assert_eq!(present.fold_left(1, |acc, x| acc + x), 4);
        assert_eq!(absent.fold_left(1, |acc, x| acc + x), 1);

        let right = present.fold_right(Eval::now(1), |x, lb| Eval::later(move || x + lb.value()));
        assert_eq!(right.value(), 4);
        let right = absent.fold_right(Eval::now(1), |x, lb| Eval::later(move || x + lb.value()));
        assert_eq!(right.value(), 1);
    }

    #[test]
    fn recovery() {
        let absent = Weak::<i32>::empty();
        assert_eq!(absent.get_or_else(|| 9), 9);
        assert_eq!(Weak::new(1).get_or_else(|| 9), 1);

        assert_eq!(absent.or_else(|| Weak::new(8)).observe(), Some(8));
        assert_eq!(Weak::new(1).or_else(|| panic!("not needed")).observe(), Some(1));
    }

    #[test]
    fn recursive_bind_counts_up() {
        let result = Weak::recursive_bind(0, |n| {
            Weak::new(if n < 3 { Either::Left(n + 1) } else { Either::Right(n) })
        });
        assert_eq!(result.observe(), Some(3));
    }

    #[test]
    fn recursive_bind_stops_on_first_absence() {
        let calls = Cell::new(0);
        let result: Weak<i32> = Weak::recursive_bind(0, |n: i32| {
            calls.set(calls.get() + 1);
            if n == 2 {
                Weak::empty()
            } else {
                Weak::new(Either::Left(n + 1))
            }
        });
        assert!(result.is_empty());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn debug_shows_current_observation() {
        assert_eq!(format!("{:?}", Weak::new(1)), "Weak(1)");
        assert_eq!(format!("{:?}", Weak::<i32>::empty()), "Weak(<absent>)");
    }
}
