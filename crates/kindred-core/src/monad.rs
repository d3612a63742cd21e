//! The composable-effect contract.
//!
//! [`Monad`] is implemented by a context tag's instance (a stateless unit
//! struct). Callers hold the instance explicitly and pass it to generic code;
//! nothing is resolved implicitly.
//!
//! # Required operations
//!
//! - [`pure`](Monad::pure): wrap a plain value.
//! - [`bind`](Monad::bind): sequence one step into the next.
//! - [`recursive_bind`](Monad::recursive_bind): stack-safe looping bind.
//!
//! Everything else has a default built on `bind` and `pure`. Overrides must be
//! observably identical to the defaults.
//!
//! # Laws
//!
//! ```text
//! bind(pure(a), f)          == f(a)
//! bind(w, pure)             == w
//! bind(bind(w, f), g)       == bind(w, |a| bind(f(a), g))
//! ```
//!
//! # Short-circuit
//!
//! When `fa` carries no payload (absence, failure), `bind` must not invoke the
//! step and must return the empty shape of the result type.

use crate::either::Either;
use crate::eval::Eval;
use crate::kind::{Kind, Payload};

/// Sequential, effectful composition over the context `Self`.
pub trait Monad: Kind {
    /// Wraps a plain value in the context.
    fn pure<A: Payload>(&self, a: A) -> Self::Of<A>;

    /// Applies `f` to the payload of `fa` and flattens one level of context.
    ///
    /// Implementations must be strict: if `fa` carries a payload, `f` has run
    /// by the time `bind` returns. The sequential-binding translator relies on
    /// this to detect short-circuits.
    fn bind<A: Payload, B: Payload>(
        &self,
        fa: Self::Of<A>,
        f: impl FnOnce(A) -> Self::Of<B>,
    ) -> Self::Of<B>;

    /// Repeats `f` while it yields [`Either::Left`], finishing on
    /// [`Either::Right`].
    ///
    /// Must be an explicit loop: native stack depth may not grow with the
    /// number of iterations. An empty observation ends the loop immediately.
    fn recursive_bind<A: Payload, B: Payload>(
        &self,
        seed: A,
        f: impl FnMut(A) -> Self::Of<Either<A, B>>,
    ) -> Self::Of<B>;

    /// Transforms the payload without changing the context shape.
    fn map<A: Payload, B: Payload>(&self, fa: Self::Of<A>, f: impl FnOnce(A) -> B) -> Self::Of<B> {
        self.bind(fa, move |a| self.pure(f(a)))
    }

    /// Applies a wrapped function to a wrapped value.
    fn lift<A, B, G>(&self, ff: Self::Of<G>, fa: Self::Of<A>) -> Self::Of<B>
    where
        A: Payload,
        B: Payload,
        G: Payload + FnOnce(A) -> B,
    {
        self.bind(ff, move |f| self.map(fa, f))
    }

    /// Removes one level of nesting.
    fn flatten<A: Payload>(&self, ffa: Self::Of<Self::Of<A>>) -> Self::Of<A> {
        self.bind(ffa, |fa| fa)
    }

    /// Runs `fa` for its effect, then yields `fb`.
    fn sequence_then<A: Payload, B: Payload>(&self, fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<B> {
        self.bind(fa, move |_| fb)
    }

    /// Like [`sequence_then`](Monad::sequence_then), but `fb` is only forced
    /// once `fa` has produced a payload.
    fn sequence_then_eval<A: Payload, B: Payload>(
        &self,
        fa: Self::Of<A>,
        fb: Eval<Self::Of<B>>,
    ) -> Self::Of<B> {
        self.bind(fa, move |_| fb.value())
    }

    /// Runs both, keeping the payload of `fa`.
    fn keep_first<A: Payload, B: Payload>(&self, fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<A> {
        self.bind(fa, move |a| self.map(fb, move |_| a))
    }

    /// Like [`keep_first`](Monad::keep_first), but `fb` is only forced once
    /// `fa` has produced a payload.
    fn keep_first_eval<A: Payload, B: Payload>(
        &self,
        fa: Self::Of<A>,
        fb: Eval<Self::Of<B>>,
    ) -> Self::Of<A> {
        self.bind(fa, move |a| self.map(fb.value(), move |_| a))
    }
}
