//! [`WeakContext`]: the composable-effect contract for [`Weak`] values.
//!
//! Absence is the short-circuit shape: binding an absent value never runs the
//! next step and yields [`Weak::empty`].

use kindred_core::{Either, Kind, Monad, Payload};

use crate::weak::Weak;

/// Contract instance for the weak-observation context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeakContext;

impl Kind for WeakContext {
    type Of<A: Payload> = Weak<A>;
}

impl Monad for WeakContext {
    fn pure<A: Payload>(&self, a: A) -> Weak<A> {
        Weak::new(a)
    }

    fn bind<A: Payload, B: Payload>(&self, fa: Weak<A>, f: impl FnOnce(A) -> Weak<B>) -> Weak<B> {
        fa.bind(f)
    }

    fn recursive_bind<A: Payload, B: Payload>(
        &self,
        seed: A,
        f: impl FnMut(A) -> Weak<Either<A, B>>,
    ) -> Weak<B> {
        Weak::recursive_bind(seed, f)
    }

    fn map<A: Payload, B: Payload>(&self, fa: Weak<A>, f: impl FnOnce(A) -> B) -> Weak<B> {
        fa.map(f)
    }

    fn lift<A, B, G>(&self, ff: Weak<G>, fa: Weak<A>) -> Weak<B>
    where
        A: Payload,
        B: Payload,
        G: Payload + FnOnce(A) -> B,
    {
        fa.lift(&ff)
    }
}
