//! `Option`-backed context shared by unit tests across the workspace.

use crate::either::Either;
use crate::kind::{Kind, Payload};
use crate::monad::Monad;

/// Strict context whose empty shape is `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionContext;

impl Kind for OptionContext {
    type Of<A: Payload> = Option<A>;
}

impl Monad for OptionContext {
    fn pure<A: Payload>(&self, a: A) -> Option<A> {
        Some(a)
    }

    fn bind<A: Payload, B: Payload>(
        &self,
        fa: Option<A>,
        f: impl FnOnce(A) -> Option<B>,
    ) -> Option<B> {
        fa.and_then(f)
    }

    fn recursive_bind<A: Payload, B: Payload>(
        &self,
        seed: A,
        mut f: impl FnMut(A) -> Option<Either<A, B>>,
    ) -> Option<B> {
        let mut current = seed;
        loop {
            match f(current)? {
                Either::Left(next) => current = next,
                Either::Right(done) => return Some(done),
            }
        }
    }
}
