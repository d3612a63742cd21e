//! Block builder for sequential binding.
//!
//! A [`Block`] is an ordered list of extraction requests over an explicit
//! state `S`, which stands in for the local variables of a straight-line
//! block. Request *i* sees the state after requests `0..i` stored their
//! payloads, and is not issued until request *i - 1* has delivered.

use std::cell::Cell;

use smallvec::SmallVec;

use kindred_core::{Monad, Payload};

use crate::state::{Binding, BindingConfig, Link};

/// An ordered sequence of extraction requests in context `M`.
pub struct Block<'m, M: Monad, S: Payload> {
    monad: &'m M,
    seed: S,
    links: SmallVec<[Link<'m, M, S>; 8]>,
    config: BindingConfig,
}

impl<'m, M: Monad, S: Payload> Block<'m, M, S> {
    /// Starts an empty block with initial state `seed`.
    pub fn new(monad: &'m M, seed: S) -> Self {
        Block {
            monad,
            seed,
            links: SmallVec::new(),
            config: BindingConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BindingConfig) -> Self {
        self.config = config;
        self
    }

    /// Appends an extraction request.
    ///
    /// `request` builds the wrapped value from the current state; once the
    /// payload is available, `store` threads it into the state.
    pub fn extract<A: Payload>(
        mut self,
        request: impl FnOnce(&S) -> M::Of<A> + 'm,
        store: impl FnOnce(&mut S, A) + 'm,
    ) -> Self {
        let monad = self.monad;
        let link: Link<'m, M, S> = Box::new(move |state: S, delivered: &Cell<bool>| {
            let wa = request(&state);
            monad.bind(wa, move |a| {
                delivered.set(true);
                let mut state = state;
                store(&mut state, a);
                monad.pure(state)
            })
        });
        self.links.push(link);
        self
    }

    /// Appends a request that runs for its effect only; the payload is
    /// discarded, but an empty value still short-circuits the block.
    pub fn then<A: Payload>(self, request: impl FnOnce(&S) -> M::Of<A> + 'm) -> Self {
        self.extract(request, |_, _| {})
    }

    /// Number of requests in the block.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Hands the block to the state machine without running it.
    pub fn into_binding(self) -> Binding<'m, M, S> {
        Binding::new(self.monad, self.seed, self.links, self.config)
    }

    /// Runs the block and maps its final state through `f`.
    ///
    /// An empty block yields `pure(f(seed))`.
    pub fn finish<B: Payload>(self, f: impl FnOnce(S) -> B) -> M::Of<B> {
        self.into_binding().finish(f)
    }
}
