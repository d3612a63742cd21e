//! Binding state machine with step-by-step execution.
//!
//! The [`Binding`] runs a block's extraction requests one at a time. Each
//! step pops the next link from the pending queue and drives it with one
//! [`Monad::bind`] over the accumulated state. The state transitions are:
//! `Ready -> Running -> (Completed | ShortCircuited)`.
//!
//! A link signals through a `Cell<bool>` whether its request delivered a
//! payload. Because `bind` is strict, the flag is settled when `bind` returns:
//! an unset flag means the request's wrapped value short-circuited, and the
//! remaining links are dropped without running.

use std::cell::Cell;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use kindred_core::{Kind, Monad, Payload};

use crate::trace::{TraceEntry, TraceEvent};

/// One pending extraction request, already closed over its `store` step.
pub(crate) type Link<'m, M, S> = Box<dyn FnOnce(S, &Cell<bool>) -> <M as Kind>::Of<S> + 'm>;

/// Execution state of the binding state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindingState {
    /// Nothing issued yet.
    Ready,
    /// Between steps; `next_step` is the index of the next request.
    Running { next_step: usize },
    /// Every request delivered a payload.
    Completed { steps: usize },
    /// The request at `at_step` short-circuited; later requests never ran.
    ShortCircuited { at_step: usize },
}

impl BindingState {
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            BindingState::Completed { .. } | BindingState::ShortCircuited { .. }
        )
    }
}

/// Configuration for the binding state machine.
#[derive(Debug, Clone, Default)]
pub struct BindingConfig {
    /// Whether to record a step trace.
    pub trace_enabled: bool,
}

/// Everything but the accumulated value, so the value can be threaded by
/// move through [`Cursor::resolve`].
struct Cursor<'m, M: Monad, S: Payload> {
    monad: &'m M,
    pending: VecDeque<Link<'m, M, S>>,
    state: BindingState,
    /// Number of requests issued so far.
    issued: usize,
    trace: Option<Vec<TraceEntry>>,
}

impl<'m, M: Monad, S: Payload> Cursor<'m, M, S> {
    fn is_active(&self) -> bool {
        !self.state.is_finished()
    }

    fn record(&mut self, step: usize, event: TraceEvent) {
        if let Some(trace) = &mut self.trace {
            trace.push(TraceEntry { step, event });
        }
    }

    fn complete(&mut self) {
        self.state = BindingState::Completed { steps: self.issued };
        self.record(self.issued, TraceEvent::Completed);
        tracing::debug!(steps = self.issued, "binding completed");
    }

    /// Drives the next link over `acc`, returning the new accumulated value.
    fn resolve(&mut self, acc: M::Of<S>) -> M::Of<S> {
        let Some(link) = self.pending.pop_front() else {
            self.complete();
            return acc;
        };

        let step = self.issued;
        self.issued += 1;
        self.record(step, TraceEvent::Issued);
        tracing::trace!(step, "issuing extraction request");

        let delivered = Cell::new(false);
        let next = self.monad.bind(acc, |state| link(state, &delivered));

        if delivered.get() {
            self.record(step, TraceEvent::Delivered);
            if self.pending.is_empty() {
                self.complete();
            } else {
                self.state = BindingState::Running {
                    next_step: self.issued,
                };
            }
        } else {
            let dropped = self.pending.len();
            self.pending.clear();
            self.state = BindingState::ShortCircuited { at_step: step };
            self.record(step, TraceEvent::ShortCircuited);
            tracing::debug!(step, dropped, "extraction request short-circuited");
        }
        next
    }
}

/// The binding state machine for one block.
///
/// Created by [`Block::into_binding`](crate::Block::into_binding). Holds the
/// contract instance, the queue of pending links, and the accumulated wrapped
/// state, which starts as `pure(seed)`.
pub struct Binding<'m, M: Monad, S: Payload> {
    cursor: Cursor<'m, M, S>,
    acc: M::Of<S>,
}

impl<'m, M: Monad, S: Payload> Binding<'m, M, S> {
    pub(crate) fn new(
        monad: &'m M,
        seed: S,
        links: impl IntoIterator<Item = Link<'m, M, S>>,
        config: BindingConfig,
    ) -> Self {
        let trace = if config.trace_enabled {
            Some(Vec::new())
        } else {
            None
        };

        Binding {
            cursor: Cursor {
                monad,
                pending: links.into_iter().collect(),
                state: BindingState::Ready,
                issued: 0,
                trace,
            },
            acc: monad.pure(seed),
        }
    }

    /// Advances by one request. Does nothing once finished.
    pub fn step(&mut self) -> &BindingState {
        if self.cursor.is_active() {
            let acc = self.acc.clone();
            self.acc = self.cursor.resolve(acc);
        }
        &self.cursor.state
    }

    /// Steps until the machine finishes.
    pub fn run(&mut self) -> &BindingState {
        while self.cursor.is_active() {
            self.step();
        }
        &self.cursor.state
    }

    pub fn state(&self) -> &BindingState {
        &self.cursor.state
    }

    /// Number of requests not yet issued.
    pub fn pending(&self) -> usize {
        self.cursor.pending.len()
    }

    /// Returns the step trace (if tracing was enabled).
    pub fn trace(&self) -> Option<&[TraceEntry]> {
        self.cursor.trace.as_deref()
    }

    /// Runs the remaining requests and maps the final state through `f`.
    ///
    /// If a request short-circuited, `f` never runs and the context's empty
    /// shape is returned.
    pub fn finish<B: Payload>(self, f: impl FnOnce(S) -> B) -> M::Of<B> {
        self.finish_with_trace(f).0
    }

    /// Like [`finish`](Binding::finish), also returning the recorded trace
    /// (empty when tracing is disabled).
    pub fn finish_with_trace<B: Payload>(
        self,
        f: impl FnOnce(S) -> B,
    ) -> (M::Of<B>, Vec<TraceEntry>) {
        let Binding { mut cursor, mut acc } = self;
        while cursor.is_active() {
            acc = cursor.resolve(acc);
        }
        let result = cursor.monad.map(acc, f);
        (result, cursor.trace.unwrap_or_default())
    }
}
