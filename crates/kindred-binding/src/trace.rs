//! Step trace recording for the binding state machine.
//!
//! When tracing is enabled via [`BindingConfig::trace_enabled`], the machine
//! records a [`TraceEntry`] each time a request is issued, delivers its
//! payload, short-circuits, or when the block completes.
//!
//! [`BindingConfig::trace_enabled`]: crate::state::BindingConfig::trace_enabled

use serde::{Deserialize, Serialize};

/// What happened at a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceEvent {
    /// The request's wrapped value was produced.
    Issued,
    /// The request's payload was threaded into the block state.
    Delivered,
    /// The request's wrapped value was empty; the chain stopped here.
    ShortCircuited,
    /// Every request delivered. `step` is the number of requests.
    Completed,
}

/// A single entry in the step trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Zero-based request index.
    pub step: usize,
    pub event: TraceEvent,
}
