//! Transition interception for presentation collaborators.
//!
//! Hooks see a `next`/`previous` signal before the session moves and may
//! veto it, in which case the step does not change and the veto is
//! surfaced to the caller.

use std::fmt;

use {
    async_trait::async_trait,
    serde::{Deserialize, Serialize},
};

use stepway_wizard::Step;

/// The two named transition signals a collaborator may intercept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionSignal {
    Next,
    Previous,
}

impl fmt::Display for TransitionSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => write!(f, "next"),
            Self::Previous => write!(f, "previous"),
        }
    }
}

/// The outcome a transition hook returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TransitionAction {
    /// Let the transition proceed normally.
    #[default]
    Proceed,
    /// Cancel the transition, with a reason string.
    Veto(String),
}

/// Trait implemented by collaborators that want a say before the wizard
/// moves. Hooks run in registration order; the first veto wins.
#[async_trait]
pub trait TransitionHook: Send + Sync {
    /// A human-readable name for this hook.
    fn name(&self) -> &str;

    /// Inspect the pending transition away from `step`.
    async fn on_transition(&self, signal: TransitionSignal, step: &Step) -> TransitionAction;
}
