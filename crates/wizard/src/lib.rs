//! Step-sequencing engine for modal wizard dialogues.
//!
//! A wizard is an ordered [`StepCollection`] traversed one step at a time
//! by a [`WizardSession`], whose cursor is written through to the
//! [`WizardRegistry`] on every transition. Steps may carry explicit
//! `next`/`prev` override links that bypass list order.

pub mod collection;
pub mod error;
pub mod registry;
pub mod session;
pub mod step;

pub use {
    collection::StepCollection,
    error::{Context, Error, Result},
    registry::{WizardRegistry, WizardSnapshot},
    session::WizardSession,
    step::{Step, StepKind},
};
