//! Request/response contracts between the wizard core and its
//! presentation collaborators.
//!
//! The gateway resolves `next`/`previous` actions against stored wizard
//! sessions, serves step content through an injected renderer, and
//! consumes dynamic-form submission outcomes. Transport, templating,
//! and form validation all live outside; only their shapes appear here.

pub mod dto;
pub mod error;
pub mod hooks;
pub mod render;
pub mod service;

pub use {
    dto::{
        FormStepResult, FormSubmitOutcome, StepContentRequest, StepContentResponse, WizardAction,
        WizardActionRequest, WizardActionResponse, WizardChrome,
    },
    error::{Context, Error, Result},
    hooks::{TransitionAction, TransitionHook, TransitionSignal},
    render::{NoopStepRenderer, StepRenderer},
    service::WizardService,
};
