//! Action resolution and step content over stored wizard sessions.

use std::sync::Arc;

use tracing::debug;

use stepway_wizard::{WizardRegistry, WizardSession};

use crate::{
    dto::{
        FormStepResult, FormSubmitOutcome, StepContentRequest, StepContentResponse, WizardAction,
        WizardActionRequest, WizardActionResponse,
    },
    error::{Context, Error, Result},
    hooks::{TransitionAction, TransitionHook, TransitionSignal},
    render::{NoopStepRenderer, StepRenderer},
};

/// Client-facing control surface for wizard navigation.
///
/// Every call follows the load-mutate-store cycle: the session is
/// rebuilt from its registry snapshot, navigated, and the cursor written
/// back before the response is produced.
pub struct WizardService {
    registry: WizardRegistry,
    renderer: Arc<dyn StepRenderer>,
    hooks: Vec<Arc<dyn TransitionHook>>,
}

impl WizardService {
    #[must_use]
    pub fn new(registry: WizardRegistry) -> Self {
        Self {
            registry,
            renderer: Arc::new(NoopStepRenderer),
            hooks: Vec::new(),
        }
    }

    /// Replace the content renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn StepRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Register a transition hook. Hooks run in registration order and
    /// the first veto cancels the transition.
    pub fn register_hook(&mut self, hook: Arc<dyn TransitionHook>) {
        self.hooks.push(hook);
    }

    #[must_use]
    pub fn registry(&self) -> &WizardRegistry {
        &self.registry
    }

    /// Resolve a `next`/`previous` action for one wizard.
    pub async fn resolve_action(
        &self,
        request: WizardActionRequest,
    ) -> Result<WizardActionResponse> {
        let action = WizardAction::parse(&request.action)?;
        let mut session = self.load_session(&request.wizard_uid).await?;

        // Re-seat a stale cursor on the step the client is showing.
        if !request.current_step_uid.is_empty()
            && request.current_step_uid != session.current_uid()
        {
            session.jump_to_uid(&request.current_step_uid).await?;
        }

        let signal = match action {
            WizardAction::Next => TransitionSignal::Next,
            WizardAction::Previous => TransitionSignal::Previous,
        };
        self.dispatch_hooks(signal, &session).await?;

        let step = match action {
            WizardAction::Next => session.advance().await?,
            WizardAction::Previous => session.rewind().await?,
        };
        debug!(
            wizard_uid = %request.wizard_uid,
            step_uid = %step.uid,
            %signal,
            "wizard transition"
        );
        Ok(WizardActionResponse {
            next_step_uid: step.uid.clone(),
            step_kind: step.kind.as_str().to_string(),
            form_ref: step.form_ref.clone().unwrap_or_default(),
        })
    }

    /// Fetch the displayable content of one step. An empty `step_uid`
    /// selects the wizard's first step. Never moves the cursor.
    pub async fn step_content(&self, request: StepContentRequest) -> Result<StepContentResponse> {
        let session = self.load_session(&request.wizard_uid).await?;
        let step = if request.step_uid.is_empty() {
            session.steps().first().context("wizard has no steps")?
        } else {
            session
                .steps()
                .step_by_uid(&request.step_uid)
                .ok_or_else(|| {
                    Error::Wizard(stepway_wizard::Error::InvalidStepUid {
                        uid: request.step_uid.clone(),
                    })
                })?
        };
        let content_html = self.renderer.render(step).await?;
        Ok(StepContentResponse {
            step_uid: step.uid.clone(),
            kind: step.kind.as_str().to_string(),
            content_html,
            title: step.title.clone(),
        })
    }

    /// Apply the outcome of a dynamic-form submission: advance the
    /// session on success, report a re-render on validation failure.
    pub async fn apply_form_outcome(
        &self,
        wizard_uid: &str,
        outcome: FormSubmitOutcome,
    ) -> Result<FormStepResult> {
        if !outcome.submitted {
            return Ok(FormStepResult::Rerender {
                html: outcome.html.unwrap_or_default(),
                error: outcome.error,
            });
        }
        let mut session = self.load_session(wizard_uid).await?;
        let step = match outcome.next_step_uid.as_deref() {
            Some(uid) => session.jump_to_uid(uid).await?,
            None => session.advance().await?,
        };
        Ok(FormStepResult::Advanced {
            step_uid: step.uid.clone(),
            step_kind: step.kind.as_str().to_string(),
            form_ref: step.form_ref.clone().unwrap_or_default(),
        })
    }

    async fn load_session(&self, wizard_uid: &str) -> Result<WizardSession> {
        match self.registry.load(wizard_uid).await? {
            Some(session) => Ok(session),
            None => Err(stepway_wizard::Error::UnknownWizard {
                wizard_uid: wizard_uid.to_string(),
            }
            .into()),
        }
    }

    async fn dispatch_hooks(&self, signal: TransitionSignal, session: &WizardSession) -> Result<()> {
        let step = session.current_step()?;
        for hook in &self.hooks {
            match hook.on_transition(signal, step).await {
                TransitionAction::Proceed => {},
                TransitionAction::Veto(reason) => {
                    debug!(hook = hook.name(), %signal, %reason, "transition vetoed");
                    return Err(Error::TransitionVetoed {
                        signal,
                        hook: hook.name().to_string(),
                        reason,
                    });
                },
            }
        }
        Ok(())
    }
}
