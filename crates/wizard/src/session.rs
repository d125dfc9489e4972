//! One in-progress traversal of a step collection, with a persisted
//! cursor.

use crate::{
    collection::StepCollection,
    error::{Error, Result},
    registry::{WizardRegistry, WizardSnapshot},
    step::Step,
};

/// A wizard session: the owned step list plus the current-step cursor.
///
/// Navigation calls write the cursor through to the registry before the
/// in-memory state changes, so a failed store leaves the session where
/// it was. There is no separate save step.
#[derive(Debug)]
pub struct WizardSession {
    wizard_uid: String,
    steps: StepCollection,
    current_uid: String,
    registry: WizardRegistry,
}

impl WizardSession {
    /// Create a session over `steps`, generating a wizard uid when none
    /// is supplied.
    ///
    /// The cursor starts on the first step. The initial snapshot is
    /// persisted first-write-wins: an existing snapshot under the same
    /// uid stays authoritative.
    pub async fn create(
        registry: &WizardRegistry,
        steps: StepCollection,
        wizard_uid: Option<String>,
    ) -> Result<Self> {
        let current_uid = steps.first().ok_or(Error::EmptyWizard)?.uid.clone();
        let wizard_uid = wizard_uid.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let session = Self {
            wizard_uid,
            steps,
            current_uid,
            registry: registry.clone(),
        };
        registry
            .store_if_absent(&session.wizard_uid, &session.snapshot())
            .await?;
        Ok(session)
    }

    /// Rebuild a session from its stored snapshot.
    pub(crate) fn restore(
        registry: &WizardRegistry,
        wizard_uid: &str,
        snapshot: WizardSnapshot,
    ) -> Self {
        Self {
            wizard_uid: wizard_uid.to_string(),
            steps: snapshot.steps,
            current_uid: snapshot.current_uid,
            registry: registry.clone(),
        }
    }

    #[must_use]
    pub fn wizard_uid(&self) -> &str {
        &self.wizard_uid
    }

    #[must_use]
    pub fn current_uid(&self) -> &str {
        &self.current_uid
    }

    #[must_use]
    pub fn steps(&self) -> &StepCollection {
        &self.steps
    }

    /// The persisted form of this session.
    #[must_use]
    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            steps: self.steps.clone(),
            current_uid: self.current_uid.clone(),
        }
    }

    /// The step under the cursor.
    pub fn current_step(&self) -> Result<&Step> {
        self.steps
            .step_by_uid(&self.current_uid)
            .ok_or_else(|| Error::InvalidStepUid {
                uid: self.current_uid.clone(),
            })
    }

    /// Move to the next step, honoring the current step's override link.
    pub async fn advance(&mut self) -> Result<&Step> {
        let next_uid = self
            .steps
            .next_of(&self.current_uid)
            .map(|step| step.uid.clone())
            .ok_or_else(|| Error::NoNextStep {
                current_uid: self.current_uid.clone(),
            })?;
        self.move_to(next_uid).await
    }

    /// Move to the previous step, honoring the current step's override
    /// link.
    pub async fn rewind(&mut self) -> Result<&Step> {
        let prev_uid = self
            .steps
            .prev_of(&self.current_uid)
            .map(|step| step.uid.clone())
            .ok_or_else(|| Error::NoPreviousStep {
                current_uid: self.current_uid.clone(),
            })?;
        self.move_to(prev_uid).await
    }

    /// Jump to the step at a 0-based position.
    pub async fn jump_to_index(&mut self, index: usize) -> Result<&Step> {
        let uid = self
            .steps
            .step_at(index)
            .map(|step| step.uid.clone())
            .ok_or(Error::InvalidStepIndex {
                index,
                len: self.steps.len(),
            })?;
        self.move_to(uid).await
    }

    /// Jump to the step with that uid.
    pub async fn jump_to_uid(&mut self, uid: &str) -> Result<&Step> {
        if self.steps.step_by_uid(uid).is_none() {
            return Err(Error::InvalidStepUid {
                uid: uid.to_string(),
            });
        }
        self.move_to(uid.to_string()).await
    }

    /// Persist the cursor, then commit it in memory.
    async fn move_to(&mut self, uid: String) -> Result<&Step> {
        self.registry.store_cursor(&self.wizard_uid, &uid).await?;
        self.current_uid = uid;
        self.current_step()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use stepway_sessions::MemoryStateStore;

    use super::*;

    fn registry() -> WizardRegistry {
        WizardRegistry::new(Arc::new(MemoryStateStore::new()))
    }

    fn three_steps() -> StepCollection {
        StepCollection::from_steps([
            Step::content("intro", "Welcome"),
            Step::form("details", "Your details", "profile_form"),
            Step::content("done", "All set"),
        ])
        .unwrap()
    }

    async fn persisted_cursor(registry: &WizardRegistry, wizard_uid: &str) -> String {
        registry
            .snapshot(wizard_uid)
            .await
            .unwrap()
            .unwrap()
            .current_uid
    }

    #[tokio::test]
    async fn create_over_zero_steps_fails() {
        let err = WizardSession::create(&registry(), StepCollection::new(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EmptyWizard));
    }

    #[tokio::test]
    async fn create_starts_on_the_first_step_and_persists() {
        let registry = registry();
        let session = WizardSession::create(&registry, three_steps(), Some("w1".into()))
            .await
            .unwrap();

        assert_eq!(session.current_uid(), "intro");
        assert_eq!(session.current_step().unwrap().uid, "intro");
        assert_eq!(persisted_cursor(&registry, "w1").await, "intro");
    }

    #[tokio::test]
    async fn create_generates_a_wizard_uid_when_omitted() {
        let registry = registry();
        let a = WizardSession::create(&registry, three_steps(), None)
            .await
            .unwrap();
        let b = WizardSession::create(&registry, three_steps(), None)
            .await
            .unwrap();
        assert!(!a.wizard_uid().is_empty());
        assert_ne!(a.wizard_uid(), b.wizard_uid());
    }

    #[tokio::test]
    async fn create_never_overwrites_an_existing_snapshot() {
        let registry = registry();
        let mut session = WizardSession::create(&registry, three_steps(), Some("w1".into()))
            .await
            .unwrap();
        session.advance().await.unwrap();

        // A second construction under the same uid must not reset the
        // stored cursor.
        WizardSession::create(&registry, three_steps(), Some("w1".into()))
            .await
            .unwrap();
        assert_eq!(persisted_cursor(&registry, "w1").await, "details");
    }

    #[tokio::test]
    async fn advance_twice_then_rewind() {
        let registry = registry();
        let mut session = WizardSession::create(&registry, three_steps(), Some("w1".into()))
            .await
            .unwrap();

        assert_eq!(session.advance().await.unwrap().uid, "details");
        assert_eq!(session.advance().await.unwrap().uid, "done");
        assert_eq!(persisted_cursor(&registry, "w1").await, "done");

        assert_eq!(session.rewind().await.unwrap().uid, "details");
        assert_eq!(persisted_cursor(&registry, "w1").await, "details");
    }

    #[tokio::test]
    async fn advance_past_the_end_fails_and_leaves_state_alone() {
        let registry = registry();
        let mut session = WizardSession::create(&registry, three_steps(), Some("w1".into()))
            .await
            .unwrap();
        session.jump_to_index(2).await.unwrap();

        let err = session.advance().await.unwrap_err();
        assert!(matches!(err, Error::NoNextStep { current_uid } if current_uid == "done"));
        assert_eq!(session.current_uid(), "done");
        assert_eq!(persisted_cursor(&registry, "w1").await, "done");
    }

    #[tokio::test]
    async fn rewind_before_the_start_fails() {
        let registry = registry();
        let mut session = WizardSession::create(&registry, three_steps(), Some("w1".into()))
            .await
            .unwrap();
        let err = session.rewind().await.unwrap_err();
        assert!(matches!(err, Error::NoPreviousStep { .. }));
        assert_eq!(session.current_uid(), "intro");
    }

    #[tokio::test]
    async fn advance_follows_the_current_steps_own_override() {
        // intro links straight to done, skipping details.
        let steps = StepCollection::from_steps([
            Step::content("intro", "Welcome").with_next("done"),
            Step::form("details", "Your details", "profile_form"),
            Step::content("done", "All set"),
        ])
        .unwrap();
        let registry = registry();
        let mut session = WizardSession::create(&registry, steps, Some("w1".into()))
            .await
            .unwrap();

        assert_eq!(session.advance().await.unwrap().uid, "done");
        assert_eq!(persisted_cursor(&registry, "w1").await, "done");
    }

    #[tokio::test]
    async fn jumps_validate_their_targets() {
        let registry = registry();
        let mut session = WizardSession::create(&registry, three_steps(), Some("w1".into()))
            .await
            .unwrap();

        assert_eq!(session.jump_to_uid("done").await.unwrap().uid, "done");
        assert_eq!(session.jump_to_index(1).await.unwrap().uid, "details");

        let err = session.jump_to_index(9).await.unwrap_err();
        assert!(matches!(err, Error::InvalidStepIndex { index: 9, len: 3 }));
        let err = session.jump_to_uid("ghost").await.unwrap_err();
        assert!(matches!(err, Error::InvalidStepUid { uid } if uid == "ghost"));
        // Failed jumps leave the cursor where it was.
        assert_eq!(session.current_uid(), "details");
        assert_eq!(persisted_cursor(&registry, "w1").await, "details");
    }

    #[tokio::test]
    async fn racing_sessions_last_write_wins() {
        // Two request cycles load the same snapshot and navigate
        // independently. There is no locking; the later cursor write
        // simply overwrites the earlier one. Known limitation of the
        // load-mutate-store model, documented rather than fixed.
        let registry = registry();
        WizardSession::create(&registry, three_steps(), Some("w1".into()))
            .await
            .unwrap();

        let mut first = registry.load("w1").await.unwrap().unwrap();
        let mut second = registry.load("w1").await.unwrap().unwrap();

        first.advance().await.unwrap();
        first.advance().await.unwrap();
        assert_eq!(persisted_cursor(&registry, "w1").await, "done");

        // The second session still sits on the stale cursor; its advance
        // succeeds and silently discards the first session's transitions.
        second.advance().await.unwrap();
        assert_eq!(persisted_cursor(&registry, "w1").await, "details");
    }

    #[tokio::test]
    async fn load_round_trips_the_session() {
        let registry = registry();
        let mut session = WizardSession::create(&registry, three_steps(), Some("w1".into()))
            .await
            .unwrap();
        session.advance().await.unwrap();

        let loaded = registry.load("w1").await.unwrap().unwrap();
        assert_eq!(loaded.wizard_uid(), "w1");
        assert_eq!(loaded.current_uid(), "details");
        assert_eq!(loaded.steps(), session.steps());
    }
}
