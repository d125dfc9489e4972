//! Persistent lookup of wizard sessions by wizard uid.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use stepway_sessions::StateStore;

use crate::{
    collection::StepCollection,
    error::{Context, Error, Result},
    session::WizardSession,
};

/// Namespace the registry writes under in the backing state store.
const STATE_NAMESPACE: &str = "wizard";

/// The persisted form of a session: the full ordered step list plus the
/// cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSnapshot {
    pub steps: StepCollection,
    pub current_uid: String,
}

/// Registry mapping wizard uid to the stored session snapshot.
///
/// Wraps the external session store. At most one snapshot per uid is
/// live; concurrent requests each load their own copy and the later
/// cursor write wins.
#[derive(Clone)]
pub struct WizardRegistry {
    store: Arc<dyn StateStore>,
}

impl std::fmt::Debug for WizardRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardRegistry").finish_non_exhaustive()
    }
}

impl WizardRegistry {
    #[must_use]
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Load the session stored under `wizard_uid`, or `None` when the
    /// registry has never seen that uid.
    pub async fn load(&self, wizard_uid: &str) -> Result<Option<WizardSession>> {
        Ok(self
            .snapshot(wizard_uid)
            .await?
            .map(|snapshot| WizardSession::restore(self, wizard_uid, snapshot)))
    }

    /// Read the stored snapshot without materializing a session.
    pub async fn snapshot(&self, wizard_uid: &str) -> Result<Option<WizardSnapshot>> {
        let Some(raw) = self.store.get(STATE_NAMESPACE, wizard_uid).await? else {
            return Ok(None);
        };
        let snapshot = serde_json::from_str(&raw)
            .with_context(|| format!("corrupt snapshot for wizard {wizard_uid}"))?;
        Ok(Some(snapshot))
    }

    /// Store `snapshot` only when no snapshot exists for the key.
    /// Returns whether the store happened; an existing snapshot is never
    /// overwritten by creation.
    pub async fn store_if_absent(
        &self,
        wizard_uid: &str,
        snapshot: &WizardSnapshot,
    ) -> Result<bool> {
        let raw = serde_json::to_string(snapshot)?;
        Ok(self
            .store
            .put_if_absent(STATE_NAMESPACE, wizard_uid, &raw)
            .await?)
    }

    /// Overwrite the cursor field of the stored snapshot.
    pub async fn store_cursor(&self, wizard_uid: &str, current_uid: &str) -> Result<()> {
        let Some(mut snapshot) = self.snapshot(wizard_uid).await? else {
            return Err(Error::UnknownWizard {
                wizard_uid: wizard_uid.to_string(),
            });
        };
        snapshot.current_uid = current_uid.to_string();
        let raw = serde_json::to_string(&snapshot)?;
        self.store.put(STATE_NAMESPACE, wizard_uid, &raw).await?;
        Ok(())
    }
}
