//! Ordered list of wizard steps with override-aware traversal.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    step::Step,
};

/// The ordered steps of one wizard.
///
/// Insertion order defines positional adjacency. A step's own
/// `next_uid`/`prev_uid` link overrides list order when it resolves to a
/// known step. Append-only while the wizard is being defined, read-only
/// once a session owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCollection {
    steps: Vec<Step>,
}

impl StepCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from steps in order, validating each.
    pub fn from_steps(steps: impl IntoIterator<Item = Step>) -> Result<Self> {
        let mut collection = Self::new();
        for step in steps {
            collection.push(step)?;
        }
        Ok(collection)
    }

    /// Append a step. Fails on a duplicate uid or a kind/form_ref
    /// mismatch.
    pub fn push(&mut self, step: Step) -> Result<()> {
        step.validate()?;
        if self.step_by_uid(&step.uid).is_some() {
            return Err(Error::DuplicateStepUid { uid: step.uid });
        }
        self.steps.push(step);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    /// The step at a 0-based position.
    #[must_use]
    pub fn step_at(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Linear scan by uid. Step counts are human-authored and small.
    #[must_use]
    pub fn step_by_uid(&self, uid: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.uid == uid)
    }

    /// The position of the step with that uid.
    #[must_use]
    pub fn index_of(&self, uid: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.uid == uid)
    }

    /// Resolve the step after `current_uid`.
    ///
    /// The current step's own `next_uid` wins when it resolves to a
    /// known step; otherwise the positional successor. A dangling link
    /// falls back to list order.
    #[must_use]
    pub fn next_of(&self, current_uid: &str) -> Option<&Step> {
        let current = self.step_by_uid(current_uid)?;
        if let Some(linked) = current
            .next_uid
            .as_deref()
            .and_then(|uid| self.step_by_uid(uid))
        {
            return Some(linked);
        }
        let index = self.index_of(current_uid)?;
        self.steps.get(index + 1)
    }

    /// Resolve the step before `current_uid`. Mirrors [`next_of`] using
    /// the current step's own `prev_uid`.
    ///
    /// [`next_of`]: StepCollection::next_of
    #[must_use]
    pub fn prev_of(&self, current_uid: &str) -> Option<&Step> {
        let current = self.step_by_uid(current_uid)?;
        if let Some(linked) = current
            .prev_uid
            .as_deref()
            .and_then(|uid| self.step_by_uid(uid))
        {
            return Some(linked);
        }
        let index = self.index_of(current_uid)?;
        index.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    /// Serialize the full ordered step list.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild a collection from [`to_json`] output, re-validating step
    /// invariants.
    ///
    /// [`to_json`]: StepCollection::to_json
    pub fn from_json(json: &str) -> Result<Self> {
        let decoded: Self = serde_json::from_str(json)?;
        Self::from_steps(decoded.steps)
    }
}
