//! Immutable description of one wizard step.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which rendering collaborator handles a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Static informational content.
    Content,
    /// A step backed by a dynamic form handler.
    Form,
}

impl StepKind {
    /// Wire token used by the presentation contracts.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Form => "form",
        }
    }
}

/// One page of a wizard: identity, display metadata, the step kind, and
/// optional explicit links to its successor and predecessor.
///
/// Created at wizard-definition time and immutable afterwards; owned by
/// its [`StepCollection`](crate::StepCollection). The display fields are
/// opaque here and only interpreted by presentation collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub kind: StepKind,
    /// Form handler identifier. Present exactly when `kind` is `Form`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_ref: Option<String>,
    /// Explicit successor override; takes precedence over list order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_uid: Option<String>,
    /// Explicit predecessor override; takes precedence over list order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_uid: Option<String>,
}

impl Step {
    /// A static content step.
    #[must_use]
    pub fn content(uid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            description: String::new(),
            icon: String::new(),
            kind: StepKind::Content,
            form_ref: None,
            next_uid: None,
            prev_uid: None,
        }
    }

    /// A form-backed step. `form_ref` names the dynamic form handler.
    #[must_use]
    pub fn form(
        uid: impl Into<String>,
        title: impl Into<String>,
        form_ref: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            description: String::new(),
            icon: String::new(),
            kind: StepKind::Form,
            form_ref: Some(form_ref.into()),
            next_uid: None,
            prev_uid: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the explicit successor link.
    #[must_use]
    pub fn with_next(mut self, uid: impl Into<String>) -> Self {
        self.next_uid = Some(uid.into());
        self
    }

    /// Set the explicit predecessor link.
    #[must_use]
    pub fn with_prev(mut self, uid: impl Into<String>) -> Self {
        self.prev_uid = Some(uid.into());
        self
    }

    /// Whether this step dispatches to a form handler.
    #[must_use]
    pub fn is_form(&self) -> bool {
        self.kind == StepKind::Form
    }

    /// Check the kind/form_ref pairing. Constructors uphold it; decoded
    /// steps go through here.
    pub(crate) fn validate(&self) -> Result<()> {
        match (self.kind, &self.form_ref) {
            (StepKind::Form, None) => Err(Error::MissingFormRef {
                uid: self.uid.clone(),
            }),
            (StepKind::Content, Some(_)) => Err(Error::StrayFormRef {
                uid: self.uid.clone(),
            }),
            _ => Ok(()),
        }
    }
}
