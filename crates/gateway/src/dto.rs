//! Wire-shaped request and response types, camelCase to match the
//! browser-side wizard client.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parsed navigation action token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Previous,
}

impl WizardAction {
    /// Parse the wire token, rejecting anything but `next`/`previous`.
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            "next" => Ok(Self::Next),
            "previous" => Ok(Self::Previous),
            _ => Err(Error::InvalidAction {
                action: token.to_string(),
            }),
        }
    }
}

/// Ask the wizard to move one step in either direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardActionRequest {
    pub wizard_uid: String,
    /// The step the client believes it is on. When it differs from the
    /// stored cursor, the cursor is re-seated there before the action
    /// applies.
    #[serde(default)]
    pub current_step_uid: String,
    /// Action token: `"next"` or `"previous"`.
    pub action: String,
}

/// Where the wizard landed, and what the presentation layer needs to
/// render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardActionResponse {
    pub next_step_uid: String,
    /// `"content"` or `"form"`.
    pub step_kind: String,
    /// Form handler for form steps; empty for content steps.
    #[serde(default)]
    pub form_ref: String,
}

/// Fetch the displayable content of one step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepContentRequest {
    pub wizard_uid: String,
    /// Empty string selects the wizard's first step.
    #[serde(default)]
    pub step_uid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepContentResponse {
    pub step_uid: String,
    /// `"content"` or `"form"`.
    pub kind: String,
    pub content_html: String,
    pub title: String,
}

/// Response shape of the external dynamic-form collaborator.
///
/// Consumed to decide between advancing the session and re-rendering
/// the current step; never produced here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmitOutcome {
    pub submitted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step_uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// What the caller should do after a form submission was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStepResult {
    /// The session advanced; show this step next.
    Advanced {
        step_uid: String,
        step_kind: String,
        form_ref: String,
    },
    /// Validation failed; re-render the current step with this markup.
    Rerender {
        html: String,
        error: Option<String>,
    },
}

/// Modal chrome for one wizard: title and button labels, consumed by the
/// presentation layer when wiring the dialog. The defaults match the
/// stock modal; override the fields for custom flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardChrome {
    pub wizard_uid: String,
    pub title: String,
    pub next_label: String,
    pub previous_label: String,
    pub finish_label: String,
    pub cancel_label: String,
}

impl WizardChrome {
    #[must_use]
    pub fn new(wizard_uid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            wizard_uid: wizard_uid.into(),
            title: title.into(),
            next_label: "Next".to_string(),
            previous_label: "Previous".to_string(),
            finish_label: "Save".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_tokens_parse() {
        assert_eq!(WizardAction::parse("next").unwrap(), WizardAction::Next);
        assert_eq!(
            WizardAction::parse("previous").unwrap(),
            WizardAction::Previous
        );
        let err = WizardAction::parse("finish").unwrap_err();
        assert!(matches!(err, Error::InvalidAction { action } if action == "finish"));
    }

    #[test]
    fn action_request_uses_camel_case_on_the_wire() {
        let request: WizardActionRequest = serde_json::from_str(
            r#"{"wizardUid":"w1","currentStepUid":"intro","action":"next"}"#,
        )
        .unwrap();
        assert_eq!(request.wizard_uid, "w1");
        assert_eq!(request.current_step_uid, "intro");

        // currentStepUid may be omitted entirely.
        let request: WizardActionRequest =
            serde_json::from_str(r#"{"wizardUid":"w1","action":"next"}"#).unwrap();
        assert_eq!(request.current_step_uid, "");
    }

    #[test]
    fn form_outcome_accepts_sparse_payloads() {
        let outcome: FormSubmitOutcome = serde_json::from_str(r#"{"submitted":true}"#).unwrap();
        assert!(outcome.submitted);
        assert!(outcome.html.is_none());
        assert!(outcome.next_step_uid.is_none());

        let outcome: FormSubmitOutcome = serde_json::from_str(
            r#"{"submitted":false,"html":"<form>…</form>","error":"name required"}"#,
        )
        .unwrap();
        assert!(!outcome.submitted);
        assert_eq!(outcome.error.as_deref(), Some("name required"));
    }

    #[test]
    fn chrome_defaults_to_stock_labels() {
        let chrome = WizardChrome::new("w1", "Course setup");
        assert_eq!(chrome.next_label, "Next");
        assert_eq!(chrome.previous_label, "Previous");
        assert_eq!(chrome.finish_label, "Save");
        assert_eq!(chrome.cancel_label, "Cancel");

        let json = serde_json::to_string(&chrome).unwrap();
        assert!(json.contains("\"wizardUid\":\"w1\""));
        assert!(json.contains("\"nextLabel\":\"Next\""));
    }
}
