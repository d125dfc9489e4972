use stepway_common::FromMessage;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A session cannot be created over zero steps.
    #[error("wizard has no steps")]
    EmptyWizard,

    #[error("no wizard stored under uid {wizard_uid}")]
    UnknownWizard { wizard_uid: String },

    #[error("no step after {current_uid}")]
    NoNextStep { current_uid: String },

    #[error("no step before {current_uid}")]
    NoPreviousStep { current_uid: String },

    #[error("step index {index} out of range for {len} steps")]
    InvalidStepIndex { index: usize, len: usize },

    #[error("no step with uid {uid}")]
    InvalidStepUid { uid: String },

    #[error("duplicate step uid {uid}")]
    DuplicateStepUid { uid: String },

    #[error("form step {uid} names no form handler")]
    MissingFormRef { uid: String },

    #[error("content step {uid} names a form handler")]
    StrayFormRef { uid: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] stepway_sessions::Error),

    #[error("{message}")]
    Message { message: String },
}

impl Error {
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

impl FromMessage for Error {
    fn from_message(message: String) -> Self {
        Self::Message { message }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

stepway_common::impl_context!();
