use stepway_common::FromMessage;

use crate::hooks::TransitionSignal;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client sent an action token other than `next`/`previous`.
    #[error("unrecognized wizard action {action:?}")]
    InvalidAction { action: String },

    /// A transition hook cancelled the step change.
    #[error("{signal} transition vetoed by {hook}: {reason}")]
    TransitionVetoed {
        signal: TransitionSignal,
        hook: String,
        reason: String,
    },

    #[error(transparent)]
    Wizard(#[from] stepway_wizard::Error),

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
