use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("state lock failed: {message}")]
    Lock { message: String },
}

impl Error {
    #[must_use]
    pub fn lock_failed(message: impl Into<String>) -> Self {
        Self::Lock {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
