//! Error plumbing shared across all stepway crates.

pub mod error;

pub use error::FromMessage;
