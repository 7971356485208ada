//! Error types for the backdrop
//!
//! The backdrop is decorative, so almost every failure degrades to
//! "draw nothing" instead of surfacing to the user. These variants exist
//! so callers can log what happened before going inert.

use thiserror::Error;

/// Errors that can occur while mounting the backdrop or handling settings
#[derive(Error, Debug)]
pub enum BackdropError {
    #[error("No drawable surface is available to mount the backdrop on")]
    MissingSurface,

    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    Settings(String),
}

impl From<serde_json::Error> for BackdropError {
    fn from(err: serde_json::Error) -> Self {
        BackdropError::Settings(err.to_string())
    }
}
