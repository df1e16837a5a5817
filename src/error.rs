//! Error type shared by the playlist builder, settings loader and URL helpers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlockError {
    /// Reddit answered with a non-200 status, an `error` body, or no usable JSON.
    #[error("No Reddit response")]
    NoRedditResponse,
    /// The listing had no YouTube links left after sanitising.
    #[error("No links found")]
    NoLinks,
    #[error("an embed URL needs at least one video id")]
    EmptyPlaylist,
    #[error("{keys} navigation keys but {values} values")]
    MismatchedParams { keys: usize, values: usize },
    #[error("invalid settings: {0}")]
    Settings(String),
    #[error("settings are not valid JSON: {0}")]
    SettingsJson(#[from] serde_json::Error),
    #[error("browser call failed: {0}")]
    Browser(String),
}
