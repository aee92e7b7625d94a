use thiserror::Error;

/// Message shown in place of the results whenever a search fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load repositories. Please try again.";

/// A failed repository search.
///
/// The variants only matter for the console log; the view renders every
/// failure with the same message.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("GitHub API error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Decode(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("failed to write preference: {0}")]
    Write(String),
}
