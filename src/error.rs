use thiserror::Error;

/// Custom error types for the sunriseset service
#[derive(Error, Debug)]
pub enum SunTimesError {
    /// Error when the API answers with a non-success HTTP status or a
    /// non-OK envelope status
    #[error("API request failed: {0}")]
    ApiRequestFailed(String),

    /// Error when parsing the API response envelope
    #[error("Failed to parse API response: {0}")]
    ResponseParseError(String),

    /// Wrapper for reqwest errors
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
