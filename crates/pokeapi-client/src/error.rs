//! Error types for the PokeAPI client

use std::fmt;

/// Errors from the PokeAPI client
#[derive(Debug)]
pub enum PokeApiError {
    /// The request URL could not be constructed
    Request(String),
    /// Transport failure that survived the retry budget
    Network(reqwest::Error),
    /// Upstream kept returning 5xx until the retry budget ran out
    Server(u16),
    /// Terminal non-200 response status, never retried
    Status(u16),
    /// Response body did not decode into the expected shape
    Json(serde_json::Error),
}

impl fmt::Display for PokeApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(msg) => write!(f, "error creating request: {msg}"),
            Self::Network(e) => write!(f, "error making request: {e}"),
            Self::Server(code) => write!(f, "server error: {code}"),
            Self::Status(code) => write!(f, "unexpected status code: {code}"),
            Self::Json(e) => write!(f, "error decoding response: {e}"),
        }
    }
}

impl std::error::Error for PokeApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PokeApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err)
    }
}

impl From<serde_json::Error> for PokeApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Result type for PokeAPI operations
pub type Result<T> = std::result::Result<T, PokeApiError>;
