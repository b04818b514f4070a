//! Error types for the client crate.

use lusid_models::ProblemDetails;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// HTTP status the service answers with when an entity already exists.
const CONFLICT: u16 = 409;

/// Errors that can occur while talking to the LUSID API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success response from the service
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        body: String,
        problem: Option<ProblemDetails>,
    },

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing or invalid access token
    #[error("Authentication error: {0}")]
    Auth(String),
}

impl ClientError {
    /// Create an API error from a status and raw response body.
    ///
    /// The body is parsed as problem details when possible.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let problem = serde_json::from_str::<ProblemDetails>(&body).ok();
        let message = problem
            .as_ref()
            .and_then(|p| p.title.clone().or_else(|| p.name.clone()))
            .unwrap_or_else(|| {
                if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.chars().take(200).collect()
                }
            });

        Self::Api {
            status,
            message,
            body,
            problem,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Structured problem body of an API error, if the service sent one.
    pub fn problem(&self) -> Option<&ProblemDetails> {
        match self {
            Self::Api { problem, .. } => problem.as_ref(),
            _ => None,
        }
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(CONFLICT)
    }

    /// Whether the service refused a create because the entity already exists.
    pub fn is_already_exists(&self) -> bool {
        self.is_conflict() || self.problem().is_some_and(ProblemDetails::is_already_exists)
    }
}

/// Treats "already exists" failures of a create call as success.
///
/// Returns `Ok(None)` for those, passes the created entity through, and
/// re-raises every other error. Nothing is retried.
pub fn ignore_already_exists<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_already_exists() => {
            log::info!("Entity already exists, continuing: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
