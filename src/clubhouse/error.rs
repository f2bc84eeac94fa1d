/// Error type for Clubhouse API operations.
#[derive(Debug, thiserror::Error)]
pub enum ClubhouseError {
    /// The request never produced a response (connect, TLS, timeout, body read).
    ///
    /// The request URL is stripped: its query string carries the API token.
    #[error("HTTP request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Clubhouse API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body did not match the expected record shape.
    #[error("Invalid response format: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl From<reqwest::Error> for ClubhouseError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.without_url())
    }
}

impl ClubhouseError {
    /// HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Parse { .. } => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Result type for Clubhouse API operations.
pub type ClubhouseResult<T> = Result<T, ClubhouseError>;
