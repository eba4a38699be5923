use thiserror::Error;

pub const NETWORK_FAILURE: &str = "Could not reach the server. Please try again.";
pub const PARSE_FAILURE: &str = "Unexpected response from the server.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("no active session")]
    MissingSession,
    #[error("unauthorized: {}", .detail.as_deref().unwrap_or("no detail"))]
    Unauthorized { detail: Option<String> },
    #[error("server error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Server { status: u16, detail: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("no file selected")]
    NoFileSelected,
}

impl ClientError {
    /// Missing token, or a token the server rejected.
    pub fn is_session_error(&self) -> bool {
        matches!(
            self,
            ClientError::MissingSession | ClientError::Unauthorized { .. }
        )
    }

    /// Text shown inline next to the control that triggered the request.
    ///
    /// Server-supplied detail wins; `fallback` covers request failures
    /// without one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Unauthorized { detail: Some(detail) }
            | ClientError::Server { detail: Some(detail), .. } => detail.clone(),
            ClientError::Unauthorized { detail: None }
            | ClientError::Server { detail: None, .. }
            | ClientError::MissingSession => fallback.to_string(),
            ClientError::Network(_) => NETWORK_FAILURE.to_string(),
            ClientError::Parse(_) => PARSE_FAILURE.to_string(),
            ClientError::NoFileSelected => "Please select an image first.".to_string(),
        }
    }
}
