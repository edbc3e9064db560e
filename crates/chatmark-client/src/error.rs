use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("a message is already being sent")]
    Busy,

    #[error("message is empty")]
    EmptyMessage,

    #[error("HTTP error! status: {status}")]
    Http { status: u16, body: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid server URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

impl ClientError {
    /// Short text suitable for showing in place of a failed reply.
    pub fn status_message(&self) -> &'static str {
        match self {
            ClientError::Busy => "Please wait for the current reply to finish.",
            ClientError::EmptyMessage => "Type a message to send.",
            ClientError::Http { status: 404, .. } => "Conversation not found.",
            ClientError::InvalidUrl { .. } => "The chat server address is invalid.",
            _ => "Sorry, I encountered an error. Please try again.",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
