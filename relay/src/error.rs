use http::StatusCode;
use thiserror::Error;

/// Everything the relay can answer besides a forwarded reply. The display
/// text is exactly the `error` field the caller sees.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("N8N_WEBHOOK_URL not configured")]
    NotConfigured,
    #[error("No message provided")]
    NoMessage,
    #[error("Webhook request failed: {0}")]
    Webhook(#[from] webhook_client::Error),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoMessage => StatusCode::BAD_REQUEST,
            Self::NotConfigured | Self::Webhook(_) | Self::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
