pub mod error;
pub mod query;
pub mod reply;
pub mod server;

use http::StatusCode;
use serde_json::{json, Value};
use webhook_client::Client;

pub use error::RelayError;

/// Environment variable naming the downstream webhook endpoint.
pub const WEBHOOK_URL_VAR: &str = "N8N_WEBHOOK_URL";

/// Webhook URL from the environment; an empty value counts as unset.
pub fn webhook_url_from_env() -> Option<String> {
    std::env::var(WEBHOOK_URL_VAR)
        .ok()
        .filter(|url| !url.is_empty())
}

/// The `/api/send` pipeline shared by both deployment variants: require a
/// configured webhook, require a non-empty `message`, forward it, interpret
/// the reply. The configuration check runs first, so an unconfigured relay
/// answers 500 no matter what the query carries.
pub async fn handle_send(
    client: Option<&Client>,
    raw_query: Option<&str>,
) -> Result<Value, RelayError> {
    let client = client.ok_or(RelayError::NotConfigured)?;
    let message = query::message_from_query(raw_query);
    let message = match message.as_deref() {
        Some(m) if !m.is_empty() => m,
        _ => return Err(RelayError::NoMessage),
    };
    let body = client.forward(message).await?;
    Ok(reply::reply_value(&body))
}

/// Maps a relay outcome onto the wire: the status code plus the JSON body
/// both variants send verbatim.
pub fn respond(outcome: Result<Value, RelayError>) -> (StatusCode, String) {
    match outcome {
        Ok(value) => (StatusCode::OK, json!({ "response": value }).to_string()),
        Err(err) => (
            err.status(),
            json!({ "error": err.to_string() }).to_string(),
        ),
    }
}
