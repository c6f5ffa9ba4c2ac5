use relay::{handle_send, respond, webhook_url_from_env, RelayError};
use serde_json::Value;
use vercel_runtime::{run, Body, Error, Request, Response};
use webhook_client::Client;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    run(handler).await
}

pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let outcome = send_outcome(webhook_url_from_env(), req.uri().query()).await;
    let (status, body) = respond(outcome);

    tracing::info!(status = status.as_u16(), "GET /api/send");
    to_response(status.as_u16(), body)
}

/// Everything between the raw request and the wire outcome, factored out so
/// tests inject configuration instead of mutating the environment. The
/// environment is re-read on every invocation.
async fn send_outcome(
    webhook_url: Option<String>,
    raw_query: Option<&str>,
) -> Result<Value, RelayError> {
    let client = match webhook_url {
        Some(url) => Some(Client::new(&url).map_err(|e| RelayError::Unexpected(e.to_string()))?),
        None => None,
    };
    handle_send(client.as_ref(), raw_query).await
}

fn to_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body))?)
}
