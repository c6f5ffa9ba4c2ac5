use std::path::PathBuf;

use axum::extract::{RawQuery, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tracing::instrument;

use crate::{handle_send, respond};

/// State behind the local server: the webhook client (absent while
/// N8N_WEBHOOK_URL is unconfigured) and the chat page location.
#[derive(Clone)]
pub struct AppState {
    pub client: Option<webhook_client::Client>,
    pub index_path: PathBuf,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/send", get(send))
        .route("/", get(index_page))
        .route("/index.html", get(index_page))
        .fallback(not_found)
        .with_state(state)
}

#[instrument(skip_all, fields(status))]
async fn send(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let span = tracing::Span::current();

    let outcome = handle_send(state.client.as_ref(), query.as_deref()).await;
    let (status, body) = respond(outcome);

    span.record("status", status.as_u16());
    tracing::info!("GET /api/send");

    (
        status,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        body,
    )
        .into_response()
}

/// Plain passthrough of the chat page, re-read on every request so edits
/// show up without a restart.
async fn index_page(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(&state.index_path).await {
        Ok(page) => Html(page).into_response(),
        Err(_) => {
            tracing::warn!("index page missing at {}", state.index_path.display());
            (StatusCode::NOT_FOUND, "File Not Found").into_response()
        }
    }
}

async fn not_found(uri: Uri) -> (StatusCode, &'static str) {
    tracing::info!("no route for {}", uri.path());
    (StatusCode::NOT_FOUND, "Not Found")
}
