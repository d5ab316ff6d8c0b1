//! HTTP routes for reading the chain and appending blocks.

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use hashchain::{AppendOutcome, ChainStore, Node, NodeError};
use serde::{Deserialize, Serialize};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info, warn};

/// Body of `POST /`.
#[derive(Debug, Deserialize)]
pub struct Message {
    #[serde(rename = "Data")]
    pub data: i64,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors returned to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("malformed request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Node(#[from] NodeError),

    #[error("encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Node(_) | ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Build the router over `node`.
pub fn router<S>(node: Node<S>, timeout: Duration) -> Router
where
    S: ChainStore + 'static,
{
    Router::new()
        .route("/", get(get_chain::<S>).post(append_block::<S>))
        .route("/health", get(health))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(node)
}

/// GET / - the whole chain, pretty-printed.
pub async fn get_chain<S: ChainStore>(State(node): State<Node<S>>) -> Result<Response, ApiError> {
    let chain = node.get_chain();
    let body = serde_json::to_string_pretty(&*chain)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// POST / - append a block carrying `Data`.
///
/// The body is decoded as JSON whatever its `Content-Type`.
/// 201 with the block when it became the tip, 409 with the block when a
/// concurrent append won the race.
pub async fn append_block<S: ChainStore>(
    State(node): State<Node<S>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let message: Message =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    match node.append(message.data)? {
        AppendOutcome::Accepted(block) => {
            info!(index = block.index, hash = %block.hash, payload = block.payload, "block accepted");
            Ok((StatusCode::CREATED, Json(block)).into_response())
        }
        AppendOutcome::Superseded { block, reason } => {
            warn!(index = block.index, ?reason, "block superseded");
            Ok((StatusCode::CONFLICT, Json(block)).into_response())
        }
    }
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}
