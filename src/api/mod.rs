//! HTTP boundary consumed by the web front end.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc};
use tracing::{error, info, warn};

use crate::scoring::EligibilityChecker;

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub input: Option<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(checker: Arc<EligibilityChecker>) -> Router {
    Router::new()
        .route("/api/check-eligibility", post(check_eligibility))
        .route("/health", get(health))
        .with_state(checker)
}

pub async fn serve(checker: Arc<EligibilityChecker>, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, router(checker)).await
}

async fn health() -> &'static str {
    "ok"
}

/// POST /api/check-eligibility
async fn check_eligibility(
    State(checker): State<Arc<EligibilityChecker>>,
    Json(request): Json<CheckRequest>,
) -> Response {
    let input = request.input.unwrap_or_default();

    match checker.check(&input).await {
        Ok(report) => Json(report).into_response(),
        Err(e) if e.is_user_error() => {
            warn!("Rejected input {:?}: {}", input, e);
            error_response(StatusCode::BAD_REQUEST, e.user_message())
        }
        Err(e) => {
            error!("Error in check-eligibility for {:?}: {}", input, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.user_message())
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}
