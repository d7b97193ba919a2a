use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::codegen::Dialect;
use crate::domain::{TestRequest, TestResult};

use super::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateParams {
    #[serde(default)]
    pub dialect: Dialect,
}

/// Execute the request. The envelope is always 200; the outcome of the test,
/// including locally produced 400/500 results, is in the body.
pub async fn run_rest_assured(
    State(state): State<AppState>,
    Json(payload): Json<TestRequest>,
) -> Json<TestResult> {
    Json(state.executor.run(&payload).await)
}

pub async fn generate_code(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
    Json(payload): Json<TestRequest>,
) -> Response {
    match state.emitter.generate_or_message(&payload, params.dialect) {
        Ok(source) => plain_text(StatusCode::OK, source),
        Err(message) => plain_text(StatusCode::INTERNAL_SERVER_ERROR, message),
    }
}

pub async fn health() -> &'static str {
    "ok"
}

fn plain_text(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}
