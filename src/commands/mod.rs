pub mod http_commands;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::codegen::CodeEmitter;
use crate::engine::TestExecutor;
use crate::error::TransportError;
use crate::http::client::{ReqwestTransport, TransportConfig};

#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<TestExecutor<ReqwestTransport>>,
    pub emitter: CodeEmitter,
}

impl AppState {
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        Ok(Self {
            executor: Arc::new(TestExecutor::new(ReqwestTransport::new(config)?)),
            emitter: CodeEmitter::default(),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/run-rest-assured", post(http_commands::run_rest_assured))
        .route("/generate-code", post(http_commands::generate_code))
        .route("/health", get(http_commands::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
