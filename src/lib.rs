//! Run a single HTTP API call described by a [`TestRequest`], or emit the
//! REST Assured / Karate test that reproduces it.

pub mod auth;
pub mod cli;
pub mod codegen;
pub mod commands;
pub mod domain;
pub mod engine;
pub mod error;
pub mod http;
pub mod json;

pub use codegen::{CodeEmitter, Dialect};
pub use domain::{GeneratedCode, TestRequest, TestResult};
pub use engine::TestExecutor;
pub use http::client::{ReqwestTransport, Transport, TransportConfig};
