use tracing::{debug, info, warn};

use crate::domain::{TestRequest, TestResult};
use crate::error::{ExecutionError, RequestError};
use crate::http::client::Transport;
use crate::http::request::BuiltRequest;
use crate::json::JsonCodec;

/// Runs a `TestRequest` against a live server through a [`Transport`].
#[derive(Debug, Clone)]
pub struct TestExecutor<T> {
    transport: T,
    json: JsonCodec,
}

impl<T: Transport> TestExecutor<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            json: JsonCodec,
        }
    }

    /// Build, send and format in one go. Every failure is folded into the
    /// returned result: 400 for a missing endpoint, 500 for anything after.
    pub async fn run(&self, request: &TestRequest) -> TestResult {
        let built = match BuiltRequest::build(request, self.json) {
            Ok(built) => built,
            Err(err @ RequestError::InvalidRequest) => {
                warn!("rejected test request: {err}");
                return TestResult::new(400, err.to_string());
            }
        };

        match self.execute(&built).await {
            Ok(result) => {
                info!(
                    method = %built.method,
                    url = %built.url,
                    status = result.status_code,
                    "test request completed"
                );
                result
            }
            Err(err) => {
                warn!(method = %built.method, url = %built.url, "test execution failed: {err}");
                TestResult::new(500, format!("Test execution failed: {err}"))
            }
        }
    }

    pub async fn execute(&self, built: &BuiltRequest) -> Result<TestResult, ExecutionError> {
        debug!(
            method = %built.method,
            url = %built.url,
            authenticated = built.auth.is_some(),
            content_type = ?built.content_type,
            "executing test request"
        );

        let response = self.transport.send(built).await?;
        let body = self.json.format_or_raw(&response.body)?;

        Ok(TestResult::new(response.status, body))
    }
}
