use serde::{Deserialize, Deserializer, Serialize};

use crate::codegen::Dialect;

// ─── Inbound ──────────────────────────────────────────────────────────────────

/// Declarative description of a single API call, as posted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub api_endpoint: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub accept_header: Option<String>,
    #[serde(default)]
    pub resource_id: Option<String>,
}

impl TestRequest {
    pub fn new(api_endpoint: impl Into<String>) -> Self {
        Self {
            api_endpoint: api_endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// An explicit `null` endpoint decodes like a missing one, so it reaches the
/// 400 path instead of failing deserialization.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ─── Outbound ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub status_code: u16,
    pub response_body: String,
}

impl TestResult {
    pub fn new(status_code: u16, response_body: impl Into<String>) -> Self {
        Self {
            status_code,
            response_body: response_body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    pub dialect: Dialect,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_decodes_camel_case() {
        let raw = r#"{
            "apiEndpoint": "http://x/y",
            "method": "post",
            "username": "u",
            "password": "p",
            "body": "{}",
            "acceptHeader": "application/json",
            "resourceId": "42"
        }"#;
        let request: TestRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.api_endpoint, "http://x/y");
        assert_eq!(request.method.as_deref(), Some("post"));
        assert_eq!(request.accept_header.as_deref(), Some("application/json"));
        assert_eq!(request.resource_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_request_missing_fields_default() {
        let request: TestRequest = serde_json::from_str("{}").unwrap();
        assert!(request.api_endpoint.is_empty());
        assert!(request.method.is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_request_null_fields_are_none() {
        let raw = r#"{"apiEndpoint":"http://x","method":null,"username":null,"password":null,"body":null}"#;
        let request: TestRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request, TestRequest::new("http://x"));
    }

    #[test]
    fn test_request_null_endpoint_is_empty() {
        let request: TestRequest = serde_json::from_str(r#"{"apiEndpoint":null}"#).unwrap();
        assert!(request.api_endpoint.is_empty());
    }

    #[test]
    fn test_result_encodes_camel_case() {
        let json = serde_json::to_value(TestResult::new(200, "ok")).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["responseBody"], "ok");
    }
}
