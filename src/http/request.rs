use crate::auth::{BasicAuth, non_blank};
use crate::domain::TestRequest;
use crate::error::RequestError;
use crate::json::JsonCodec;

use super::method::HttpMethod;

/// Encoding inferred for an outbound body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    None,
    Json,
    Text,
}

impl ContentType {
    pub fn mime(&self) -> Option<&'static str> {
        match self {
            ContentType::None => None,
            ContentType::Json => Some("application/json"),
            ContentType::Text => Some("text/plain; charset=utf-8"),
        }
    }
}

/// A fully resolved, transport-ready description of one HTTP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRequest {
    pub method: HttpMethod,
    pub url: String,
    pub auth: Option<BasicAuth>,
    pub content_type: ContentType,
    pub body: Option<String>,
    pub accept: Option<String>,
}

impl BuiltRequest {
    pub fn build(request: &TestRequest, json: JsonCodec) -> Result<Self, RequestError> {
        let endpoint = request.api_endpoint.trim();
        if endpoint.is_empty() {
            return Err(RequestError::InvalidRequest);
        }

        let method = HttpMethod::resolve(request.method.as_deref());
        let (content_type, body) = resolve_body(request.body.as_deref(), json);

        Ok(Self {
            method,
            url: resolve_url(endpoint, method, request.resource_id.as_deref()),
            auth: BasicAuth::resolve(request.username.as_deref(), request.password.as_deref()),
            content_type,
            body,
            accept: resolve_accept(request.accept_header.as_deref()),
        })
    }
}

/// Blank bodies are dropped. Anything else is sent verbatim, labelled JSON
/// when it parses and plain text when it does not.
pub fn resolve_body(body: Option<&str>, json: JsonCodec) -> (ContentType, Option<String>) {
    match non_blank(body) {
        None => (ContentType::None, None),
        Some(body) if json.is_json(body) => (ContentType::Json, Some(body.to_string())),
        Some(body) => (ContentType::Text, Some(body.to_string())),
    }
}

pub fn resolve_accept(accept: Option<&str>) -> Option<String> {
    non_blank(accept).map(|value| value.trim().to_string())
}

/// DELETE targets `<endpoint>/<resourceId>` when a resource id is given.
pub fn resolve_url(endpoint: &str, method: HttpMethod, resource_id: Option<&str>) -> String {
    let resource_id = non_blank(resource_id).map(str::trim);
    match (method, resource_id) {
        (HttpMethod::Delete, Some(id)) => {
            let mut url = endpoint.to_string();
            if !url.ends_with('/') {
                url.push('/');
            }
            url.push_str(id);
            url
        }
        _ => endpoint.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(request: &TestRequest) -> Result<BuiltRequest, RequestError> {
        BuiltRequest::build(request, JsonCodec)
    }

    #[test]
    fn test_blank_endpoint_is_invalid() {
        assert_eq!(build(&TestRequest::new("")), Err(RequestError::InvalidRequest));
        assert_eq!(build(&TestRequest::new("   ")), Err(RequestError::InvalidRequest));
    }

    #[test]
    fn test_bare_request_is_get_without_auth_or_body() {
        let built = build(&TestRequest::new("http://x/y")).unwrap();
        assert_eq!(built.method, HttpMethod::Get);
        assert_eq!(built.url, "http://x/y");
        assert!(built.auth.is_none());
        assert_eq!(built.content_type, ContentType::None);
        assert!(built.body.is_none());
        assert!(built.accept.is_none());
    }

    #[test]
    fn test_invalid_json_body_is_sent_as_text() {
        let request = TestRequest::new("http://x/y")
            .with_method("post")
            .with_credentials("u", "p")
            .with_body("{invalid json");
        let built = build(&request).unwrap();
        assert_eq!(built.method, HttpMethod::Post);
        assert_eq!(
            built.auth,
            Some(BasicAuth {
                username: "u".into(),
                password: "p".into()
            })
        );
        assert_eq!(built.content_type, ContentType::Text);
        assert_eq!(built.body.as_deref(), Some("{invalid json"));
    }

    #[test]
    fn test_json_body_is_kept_verbatim() {
        let body = "{ \"name\" :  \"x\" }";
        let built = build(&TestRequest::new("http://x").with_method("PUT").with_body(body)).unwrap();
        assert_eq!(built.content_type, ContentType::Json);
        assert_eq!(built.body.as_deref(), Some(body));
    }

    #[test]
    fn test_blank_body_is_dropped() {
        let built = build(&TestRequest::new("http://x").with_method("post").with_body("  \n ")).unwrap();
        assert_eq!(built.content_type, ContentType::None);
        assert!(built.body.is_none());
    }

    #[test]
    fn test_unknown_method_falls_back_to_get() {
        let built = build(&TestRequest::new("http://x").with_method("TRACE")).unwrap();
        assert_eq!(built.method, HttpMethod::Get);
    }

    #[test]
    fn test_single_credential_is_ignored() {
        let mut request = TestRequest::new("http://x");
        request.username = Some("u".into());
        assert!(build(&request).unwrap().auth.is_none());

        request.username = None;
        request.password = Some("p".into());
        assert!(build(&request).unwrap().auth.is_none());
    }

    #[test]
    fn test_delete_appends_resource_id() {
        let mut request = TestRequest::new("http://x/items").with_method("delete");
        request.resource_id = Some(" 42 ".into());
        assert_eq!(build(&request).unwrap().url, "http://x/items/42");

        request.api_endpoint = "http://x/items/".into();
        assert_eq!(build(&request).unwrap().url, "http://x/items/42");
    }

    #[test]
    fn test_resource_id_ignored_for_other_methods() {
        let mut request = TestRequest::new("http://x/items").with_method("get");
        request.resource_id = Some("42".into());
        assert_eq!(build(&request).unwrap().url, "http://x/items");
    }

    #[test]
    fn test_accept_header_trimmed() {
        let mut request = TestRequest::new("http://x");
        request.accept_header = Some(" application/xml ".into());
        assert_eq!(build(&request).unwrap().accept.as_deref(), Some("application/xml"));

        request.accept_header = Some(" ".into());
        assert!(build(&request).unwrap().accept.is_none());
    }

    #[test]
    fn test_content_type_mime() {
        assert_eq!(ContentType::None.mime(), None);
        assert_eq!(ContentType::Json.mime(), Some("application/json"));
        assert_eq!(ContentType::Text.mime(), Some("text/plain; charset=utf-8"));
    }
}
