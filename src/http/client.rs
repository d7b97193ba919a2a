use std::future::Future;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::error::TransportError;

use super::request::BuiltRequest;
use super::response::RawResponse;

/// The network collaborator: performs one call and returns status and body.
pub trait Transport {
    fn send(
        &self,
        request: &BuiltRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransportConfig {
    /// Certificate validation is off unless this is set.
    pub verify_tls: bool,
}

/// [`Transport`] backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::limited(10));

        if !config.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|err| TransportError::ClientBuild(err.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: &BuiltRequest) -> Result<RawResponse, TransportError> {
        let url = reqwest::Url::parse(&request.url).map_err(|err| TransportError::InvalidUrl {
            url: request.url.clone(),
            reason: err.to_string(),
        })?;

        let mut req_builder = self.client.request(request.method.into(), url);
        req_builder = apply_auth(req_builder, request);
        req_builder = apply_accept(req_builder, request);
        req_builder = apply_body(req_builder, request);

        debug!(method = %request.method, url = %request.url, "dispatching request");

        let response = req_builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        Ok(RawResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

fn apply_auth(req_builder: reqwest::RequestBuilder, request: &BuiltRequest) -> reqwest::RequestBuilder {
    match &request.auth {
        Some(auth) => req_builder.basic_auth(&auth.username, Some(&auth.password)),
        None => req_builder,
    }
}

fn apply_accept(req_builder: reqwest::RequestBuilder, request: &BuiltRequest) -> reqwest::RequestBuilder {
    match &request.accept {
        Some(accept) => req_builder.header(ACCEPT, accept),
        None => req_builder,
    }
}

fn apply_body(mut req_builder: reqwest::RequestBuilder, request: &BuiltRequest) -> reqwest::RequestBuilder {
    if let Some(mime) = request.content_type.mime() {
        req_builder = req_builder.header(CONTENT_TYPE, mime);
    }
    if let Some(body) = &request.body {
        req_builder = req_builder.body(body.clone());
    }
    req_builder
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_connect() {
        TransportError::ConnectionFailed(err.to_string())
    } else {
        TransportError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::method::HttpMethod;
    use crate::http::request::ContentType;

    #[test]
    fn builds_with_relaxed_and_strict_tls() {
        assert!(ReqwestTransport::new(TransportConfig::default()).is_ok());
        assert!(ReqwestTransport::new(TransportConfig { verify_tls: true }).is_ok());
    }

    #[tokio::test]
    async fn rejects_unparseable_url() {
        let transport = ReqwestTransport::new(TransportConfig::default()).unwrap();
        let request = BuiltRequest {
            method: HttpMethod::Get,
            url: "not a url".into(),
            auth: None,
            content_type: ContentType::None,
            body: None,
            accept: None,
        };
        let err = transport.send(&request).await.unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl { .. }));
    }
}
