//! HTTP transports.
//!
//! [`Transport`] is the seam between the client and the network. It exposes
//! the plain verbs plus the credentialed variants used by endpoints that need
//! a session or an auth token. [`HttpTransport`] is the reqwest-backed
//! implementation; tests and embedders can swap in their own.

use std::fmt;

use async_trait::async_trait;
use reqwest::header::COOKIE;
use serde_json::Value;
use url::Url;

use crate::error::{ClientError, Result};

/// A response as the transport saw it: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over the HTTP layer.
///
/// Implementations return non-2xx responses as data; the client decides what
/// counts as a failure.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Plain GET.
    async fn get(&self, url: Url) -> Result<RawResponse>;

    /// Plain POST with an optional JSON body.
    async fn post(&self, url: Url, body: Option<&Value>) -> Result<RawResponse>;

    /// Plain PUT with an optional JSON body.
    async fn put(&self, url: Url, body: Option<&Value>) -> Result<RawResponse>;

    /// Plain DELETE.
    async fn delete(&self, url: Url) -> Result<RawResponse>;

    /// GET carrying session credentials.
    async fn get_with_creds(&self, url: Url) -> Result<RawResponse>;

    /// GET carrying the auth token.
    async fn secured_get(&self, url: Url) -> Result<RawResponse>;

    /// POST carrying the auth token.
    async fn secured_post(&self, url: Url, body: Option<&Value>) -> Result<RawResponse>;
}

/// Credentials attached by the credentialed transport methods.
#[derive(Clone, Default)]
pub struct Credentials {
    /// Sent as `Authorization: Bearer <token>`.
    pub bearer_token: Option<String>,
    /// Sent verbatim as the `Cookie` header.
    pub session_cookie: Option<String>,
}

impl Credentials {
    /// Credentials holding only a bearer token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            bearer_token: Some(token.into()),
            session_cookie: None,
        }
    }

    /// Add a session cookie.
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bearer_token.is_none() && self.session_cookie.is_none()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .field(
                "session_cookie",
                &self.session_cookie.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// reqwest-backed transport.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
    credentials: Option<Credentials>,
}

impl HttpTransport {
    /// Transport without credentials. Credentialed calls fail with
    /// [`ClientError::MissingCredentials`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport that authenticates credentialed calls.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials: (!credentials.is_empty()).then_some(credentials),
        }
    }

    /// Use a preconfigured reqwest client (proxies, TLS roots, timeouts).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn bearer_token(&self, surface: &'static str) -> Result<&str> {
        self.credentials
            .as_ref()
            .and_then(|c| c.bearer_token.as_deref())
            .ok_or(ClientError::MissingCredentials(surface))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<RawResponse> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

fn with_body(request: reqwest::RequestBuilder, body: Option<&Value>) -> reqwest::RequestBuilder {
    match body {
        Some(body) => request.json(body),
        None => request,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<RawResponse> {
        self.send(self.client.get(url)).await
    }

    async fn post(&self, url: Url, body: Option<&Value>) -> Result<RawResponse> {
        self.send(with_body(self.client.post(url), body)).await
    }

    async fn put(&self, url: Url, body: Option<&Value>) -> Result<RawResponse> {
        self.send(with_body(self.client.put(url), body)).await
    }

    async fn delete(&self, url: Url) -> Result<RawResponse> {
        self.send(self.client.delete(url)).await
    }

    async fn get_with_creds(&self, url: Url) -> Result<RawResponse> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ClientError::MissingCredentials("get_with_creds"))?;

        let mut request = self.client.get(url);
        if let Some(token) = &credentials.bearer_token {
            request = request.bearer_auth(token);
        }
        if let Some(cookie) = &credentials.session_cookie {
            request = request.header(COOKIE, cookie);
        }
        self.send(request).await
    }

    async fn secured_get(&self, url: Url) -> Result<RawResponse> {
        let token = self.bearer_token("secured_get")?;
        self.send(self.client.get(url).bearer_auth(token)).await
    }

    async fn secured_post(&self, url: Url, body: Option<&Value>) -> Result<RawResponse> {
        let token = self.bearer_token("secured_post")?;
        self.send(with_body(self.client.post(url).bearer_auth(token), body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_success_range() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(199, "").is_success());
        assert!(!RawResponse::new(302, "").is_success());
        assert!(!RawResponse::new(500, "").is_success());
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let credentials = Credentials::bearer("secret-token").with_session_cookie("session=abc");
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("secret-token"));
        assert!(!debug.contains("session=abc"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_empty_credentials_are_dropped() {
        let transport = HttpTransport::with_credentials(Credentials::default());
        assert!(transport.credentials.is_none());
    }

    #[tokio::test]
    async fn test_plain_transport_rejects_credentialed_calls() {
        let transport = HttpTransport::new();
        let url = Url::parse("http://127.0.0.1:9/v2/gerrit/g1").unwrap();

        let err = transport.secured_get(url.clone()).await.unwrap_err();
        assert!(matches!(err, ClientError::MissingCredentials("secured_get")));

        let err = transport.get_with_creds(url.clone()).await.unwrap_err();
        assert!(matches!(err, ClientError::MissingCredentials("get_with_creds")));

        let err = transport.secured_post(url, None).await.unwrap_err();
        assert!(matches!(err, ClientError::MissingCredentials("secured_post")));
    }

    #[tokio::test]
    async fn test_cookie_only_credentials_reject_secured_calls() {
        let transport = HttpTransport::with_credentials(Credentials {
            bearer_token: None,
            session_cookie: Some("session=abc".to_string()),
        });
        let url = Url::parse("http://127.0.0.1:9/v2/gerrit/g1").unwrap();

        let err = transport.secured_get(url).await.unwrap_err();
        assert!(matches!(err, ClientError::MissingCredentials("secured_get")));
    }
}
