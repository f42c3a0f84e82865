//! HTTP client for the CLA API.
//!
//! Every public operation is an `async fn`, so nothing goes over the wire
//! until the returned future is awaited, and each await sends exactly one
//! request. There is no caching, retry or de-duplication.

pub mod companies;
pub mod gerrit;
pub mod github;
pub mod ops;
pub mod projects;
pub mod repositories;
pub mod signatures;
pub mod signing;
pub mod users;

use std::fmt;
use std::sync::Arc;

use cla_core::{ClientConfig, Operation, Surface};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{ClientError, Result};
use crate::transport::{HttpTransport, RawResponse, Transport};

/// HTTP client for the CLA API.
#[derive(Clone)]
pub struct ClaClient {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl fmt::Debug for ClaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ClaClient {
    /// Create a client using the plain reqwest transport.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Create a client with a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { transport, config }
    }

    /// Create from environment (see [`ClientConfig::from_env`]).
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Current configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Set the deployed base URL. Last write wins.
    pub fn set_api_url(&mut self, api_url: impl Into<String>) {
        self.config.set_api_url(api_url);
    }

    /// Switch between local services and the deployed backend.
    pub fn set_local_mode(&mut self, enabled: bool) {
        if enabled {
            tracing::info!("Running in local services mode");
        } else {
            tracing::info!("Running in deployed services mode");
        }
        self.config.set_local_mode(enabled);
    }

    /// Replace the transport, e.g. with one that carries credentials.
    pub fn set_transport(&mut self, transport: Arc<dyn Transport>) {
        self.transport = transport;
    }

    /// Resolved URL for `operation`, without sending anything.
    pub fn url_for(&self, operation: Operation, params: &[&str], query: &str) -> Result<String> {
        Ok(self.config.resolve(operation, params, query)?)
    }

    /// Call any operation and return its body as JSON.
    ///
    /// Raw endpoints come back as a JSON string holding the body text.
    pub async fn call(
        &self,
        operation: Operation,
        params: &[&str],
        body: Option<&Value>,
    ) -> Result<Value> {
        self.call_with_query(operation, params, "", body).await
    }

    /// Like [`ClaClient::call`], deserializing into `T`.
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        operation: Operation,
        params: &[&str],
        body: Option<&Value>,
    ) -> Result<T> {
        let value = self.call(operation, params, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn call_with_query(
        &self,
        operation: Operation,
        params: &[&str],
        query: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        let response = self.dispatch(operation, params, query, body).await?;
        match operation.endpoint().response {
            cla_core::ResponseKind::Json => Ok(serde_json::from_str(&response.body)?),
            cla_core::ResponseKind::Raw => Ok(Value::String(response.body)),
        }
    }

    /// Call `operation` and return the body text unparsed.
    async fn call_raw(
        &self,
        operation: Operation,
        params: &[&str],
        body: Option<&Value>,
    ) -> Result<String> {
        let response = self.dispatch(operation, params, "", body).await?;
        Ok(response.body)
    }

    /// Send one request for `operation` and reject non-2xx responses.
    async fn dispatch(
        &self,
        operation: Operation,
        params: &[&str],
        query: &str,
        body: Option<&Value>,
    ) -> Result<RawResponse> {
        let endpoint = operation.endpoint();
        let surface = endpoint
            .surface()
            .ok_or(ClientError::UnsupportedSurface {
                method: endpoint.method,
                auth: endpoint.auth,
            })?;
        let url = Url::parse(&self.url_for(operation, params, query)?)?;
        let body = if endpoint.method.has_body() { body } else { None };

        tracing::debug!(
            operation = operation.name(),
            method = %endpoint.method,
            url = %url,
            "Sending request"
        );

        let response = match surface {
            Surface::Get => self.transport.get(url).await?,
            Surface::Post => self.transport.post(url, body).await?,
            Surface::Put => self.transport.put(url, body).await?,
            Surface::Delete => self.transport.delete(url).await?,
            Surface::GetWithCreds => self.transport.get_with_creds(url).await?,
            Surface::SecuredGet => self.transport.secured_get(url).await?,
            Surface::SecuredPost => self.transport.secured_post(url, body).await?,
        };

        if response.is_success() {
            Ok(response)
        } else {
            tracing::warn!(
                operation = operation.name(),
                status = response.status,
                "Request failed"
            );
            Err(ClientError::Status {
                status: response.status,
                body: response.body,
            })
        }
    }
}

/// Serialize a caller payload into the JSON body sent on the wire.
fn to_body<T: Serialize + ?Sized>(payload: &T) -> Result<Value> {
    Ok(serde_json::to_value(payload)?)
}
