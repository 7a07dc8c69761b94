use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, header::AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::error::Result;

/// How an outbound request authenticates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    /// Base64 encoded `client_id:client_secret`.
    Basic(String),
    /// Short-lived access token.
    Bearer(String),
}

impl Auth {
    pub fn header_value(&self) -> String {
        match self {
            Auth::Basic(credential) => format!("Basic {}", credential),
            Auth::Bearer(token) => format!("Bearer {}", token),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    pub method: Method,
    pub url: String,
    pub auth: Auth,
    /// Sent as `application/x-www-form-urlencoded` when not empty.
    pub form: Vec<(String, String)>,
}

impl ProviderRequest {
    pub fn get(url: impl Into<String>, auth: Auth) -> Self {
        ProviderRequest {
            method: Method::GET,
            url: url.into(),
            auth,
            form: Vec::new(),
        }
    }

    pub fn post_form(url: impl Into<String>, auth: Auth, form: &[(&str, &str)]) -> Self {
        ProviderRequest {
            method: Method::POST,
            url: url.into(),
            auth,
            form: form
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}

/// Status and raw body of a provider response.
///
/// The body is only decoded when a caller asks for it, so statuses that carry
/// no JSON (204, most error pages) never fail on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ProviderResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        ProviderResponse {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Capability to perform one HTTP request against the provider.
///
/// Every outbound call of a status lookup goes through this trait, which keeps
/// the lookup logic free of any concrete HTTP stack.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: ProviderRequest) -> Result<ProviderResponse>;
}

/// [`HttpClient`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        ReqwestClient {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: ProviderRequest) -> Result<ProviderResponse> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .header(AUTHORIZATION, request.auth.header_value());

        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(ProviderResponse { status, body })
    }
}
