//! HTTP client for the postal code lookup service
//!
//! Talks to a ViaCEP-compatible endpoint: `GET {base}/ws/{code}/json/`
//! returns either an address object or `{"erro": true}`.

use crate::state::Address;
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Default lookup service address
pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

/// Default time allowed for one lookup
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("postal code not found")]
    NotFound,
    #[error("lookup timed out")]
    Timeout,
    #[error("request failed: {0}")]
    Http(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Timeout
        } else {
            LookupError::Http(err)
        }
    }
}

/// Wire format of a lookup response
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    logradouro: Option<String>,
    bairro: Option<String>,
    localidade: Option<String>,
    uf: Option<String>,
    erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    fn is_error(&self) -> bool {
        self.erro.as_ref().is_some_and(is_truthy)
    }

    fn into_address(self) -> Address {
        Address::new(
            self.logradouro.unwrap_or_default(),
            self.bairro.unwrap_or_default(),
            self.localidade.unwrap_or_default(),
            self.uf.unwrap_or_default(),
        )
    }
}

/// The service has sent both `true` and `"true"` for the error flag
fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Decode a response body into an address
fn parse_body(body: &str) -> Result<Address, LookupError> {
    let response: ViaCepResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;
    if response.is_error() {
        return Err(LookupError::NotFound);
    }
    Ok(response.into_address())
}

/// Client for the postal code lookup service
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http: Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a client for `base_url`, bounding every request by `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn lookup_url(&self, postal_code: &str) -> String {
        format!("{}/ws/{}/json/", self.base_url, postal_code)
    }

    /// Resolve a postal code to an address
    pub async fn fetch(&self, postal_code: &str) -> Result<Address, LookupError> {
        let response = self.http.get(self.lookup_url(postal_code)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response.text().await?;
        parse_body(&body)
    }
}
