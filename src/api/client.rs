//! Core request dispatch for the Loyalicos API.
//!
//! One request per operation: build method/path/body, send, enforce the
//! status contract, decode the JSON body. Retries and token caching are the
//! caller's concern.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::{Members, Transactions};
use crate::auth::Credentials;
use crate::config::Config;
use crate::error::Error;

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the Loyalicos API.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    host: String,
    api_key: String,
}

impl Client {
    /// Create a client with an explicit host and API key. No OAuth exchange
    /// is performed.
    pub fn new<T: Into<String>>(host: T, api_key: T) -> Result<Self, Error> {
        Ok(Self {
            http: build_http()?,
            host: host.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Resolve credentials from `config` and return a ready client.
    ///
    /// When only a client/secret pair is configured this performs one
    /// Basic-Auth exchange against `/oauth/authapi`; fails with
    /// [`Error::NoCredentials`] when nothing usable is configured.
    pub async fn connect(config: Config) -> Result<Self, Error> {
        let http = build_http()?;
        let credentials = Credentials::resolve(&http, &config).await?;
        Ok(Self {
            http,
            host: credentials.host,
            api_key: credentials.api_key,
        })
    }

    /// Shorthand for [`Client::connect`] with [`Config::from_env`].
    pub async fn from_env() -> Result<Self, Error> {
        Self::connect(Config::from_env()).await
    }

    /// Membership operations.
    pub fn members(&self) -> Members<'_> {
        Members { client: self }
    }

    /// Accrual operations.
    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.host, path);
        debug!(method = %method, url = %url, "dispatching API request");
        self.http.request(method, url).bearer_auth(&self.api_key)
    }

    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, Error> {
        let response = request.send().await?;
        let response = check_response(response).await?;
        Ok(response.json().await?)
    }
}

fn build_http() -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?)
}

/// Enforce the status contract: exactly 200 is success, anything else is
/// [`Error::RequestFailed`] carrying the (truncated) response body.
pub(crate) async fn check_response(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status == StatusCode::OK {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, "API request rejected");
        Err(Error::from_response(status, &body))
    }
}
