//! Membership operations.

use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;

use crate::auth::UserToken;
use crate::error::Error;

use super::Client;

/// Header carrying the member access token on profile reads.
const ACCESS_TOKEN_HEADER: &str = "Access-Token";

/// Membership operations over a shared [`Client`].
#[derive(Clone, Copy)]
pub struct Members<'c> {
    pub(crate) client: &'c Client,
}

impl Members<'_> {
    /// Enroll a new member under the given external alias.
    ///
    /// Returns the access token issued for the new membership - the upstream
    /// service answers the enrollment with the bare token as its JSON body.
    pub async fn create(&self, alias: &str) -> Result<String, Error> {
        let request = self
            .client
            .request(Method::PUT, "3PAMI/membership")
            .json(&json!({ "external_id": alias }));
        let access_token: String = self.client.execute(request).await?;

        debug!(alias = alias, "membership created");
        Ok(access_token)
    }

    /// Fetch a member profile.
    ///
    /// The body shape is defined by the upstream service and passed through
    /// unvalidated.
    pub async fn profile(&self, alias: &str, user_token: &UserToken) -> Result<Value, Error> {
        let request = self
            .client
            .request(Method::GET, &format!("3PAMI/membership/{alias}"))
            .header(ACCESS_TOKEN_HEADER, user_token.access_token.as_str());
        self.client.execute(request).await
    }

    /// Exchange a refresh token for a fresh member access token.
    pub async fn renew_token(&self, user_token: &UserToken) -> Result<String, Error> {
        let request = self
            .client
            .request(Method::POST, "3PAMI/refreshToken")
            .json(&json!({
                "grant_type": "refresh_token",
                "refresh_token": user_token.refresh_token,
            }));
        self.client.execute(request).await
    }
}
