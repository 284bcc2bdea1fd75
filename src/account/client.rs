//! HTTP client for the account service
//!
//! Credentials are sent as a JSON `PATCH` to a single sign-in endpoint. The
//! body carries either `email` or `number` next to the password, never both.

use super::error::SubmitError;
use super::traits::AccountClientTrait;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default sign-in endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://my-json-server.typicode.com/kidsloop-test/accounts/sign-in";

/// Default upper bound on a single request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Request body: the identifier under the key matching its shape
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SignInRequest {
    Email { email: String, password: String },
    Phone { number: String, password: String },
}

// Keep passwords out of logs and test failure output
impl fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email { email, .. } => f
                .debug_struct("Email")
                .field("email", email)
                .field("password", &"***")
                .finish(),
            Self::Phone { number, .. } => f
                .debug_struct("Phone")
                .field("number", number)
                .field("password", &"***")
                .finish(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    pub name: String,
}

/// Client for the remote account service
#[derive(Debug, Clone)]
pub struct AccountClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AccountClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AccountClientTrait for AccountClient {
    async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse, SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, ?request, "sending sign-in request");

        let response = self
            .http
            .patch(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body: SignInResponse = response.json().await?;
        Ok(body)
    }
}
