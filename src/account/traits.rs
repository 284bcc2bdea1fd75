//! Trait abstraction for the account client to enable mocking in tests

use super::client::{SignInRequest, SignInResponse};
use super::error::SubmitError;
use async_trait::async_trait;

/// Trait for account service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountClientTrait: Send + Sync {
    /// Submit credentials and return the account's display name
    async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse, SubmitError>;
}
