//! Account service module for submitting sign-in credentials

mod client;
mod error;
mod traits;

pub use client::{AccountClient, SignInRequest, SignInResponse, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::SubmitError;
pub use traits::AccountClientTrait;

#[cfg(test)]
pub use traits::MockAccountClientTrait;
