//! Failures of the sign-in request

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Connection, TLS or timeout failure before a response arrived
    #[error("account service unreachable: {0}")]
    Transport(String),

    #[error("account service returned {code}: {body}")]
    Status { code: u16, body: String },

    #[error("unexpected response from account service: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}
