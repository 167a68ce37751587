use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call to the schedule API. Any variant leaves the local state untouched.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{operation}: server answered {status}: {body}")]
    Status {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },
}
