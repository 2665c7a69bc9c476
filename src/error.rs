use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single calculate-sum round trip.
#[derive(Error, Debug)]
pub enum SumError {
    /// Configured base URL could not be joined with the endpoint path
    #[error("invalid service endpoint: {0}")]
    InvalidEndpoint(String),

    /// Request could not be sent, or the response body could not be read
    #[error("failed to reach sum service: {0}")]
    Transport(#[from] reqwest::Error),

    /// No response within the configured timeout
    #[error("sum service request timed out")]
    Timeout,

    /// Server answered with a non-success status
    #[error("sum service request failed ({status}): {body}")]
    Status { status: StatusCode, body: String },

    /// Body is not JSON of the expected shape
    #[error("invalid sum service response: {0}")]
    Decode(#[from] serde_json::Error),

    /// JSON body without a usable `result` field
    #[error("sum service response did not contain a result")]
    MissingResult,
}

/// Result type alias for requester operations
pub type Result<T> = std::result::Result<T, SumError>;

/// Reasons the service rejects an operand.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OperandError {
    #[error("field \"{0}\" is missing")]
    Missing(&'static str),

    #[error("field \"{field}\" is not an integer: {value}")]
    NotAnInteger { field: &'static str, value: String },

    #[error("sum of {0} and {1} overflows")]
    Overflow(i64, i64),
}
