//! Errors returned by the client's backend collaborators.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never reached the backend (network failure, CORS, aborted fetch).
    #[error("Failed to send request: {0}")]
    Request(String),
    /// The backend answered but the body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The backend answered with a non-success status code.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Unknown role: {0:?}")]
    UnknownRole(String),
}
