use thiserror::Error;

/// Failure of an HTTP round-trip before any application payload was read.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP error, status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}
