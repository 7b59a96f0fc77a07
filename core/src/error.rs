//! Error types for the service client.
//!
//! # Design
//! `BadRequest` gets its own variant because the service answers a wrong
//! method with a well-defined 400, and callers assert on it directly.
//! `NotFound` covers paths the service does not serve. Every other non-2xx
//! response lands in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `ServiceClient::parse_greeting`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 400, e.g. for a method other than GET.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than 200, 400 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body is not valid UTF-8.
    #[error("response body is not UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}
