//! Stateless request builder and response parser for the hello service.
//!
//! # Design
//! `ServiceClient` holds only a `base_url`. `get` and `request` produce an
//! `HttpRequest`; `parse_greeting` consumes an `HttpResponse`. The caller
//! executes the round-trip in between.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub struct ServiceClient {
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, path: &str) -> HttpRequest {
        self.request(HttpMethod::Get, path)
    }

    /// Request with an arbitrary method token.
    pub fn request(&self, method: impl Into<HttpMethod>, path: &str) -> HttpRequest {
        let url = if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        };
        HttpRequest {
            method: method.into(),
            url,
        }
    }

    pub fn parse_greeting(&self, response: &HttpResponse) -> Result<String, ApiError> {
        check_status(response, 200)?;
        Ok(std::str::from_utf8(&response.content)?.to_string())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    let body = String::from_utf8_lossy(&response.content).into_owned();
    match response.status {
        400 => Err(ApiError::BadRequest(body)),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError { status, body }),
    }
}
