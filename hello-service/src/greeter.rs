//! The greeting endpoint.
//!
//! `GreeterService::handle` is a pure function of `(method, path)`. It never
//! logs or sets headers; clients only see what the transport adds
//! (`content-type`, `content-length`, `date`). The Axum adapter `greet` is
//! mounted both on the greeting path and as the router fallback.

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

/// The single route served by this service.
pub const GREETING_PATH: &str = "/hello";

/// Body returned for `GET /hello`.
pub const GREETING: &str = "Hello world!\n";

/// Body returned for any other method on `/hello`.
pub const BAD_REQUEST: &str = "bad request";

/// Outcome of dispatching one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// `GET /hello`.
    Greeting,
    /// Any method other than `GET` on `/hello`, standard or not.
    InvalidMethod,
    /// Any path other than `/hello`.
    NotFound,
}

impl Reply {
    pub fn status(self) -> StatusCode {
        match self {
            Reply::Greeting => StatusCode::OK,
            Reply::InvalidMethod => StatusCode::BAD_REQUEST,
            Reply::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Reply::Greeting => GREETING,
            Reply::InvalidMethod => BAD_REQUEST,
            Reply::NotFound => "",
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::NotFound => self.status().into_response(),
            _ => (self.status(), self.body()).into_response(),
        }
    }
}

/// Stateless responder for the greeting path.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreeterService;

impl GreeterService {
    pub fn handle(&self, method: &Method, path: &str) -> Reply {
        if path != GREETING_PATH {
            return Reply::NotFound;
        }
        if *method == Method::GET {
            Reply::Greeting
        } else {
            Reply::InvalidMethod
        }
    }
}

/// Axum handler. Accepts every method, including extension tokens such as
/// `KEK`, and defers to [`GreeterService::handle`].
pub async fn greet(method: Method, uri: Uri) -> Reply {
    GreeterService.handle(&method, uri.path())
}
