//! Synchronous service client core for the hello service.
//!
//! # Overview
//! Builds `HttpRequest` values and inspects `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, so the core stays deterministic and testable.
//!
//! # Design
//! - `ServiceClient` is stateless; it holds only `base_url`.
//! - `get` and `request` mirror the two calls functional tests make against
//!   a running instance. `request` accepts any method token, including
//!   non-standard ones such as `KEK`.
//! - `parse_greeting` maps the service's replies onto `ApiError` variants.

pub mod client;
pub mod error;
pub mod http;

pub use client::ServiceClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
