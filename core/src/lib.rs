//! Synchronous client core for the Graph API comment operations.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `GraphClient` is stateless beyond `base_url` and the bound access token.
//! - Each comment operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Every request carries `authorization: OAuth <token>`; a client with no
//!   bound token fails with `ApiError::NotAuthorized` at build time, before
//!   any I/O could happen.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{GraphClient, GRAPH_API_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Comment, Envelope, Paging, Reference};
