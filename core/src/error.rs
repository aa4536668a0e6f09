//! Error types for the Graph API client.
//!
//! # Design
//! `NotAuthorized` gets a dedicated variant because callers frequently
//! distinguish "the bound credential is missing or rejected" from "the server
//! returned an unexpected status." It is raised both before any I/O (client
//! constructed without a token) and when the server answers 401. All other
//! non-2xx responses land in `HttpError` with the raw status code and body
//! for debugging.

use std::fmt;

/// Errors returned by `GraphClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The client has no bound access token, or the server rejected the
    /// token with a 401.
    NotAuthorized,

    /// The server returned a non-2xx status other than 401.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request body could not be form-encoded.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotAuthorized => write!(f, "not authorized"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
