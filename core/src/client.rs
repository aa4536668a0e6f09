//! Stateless HTTP request builder and response parser for the Graph API
//! comment operations.
//!
//! # Design
//! `GraphClient` holds only a `base_url` and the access token bound at
//! construction; it carries no mutable state between calls. Each operation is
//! split into a `build_*` method that produces an `HttpRequest` and a
//! `parse_*` method that consumes an `HttpResponse`. The caller executes the
//! actual HTTP round-trip, keeping the core deterministic and free of I/O
//! dependencies.
//!
//! A client constructed without a token fails every `build_*` call with
//! `ApiError::NotAuthorized`, so no request value ever leaves an unauthorized
//! client.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Comment, Envelope, Paging, Reference};

/// The fixed production host for the Graph API.
pub const GRAPH_API_URL: &str = "https://graph.facebook.com";

/// Response shape of `POST /{object_id}/comments`: just the new comment id.
#[derive(serde::Deserialize)]
struct CreatedComment {
    id: String,
}

/// Synchronous, stateless client for the Graph API comment operations.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct GraphClient {
    base_url: String,
    access_token: Option<String>,
}

impl GraphClient {
    /// Client bound to an access token. Every request it builds carries
    /// `authorization: OAuth <token>`.
    pub fn new(base_url: &str, access_token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: Some(access_token.to_string()),
        }
    }

    /// Client with no credential. Every `build_*` call fails with
    /// `ApiError::NotAuthorized`.
    pub fn anonymous(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: None,
        }
    }

    /// Headers for an authorized request, or `NotAuthorized` when no token
    /// is bound.
    fn auth_headers(&self) -> Result<Vec<(String, String)>, ApiError> {
        let token = self.access_token.as_deref().ok_or(ApiError::NotAuthorized)?;
        Ok(vec![("authorization".to_string(), format!("OAuth {token}"))])
    }

    /// `GET /{object_id}/comments` with the default paging window
    /// (`offset=0&limit=25`).
    pub fn build_get_comments(&self, object_id: &str) -> Result<HttpRequest, ApiError> {
        self.build_get_comments_with(object_id, Paging::default())
    }

    /// `GET /{object_id}/comments` with a caller-supplied paging window,
    /// substituted into the query string verbatim.
    pub fn build_get_comments_with(
        &self,
        object_id: &str,
        paging: Paging,
    ) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: format!(
                "{}/{object_id}/comments?offset={}&limit={}",
                self.base_url, paging.offset, paging.limit
            ),
            headers: self.auth_headers()?,
            body: None,
        })
    }

    /// `GET /{comment_id}` — fetch a single comment.
    pub fn build_get_comment(&self, comment_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{comment_id}", self.base_url),
            headers: self.auth_headers()?,
            body: None,
        })
    }

    /// `POST /{object_id}/comments` with a form-encoded `message` body.
    pub fn build_add_comment(
        &self,
        object_id: &str,
        message: &str,
    ) -> Result<HttpRequest, ApiError> {
        let mut headers = self.auth_headers()?;
        headers.push((
            "content-type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        ));
        let body = serde_urlencoded::to_string([("message", message)])
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/{object_id}/comments", self.base_url),
            headers,
            body: Some(body),
        })
    }

    /// `POST /{comment_id}` with body `method=delete` — the API emulates
    /// DELETE through a POST override.
    pub fn build_delete_comment(&self, comment_id: &str) -> Result<HttpRequest, ApiError> {
        let mut headers = self.auth_headers()?;
        headers.push((
            "content-type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        ));
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/{comment_id}", self.base_url),
            headers,
            body: Some("method=delete".to_string()),
        })
    }

    /// `GET /{object_id}/likes` — everyone who liked the object.
    pub fn build_get_likes(&self, object_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{object_id}/likes", self.base_url),
            headers: self.auth_headers()?,
            body: None,
        })
    }

    pub fn parse_get_comments(&self, response: HttpResponse) -> Result<Vec<Comment>, ApiError> {
        check_status(&response, 200)?;
        let envelope: Envelope<Comment> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(envelope.data)
    }

    pub fn parse_get_comment(&self, response: HttpResponse) -> Result<Comment, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_add_comment(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response, 200)?;
        let created: CreatedComment = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(created.id)
    }

    /// Any 2xx counts as success; the response body is ignored.
    pub fn parse_delete_comment(&self, response: HttpResponse) -> Result<(), ApiError> {
        if (200..300).contains(&response.status) {
            return Ok(());
        }
        Err(error_for_status(response))
    }

    pub fn parse_get_likes(&self, response: HttpResponse) -> Result<Vec<Reference>, ApiError> {
        check_status(&response, 200)?;
        let envelope: Envelope<Reference> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(envelope.data)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(error_for_status(response.clone()))
}

fn error_for_status(response: HttpResponse) -> ApiError {
    if response.status == 401 {
        return ApiError::NotAuthorized;
    }
    ApiError::HttpError {
        status: response.status,
        body: response.body,
    }
}
