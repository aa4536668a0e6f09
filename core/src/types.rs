//! Domain DTOs for the Graph API comment operations.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. They are pure
//! parsing targets with public fields and no behavior.

use serde::{Deserialize, Serialize};

/// A named graph entity — a commenter or a liker. `{id, name}` is the
/// minimal shape the API returns wherever it references another object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reference {
    pub id: String,
    pub name: String,
}

/// A single comment returned by the API.
///
/// `likes` is only present when the API expands the liker list; `likes_count`
/// is always present in responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub from: Reference,
    pub message: String,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<Vec<Reference>>,
}

/// JSON wrapper for list endpoints: the `data` array holds the results,
/// in response order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope<T> {
    pub data: Vec<T>,
}

/// Pagination window for list endpoints. Values are substituted into the
/// query string verbatim; `u32` already rules out negative offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub offset: u32,
    pub limit: u32,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 25,
        }
    }
}
