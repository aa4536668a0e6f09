//! In-process Graph API stand-in for the comment endpoints.
//!
//! Serves the same routes the production host exposes, keyed by opaque
//! string ids, and enforces the `Authorization: OAuth <token>` header on
//! every route. Deletion follows the API's POST override: a POST to the
//! comment id with form body `method=delete`.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Form, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reference {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub from: Reference,
    pub message: String,
    pub likes_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<Vec<Reference>>,
}

#[derive(Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Vec<T>,
}

#[derive(Deserialize)]
struct PageParams {
    #[serde(default)]
    offset: usize,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    25
}

#[derive(Deserialize)]
struct NewComment {
    message: String,
}

#[derive(Deserialize)]
struct PostOverride {
    method: String,
}

/// Everything the mock knows: comments by id, per-object comment threads in
/// insertion order, and per-object liker lists. Tests seed `likes` directly.
#[derive(Default)]
pub struct GraphStore {
    pub comments: HashMap<String, Comment>,
    pub threads: HashMap<String, Vec<String>>,
    pub likes: HashMap<String, Vec<Reference>>,
}

pub type Db = Arc<RwLock<GraphStore>>;

#[derive(Clone)]
struct AppState {
    db: Db,
    expected_auth: String,
}

type ApiRejection = (StatusCode, Json<Value>);

pub fn app(db: Db, access_token: &str) -> Router {
    let state = AppState {
        db,
        expected_auth: format!("OAuth {access_token}"),
    };
    Router::new()
        .route("/{id}/comments", get(list_comments).post(add_comment))
        .route("/{id}/likes", get(list_likes))
        .route("/{id}", get(get_comment).post(post_override))
        .with_state(state)
}

pub async fn run(
    listener: TcpListener,
    db: Db,
    access_token: &str,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(db, access_token)).await
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiRejection> {
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if presented == Some(state.expected_auth.as_str()) {
        return Ok(());
    }
    Err((
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": { "type": "OAuthException", "message": "Invalid access token" }
        })),
    ))
}

fn not_found() -> ApiRejection {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": { "type": "GraphMethodException", "message": "Unknown object" }
        })),
    )
}

async fn list_comments(
    State(state): State<AppState>,
    Path(object_id): Path<String>,
    Query(page): Query<PageParams>,
    headers: HeaderMap,
) -> Result<Json<Envelope<Comment>>, ApiRejection> {
    authorize(&state, &headers)?;
    let store = state.db.read().await;
    let data = store
        .threads
        .get(&object_id)
        .map(|ids| {
            ids.iter()
                .skip(page.offset)
                .take(page.limit)
                .filter_map(|id| store.comments.get(id).cloned())
                .collect()
        })
        .unwrap_or_default();
    Ok(Json(Envelope { data }))
}

async fn add_comment(
    State(state): State<AppState>,
    Path(object_id): Path<String>,
    headers: HeaderMap,
    Form(input): Form<NewComment>,
) -> Result<Json<Value>, ApiRejection> {
    authorize(&state, &headers)?;
    let comment = Comment {
        id: format!("{object_id}_{}", Uuid::new_v4().as_simple()),
        from: Reference {
            id: "100001".to_string(),
            name: "Mock User".to_string(),
        },
        message: input.message,
        likes_count: 0,
        likes: None,
    };
    let id = comment.id.clone();
    let mut store = state.db.write().await;
    store
        .threads
        .entry(object_id)
        .or_default()
        .push(id.clone());
    store.comments.insert(id.clone(), comment);
    Ok(Json(json!({ "id": id })))
}

async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Comment>, ApiRejection> {
    authorize(&state, &headers)?;
    let store = state.db.read().await;
    store.comments.get(&id).cloned().map(Json).ok_or_else(not_found)
}

async fn post_override(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Form(input): Form<PostOverride>,
) -> Result<Json<Value>, ApiRejection> {
    authorize(&state, &headers)?;
    if input.method != "delete" {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": { "type": "GraphMethodException", "message": "Unsupported method" }
            })),
        ));
    }
    let mut store = state.db.write().await;
    store.comments.remove(&id).ok_or_else(not_found)?;
    for ids in store.threads.values_mut() {
        ids.retain(|comment_id| comment_id != &id);
    }
    Ok(Json(json!({})))
}

async fn list_likes(
    State(state): State<AppState>,
    Path(object_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Envelope<Reference>>, ApiRejection> {
    authorize(&state, &headers)?;
    let store = state.db.read().await;
    let data = store.likes.get(&object_id).cloned().unwrap_or_default();
    Ok(Json(Envelope { data }))
}
