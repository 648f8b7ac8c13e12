//! Route handlers
//!
//! Thin glue: parse the request, call the store or the query engine,
//! serialize the result.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{PostboxError, Result};
use crate::post::{NewPost, Post, PostUpdate};
use crate::query::{search_posts, sort_posts};
use crate::store::PostStore;

use super::MessageBody;

#[derive(Clone)]
struct AppState {
    store: Arc<PostStore>,
}

/// Raw query pairs; a repeated key keeps its first value
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Build the API router over `store`
pub fn router(store: Arc<PostStore>) -> Router {
    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/search", get(search))
        .route(
            "/api/posts/:id",
            get(get_post).put(update_post).delete(delete_post),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}

/// GET /api/posts
async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<Vec<Post>>> {
    let snapshot = with_store(state.store, |store| Ok(store.list())).await?;
    let posts = sort_posts(snapshot, params.first("sort"), params.first("direction"))?;
    Ok(Json(posts))
}

/// POST /api/posts
async fn create_post(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Post>)> {
    let draft: NewPost = parse_json(&body)?;
    let post = with_store(state.store, move |store| store.create(draft)).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/posts/search
async fn search(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<Vec<Post>>> {
    let snapshot = with_store(state.store, |store| Ok(store.list())).await?;
    Ok(Json(search_posts(
        &snapshot,
        params.first("title"),
        params.first("content"),
    )))
}

/// GET /api/posts/{id}
async fn get_post(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Post>> {
    let id = parse_id(&id)?;
    let post = with_store(state.store, move |store| store.get(id)).await?;
    Ok(Json(post))
}

/// PUT /api/posts/{id}
async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Post>> {
    let id = parse_id(&id)?;
    let update: PostUpdate = parse_json(&body)?;
    let post = with_store(state.store, move |store| store.update(id, update)).await?;
    Ok(Json(post))
}

/// DELETE /api/posts/{id}
async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>> {
    let id = parse_id(&id)?;
    with_store(state.store, move |store| store.delete(id)).await?;
    Ok(Json(MessageBody {
        message: format!("Post with id {} has been deleted successfully.", id),
    }))
}

/// Run a store call on the blocking pool
///
/// Mutations hold the store lock across a file rewrite, so readers go
/// through here too rather than parking an async worker on that lock.
async fn with_store<T, F>(store: Arc<PostStore>, op: F) -> Result<T>
where
    F: FnOnce(&PostStore) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| PostboxError::Internal(format!("store task failed: {}", e)))?
}

/// Decode a body that must be a JSON object
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| PostboxError::MalformedBody)?;
    if !value.is_object() {
        return Err(PostboxError::MalformedBody);
    }
    serde_json::from_value(value).map_err(|_| PostboxError::MalformedBody)
}

/// Ids are positive integers; anything else names no post
fn parse_id(raw: &str) -> Result<u64> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(PostboxError::InvalidId(raw.to_string())),
    }
}
