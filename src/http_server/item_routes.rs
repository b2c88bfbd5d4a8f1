//! Item HTTP Routes
//!
//! `/items` and `/items/:id`. Each handler issues exactly one store call.
//!
//! Update and delete do not check that the id exists: a missing row is a
//! silent no-op that still answers 204, while get answers 404.
//!
//! Request bodies are read in full with no size limit.

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::errors::{ApiError, ApiResult};
use super::extract::{ItemIdPath, JsonBody};
use crate::store::{Item, ItemPayload, ItemStore};

/// Create item routes backed by `store`
pub fn item_routes<S: ItemStore>(store: S) -> Router {
    Router::new()
        .route("/items", post(create_item::<S>).get(list_items::<S>))
        .route(
            "/items/:id",
            get(get_item::<S>)
                .put(update_item::<S>)
                .delete(delete_item::<S>),
        )
        .layer(DefaultBodyLimit::disable())
        .with_state(store)
}

async fn create_item<S: ItemStore>(
    State(store): State<S>,
    JsonBody(payload): JsonBody<ItemPayload>,
) -> ApiResult<Json<Item>> {
    let item = store.create(&payload).await?;
    Ok(Json(item))
}

async fn list_items<S: ItemStore>(State(store): State<S>) -> ApiResult<Json<Vec<Item>>> {
    let items = store.list().await?;
    Ok(Json(items))
}

async fn get_item<S: ItemStore>(
    State(store): State<S>,
    ItemIdPath(id): ItemIdPath,
) -> ApiResult<Json<Item>> {
    store.get(id).await?.map(Json).ok_or(ApiError::NotFound)
}

async fn update_item<S: ItemStore>(
    State(store): State<S>,
    ItemIdPath(id): ItemIdPath,
    JsonBody(payload): JsonBody<ItemPayload>,
) -> ApiResult<StatusCode> {
    store.update(id, &payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_item<S: ItemStore>(
    State(store): State<S>,
    ItemIdPath(id): ItemIdPath,
) -> ApiResult<StatusCode> {
    store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
