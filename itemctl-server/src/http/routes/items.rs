//! Item endpoints
//!
//! Handlers validate their input first, then check out one session, hand
//! it to `ItemRepo`, and turn `None` into a 404. Store errors propagate
//! as 500.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::ItemRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ItemId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{Item, ItemCreate, ListParams, ListWindow};

/// POST /items - create an item
async fn create_item(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<ItemCreate>,
) -> Result<Json<Item>, ApiError> {
    let mut conn = state.session().await?;
    let item = ItemRepo::new(&mut conn).create(&payload).await?;
    Ok(Json(item))
}

/// GET /items - list items by offset/limit
async fn list_items(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let mut conn = state.session().await?;
    let items = ItemRepo::new(&mut conn)
        .list(ListWindow::from(params))
        .await?;
    Ok(Json(items))
}

/// GET /items/{id}
async fn read_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<Item>, ApiError> {
    let mut conn = state.session().await?;
    ItemRepo::new(&mut conn)
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// PUT /items/{id} - replace all business fields
async fn update_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    ValidJson(payload): ValidJson<ItemCreate>,
) -> Result<Json<Item>, ApiError> {
    let mut conn = state.session().await?;
    ItemRepo::new(&mut conn)
        .update(id, &payload)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// DELETE /items/{id} - returns the deleted record
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<Item>, ApiError> {
    let mut conn = state.session().await?;
    ItemRepo::new(&mut conn)
        .delete(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Item routes
///
/// The collection answers on both `/items` and `/items/`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(read_item).put(update_item).delete(delete_item),
        )
}
