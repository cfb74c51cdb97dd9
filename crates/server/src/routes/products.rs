use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use models::product::Product;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Json<&'static [Product]> {
    let list = state.products.list_all();
    info!(count = list.len(), "list products");
    Json(list)
}

pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<&'static Product>, JsonApiError> {
    let Path(id) = path?;
    state.products.get_by_id(id).map(Json).map_err(JsonApiError::read)
}
