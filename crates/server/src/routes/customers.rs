use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use models::customer::{self, CustomerInput};
use tracing::{info, warn};

use crate::errors::{JsonApiError, ID_MISMATCH_MESSAGE};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<customer::Model>>, JsonApiError> {
    let list = state.customers.list_all().await.map_err(JsonApiError::read)?;
    info!(count = list.len(), "list customers");
    Ok(Json(list))
}

pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<customer::Model>, JsonApiError> {
    let Path(id) = path?;
    match state.customers.get_by_id(id).await {
        Ok(c) => Ok(Json(c)),
        Err(e) => {
            if e.is_not_found() {
                warn!(id, "customer not found");
            }
            Err(JsonApiError::read(e))
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CustomerInput>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(input) = payload?;
    info!(name = ?input.name, "customer create request");
    let fields = input.validate().map_err(|errors| {
        warn!(%errors, "customer create validation failed");
        JsonApiError::validation(errors)
    })?;

    let created = state.customers.create(fields).await.map_err(JsonApiError::write)?;
    info!(id = created.id, "created customer");
    let location = format!("/api/clientes/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CustomerInput>, JsonRejection>,
) -> Result<Json<customer::Model>, JsonApiError> {
    let Path(id) = path?;
    let Json(input) = payload?;
    if input.id != id {
        warn!(id, body_id = input.id, "path id does not match body id");
        return Err(JsonApiError::bad_request(ID_MISMATCH_MESSAGE));
    }
    let fields = input.validate().map_err(|errors| {
        warn!(id, %errors, "customer update validation failed");
        JsonApiError::validation(errors)
    })?;

    let updated = state.customers.update(id, fields).await.map_err(JsonApiError::write)?;
    info!(id, "updated customer");
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    state.customers.delete(id).await.map_err(JsonApiError::write)?;
    info!(id, "deleted customer");
    Ok(StatusCode::NO_CONTENT)
}
