use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use models::service::{Service, ServiceCreate};

use super::{create_in, list_in, AppState};
use crate::errors::ApiError;

#[utoipa::path(
    post, path = "/api/services", tag = "services",
    request_body = crate::openapi::ServiceCreateDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 503, description = "Persistence Unavailable")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ServiceCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    create_in(&state.catalog.services, payload).await
}

#[utoipa::path(get, path = "/api/services", tag = "services", responses((status = 200, description = "List OK")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Service>>, ApiError> {
    list_in(&state.catalog.services).await
}
