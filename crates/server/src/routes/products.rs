use axum::{extract::{rejection::JsonRejection, Path, State}, http::StatusCode, Json};
use models::product::{Product, ProductCreate};

use super::{create_in, get_in, list_in, AppState};
use crate::errors::ApiError;

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::ProductCreateDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 503, description = "Persistence Unavailable")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    create_in(&state.catalog.products, payload).await
}

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    responses((status = 200, description = "List OK"), (status = 503, description = "Persistence Unavailable"))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    list_in(&state.catalog.products).await
}

#[utoipa::path(
    get, path = "/api/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>, ApiError> {
    get_in(&state.catalog.products, &id).await
}
