use axum::{extract::{rejection::JsonRejection, Path, State}, http::StatusCode, Json};
use models::article::{Article, ArticleCreate};

use super::{create_in, get_in, list_in, AppState};
use crate::errors::ApiError;

#[utoipa::path(
    post, path = "/api/articles", tag = "articles",
    request_body = crate::openapi::ArticleCreateDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 503, description = "Persistence Unavailable")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ArticleCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    create_in(&state.catalog.articles, payload).await
}

/// Published articles only.
#[utoipa::path(get, path = "/api/articles", tag = "articles", responses((status = 200, description = "Published articles")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Article>>, ApiError> {
    list_in(&state.catalog.articles).await
}

/// Fetches drafts too; only listing hides them.
#[utoipa::path(
    get, path = "/api/articles/{id}", tag = "articles",
    params(("id" = String, Path, description = "Article ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Article>, ApiError> {
    get_in(&state.catalog.articles, &id).await
}
