use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Greeting, Health};
use models::{Resource, SingleLookup};
use service::{Catalog, ResourceService};

use crate::errors::ApiError;
use crate::metrics;
use crate::openapi::ApiDoc;

pub mod products;
pub mod rentals;
pub mod articles;
pub mod services;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(get, path = "/api/", tag = "health", responses((status = 200, description = "API greeting", body = crate::openapi::GreetingResponse)))]
pub async fn root() -> Json<Greeting> {
    Json(Greeting::default())
}

async fn metrics_handler() -> (StatusCode, String) {
    metrics::encode_metrics()
}

/// Parse the body, create the entity, answer 201 with the stored shape.
pub(crate) async fn create_in<R: Resource>(
    svc: &ResourceService<R>,
    payload: Result<Json<R::Create>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), ApiError> {
    let Json(input) = payload?;
    let created = svc.create(input).await?;
    metrics::record_created(R::COLLECTION);
    Ok((StatusCode::CREATED, Json(created)))
}

pub(crate) async fn list_in<R: Resource>(svc: &ResourceService<R>) -> Result<Json<Vec<R>>, ApiError> {
    let items = svc.list().await?;
    metrics::record_listed(R::COLLECTION, items.len());
    Ok(Json(items))
}

pub(crate) async fn get_in<R: SingleLookup>(svc: &ResourceService<R>, id: &str) -> Result<Json<R>, ApiError> {
    Ok(Json(svc.get(id).await?))
}

/// Resource routes, mounted under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route("/products/:id", get(products::get))
        .route("/rental-items", get(rentals::list_items).post(rentals::create_item))
        .route("/rental-bookings", get(rentals::list_bookings).post(rentals::create_booking))
        .route("/articles", get(articles::list).post(articles::create))
        .route("/articles/:id", get(articles::get))
        .route("/services", get(services::list).post(services::create))
}

/// Build the full application router: health, metrics, docs and the `/api` resources.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .route("/api", get(root))
        .route("/api/", get(root))
        .nest("/api", api_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
