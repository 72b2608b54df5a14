//! Rental items and bookings. Neither family supports lookup by id.

use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use models::rental::{RentalBooking, RentalBookingCreate, RentalItem, RentalItemCreate};

use super::{create_in, list_in, AppState};
use crate::errors::ApiError;

#[utoipa::path(
    post, path = "/api/rental-items", tag = "rentals",
    request_body = crate::openapi::RentalItemCreateDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 503, description = "Persistence Unavailable")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<RentalItemCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<RentalItem>), ApiError> {
    create_in(&state.catalog.rental_items, payload).await
}

#[utoipa::path(get, path = "/api/rental-items", tag = "rentals", responses((status = 200, description = "List OK")))]
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<RentalItem>>, ApiError> {
    list_in(&state.catalog.rental_items).await
}

/// `rental_item_id` is stored as given; the item is not looked up.
#[utoipa::path(
    post, path = "/api/rental-bookings", tag = "rentals",
    request_body = crate::openapi::RentalBookingCreateDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 503, description = "Persistence Unavailable")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<RentalBookingCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<RentalBooking>), ApiError> {
    create_in(&state.catalog.rental_bookings, payload).await
}

#[utoipa::path(get, path = "/api/rental-bookings", tag = "rentals", responses((status = 200, description = "List OK")))]
pub async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<RentalBooking>>, ApiError> {
    list_in(&state.catalog.rental_bookings).await
}
