//! Rental catalog and the bookings made against it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::resource::{default_true, Identity, Resource};

pub const DEFAULT_BOOKING_STATUS: &str = "pending";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub daily_rate: f64,
    pub image_url: String,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(with = "codec::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalItemCreate {
    pub name: String,
    pub description: String,
    pub daily_rate: f64,
    pub image_url: String,
    #[serde(default = "default_true")]
    pub available: bool,
}

impl Resource for RentalItem {
    type Create = RentalItemCreate;
    const COLLECTION: &'static str = "rental_items";
    const KIND: &'static str = "Rental item";

    fn id(&self) -> &str { &self.id }

    fn build(input: RentalItemCreate, identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: input.name,
            description: input.description,
            daily_rate: input.daily_rate,
            image_url: input.image_url,
            available: input.available,
            created_at: identity.created_at,
        }
    }
}

/// A customer's booking of a rental item.
///
/// `rental_item_id` is a soft reference: it is stored as given and never
/// checked against the rental item collection. Dates are opaque strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalBooking {
    pub id: String,
    pub rental_item_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub start_date: String,
    pub end_date: String,
    pub total_days: i64,
    pub total_cost: f64,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(with = "codec::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalBookingCreate {
    pub rental_item_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub start_date: String,
    pub end_date: String,
    pub total_days: i64,
    pub total_cost: f64,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String { DEFAULT_BOOKING_STATUS.to_string() }

impl Resource for RentalBooking {
    type Create = RentalBookingCreate;
    const COLLECTION: &'static str = "rental_bookings";
    const KIND: &'static str = "Rental booking";

    fn id(&self) -> &str { &self.id }

    fn build(input: RentalBookingCreate, identity: Identity) -> Self {
        Self {
            id: identity.id,
            rental_item_id: input.rental_item_id,
            customer_name: input.customer_name,
            customer_email: input.customer_email,
            customer_phone: input.customer_phone,
            start_date: input.start_date,
            end_date: input.end_date,
            total_days: input.total_days,
            total_cost: input.total_cost,
            status: input.status,
            created_at: identity.created_at,
        }
    }
}
