use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct GreetingResponse { pub message: String }

#[derive(ToSchema)]
pub struct ProductCreateDoc {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image_url: String,
    /// Defaults to true.
    pub in_stock: Option<bool>,
}

#[derive(ToSchema)]
pub struct RentalItemCreateDoc {
    pub name: String,
    pub description: String,
    pub daily_rate: f64,
    pub image_url: String,
    /// Defaults to true.
    pub available: Option<bool>,
}

#[derive(ToSchema)]
pub struct RentalBookingCreateDoc {
    pub rental_item_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub start_date: String,
    pub end_date: String,
    pub total_days: i64,
    pub total_cost: f64,
    /// Defaults to `pending`.
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct ArticleCreateDoc {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    /// Defaults to `Admin`.
    pub author: Option<String>,
    /// Defaults to true.
    pub published: Option<bool>,
}

#[derive(ToSchema)]
pub struct ServiceCreateDoc {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::root,
        crate::routes::products::create,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::rentals::create_item,
        crate::routes::rentals::list_items,
        crate::routes::rentals::create_booking,
        crate::routes::rentals::list_bookings,
        crate::routes::articles::create,
        crate::routes::articles::list,
        crate::routes::articles::get,
        crate::routes::services::create,
        crate::routes::services::list,
    ),
    components(
        schemas(
            HealthResponse,
            GreetingResponse,
            ProductCreateDoc,
            RentalItemCreateDoc,
            RentalBookingCreateDoc,
            ArticleCreateDoc,
            ServiceCreateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "rentals"),
        (name = "articles"),
        (name = "services")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_path_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/",
            "/api/products",
            "/api/products/{id}",
            "/api/rental-items",
            "/api/rental-bookings",
            "/api/articles",
            "/api/articles/{id}",
            "/api/services",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing from openapi");
        }
    }
}
