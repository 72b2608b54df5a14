use std::sync::Arc;

use models::{article::Article, product::Product, rental::{RentalBooking, RentalItem}, service::Service};

use crate::resource::ResourceService;
use crate::storage::DocumentStore;

/// The five entity families served by the API, sharing one document store.
#[derive(Clone)]
pub struct Catalog {
    pub products: ResourceService<Product>,
    pub rental_items: ResourceService<RentalItem>,
    pub rental_bookings: ResourceService<RentalBooking>,
    pub articles: ResourceService<Article>,
    pub services: ResourceService<Service>,
}

impl Catalog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            products: ResourceService::new(Arc::clone(&store)),
            rental_items: ResourceService::new(Arc::clone(&store)),
            rental_bookings: ResourceService::new(Arc::clone(&store)),
            articles: ResourceService::new(Arc::clone(&store)),
            services: ResourceService::new(store),
        }
    }
}
