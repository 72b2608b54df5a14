use std::{marker::PhantomData, sync::Arc};

use models::{
    codec::{from_storage, to_storage},
    Filter, Resource, SingleLookup,
};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::storage::DocumentStore;

/// Hard upper bound on the number of entities a list read returns.
pub const LIST_LIMIT: u64 = 1000;

/// Create/list/get for one entity family on top of a document store.
pub struct ResourceService<R: Resource> {
    store: Arc<dyn DocumentStore>,
    _family: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self { Self { store: Arc::clone(&self.store), _family: PhantomData } }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self { Self { store, _family: PhantomData } }

    /// Stamp `input` with a fresh id and timestamp and write it as one document.
    #[instrument(skip_all, fields(collection = R::COLLECTION))]
    pub async fn create(&self, input: R::Create) -> Result<R, ServiceError> {
        let entity = R::create(input);
        let doc = to_storage(&entity)?;
        self.store.insert_one(R::COLLECTION, doc).await?;
        info!(id = %entity.id(), "created");
        Ok(entity)
    }

    /// Visible entities in store order, at most [`LIST_LIMIT`].
    #[instrument(skip_all, fields(collection = R::COLLECTION))]
    pub async fn list(&self) -> Result<Vec<R>, ServiceError> {
        let docs = self.store.find(R::COLLECTION, &R::visibility(), LIST_LIMIT).await?;
        let items = docs
            .into_iter()
            .map(|doc| from_storage::<R>(doc).map_err(ServiceError::from))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }
}

impl<R: SingleLookup> ResourceService<R> {
    #[instrument(skip(self), fields(collection = R::COLLECTION))]
    pub async fn get(&self, id: &str) -> Result<R, ServiceError> {
        let doc = self
            .store
            .find_one(R::COLLECTION, &Filter::by_id(id))
            .await?
            .ok_or_else(|| ServiceError::not_found(R::KIND))?;
        Ok(from_storage(doc)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_store;
    use models::article::{Article, ArticleCreate};
    use models::product::{Product, ProductCreate};
    use models::rental::{RentalBooking, RentalBookingCreate};
    use serde_json::json;
    use std::collections::HashSet;

    fn product_input(name: &str) -> ProductCreate {
        serde_json::from_value(json!({
            "name": name,
            "description": "Panel distribusi",
            "category": "Panel Listrik",
            "price": 2500000,
            "image_url": "https://images.example.com/panel.jpg"
        }))
        .unwrap()
    }

    fn article_input(title: &str, published: bool) -> ArticleCreate {
        ArticleCreate {
            title: title.into(),
            content: "isi".into(),
            excerpt: "ringkas".into(),
            image_url: "https://images.example.com/a.jpg".into(),
            author: "Admin".into(),
            published,
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_entity() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Product>::new(memory_store());
        let created = svc.create(product_input("Panel A")).await?;
        assert!(created.in_stock);
        let fetched = svc.get(&created.id).await?;
        assert_eq!(fetched, created);
        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let products = ResourceService::<Product>::new(memory_store());
        let articles = ResourceService::<Article>::new(memory_store());
        assert!(matches!(products.get("nonexistent-id").await, Err(ServiceError::NotFound(m)) if m == "Product not found"));
        assert!(matches!(articles.get("nonexistent-id").await, Err(ServiceError::NotFound(m)) if m == "Article not found"));
    }

    #[tokio::test]
    async fn ids_are_pairwise_distinct() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Product>::new(memory_store());
        let mut ids = HashSet::new();
        for i in 0..50 {
            ids.insert(svc.create(product_input(&format!("P{i}"))).await?.id);
        }
        assert_eq!(ids.len(), 50);
        Ok(())
    }

    #[tokio::test]
    async fn unpublished_articles_are_hidden_from_list_but_gettable() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Article>::new(memory_store());
        let draft = svc.create(article_input("draft", false)).await?;
        let live = svc.create(article_input("live", true)).await?;

        let listed: Vec<String> = svc.list().await?.into_iter().map(|a| a.id).collect();
        assert_eq!(listed, vec![live.id.clone()]);
        assert_eq!(svc.get(&draft.id).await?.title, "draft");
        Ok(())
    }

    #[tokio::test]
    async fn list_is_capped() -> Result<(), anyhow::Error> {
        let store = memory_store();
        let svc = ResourceService::<Product>::new(store.clone());
        for i in 0..(LIST_LIMIT + 5) {
            svc.create(product_input(&format!("P{i}"))).await?;
        }
        let listed = svc.list().await?;
        assert_eq!(listed.len() as u64, LIST_LIMIT);
        assert_eq!(listed[0].name, "P0");
        Ok(())
    }

    #[tokio::test]
    async fn booking_defaults_and_soft_reference() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<RentalBooking>::new(memory_store());
        let input: RentalBookingCreate = serde_json::from_value(json!({
            "rental_item_id": "does-not-exist",
            "customer_name": "Sari",
            "customer_email": "sari@example.com",
            "customer_phone": "+62811111111",
            "start_date": "2024-03-01",
            "end_date": "2024-03-03",
            "total_days": 2,
            "total_cost": 700000.0
        }))?;
        let booking = svc.create(input).await?;
        assert_eq!(booking.status, "pending");
        assert_eq!(svc.list().await?, vec![booking]);
        Ok(())
    }

    #[tokio::test]
    async fn negative_price_is_stored_as_sent() -> Result<(), anyhow::Error> {
        let svc = ResourceService::<Product>::new(memory_store());
        let mut input = product_input("diskon");
        input.price = -10.0;
        let created = svc.create(input).await?;
        assert_eq!(svc.get(&created.id).await?.price, -10.0);
        Ok(())
    }

    #[tokio::test]
    async fn undecodable_document_surfaces_as_model_error() -> Result<(), anyhow::Error> {
        let store = memory_store();
        store
            .insert_one("products", json!({"id": "broken", "name": "x"}).as_object().cloned().unwrap())
            .await?;
        let svc = ResourceService::<Product>::new(store);
        assert!(matches!(svc.get("broken").await, Err(ServiceError::Model(models::errors::ModelError::Codec(_)))));
        assert!(svc.list().await.is_err());
        Ok(())
    }
}
