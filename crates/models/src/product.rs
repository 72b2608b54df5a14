use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::resource::{default_true, Identity, Resource, SingleLookup};

/// Catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image_url: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(with = "codec::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image_url: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

impl Resource for Product {
    type Create = ProductCreate;
    const COLLECTION: &'static str = "products";
    const KIND: &'static str = "Product";

    fn id(&self) -> &str { &self.id }

    fn build(input: ProductCreate, identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: input.name,
            description: input.description,
            category: input.category,
            price: input.price,
            image_url: input.image_url,
            in_stock: input.in_stock,
            created_at: identity.created_at,
        }
    }
}

impl SingleLookup for Product {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> serde_json::Value {
        json!({
            "name": "Kabel NYY 4x16mm",
            "description": "Kabel power untuk instalasi outdoor",
            "category": "Kabel",
            "price": 185000,
            "image_url": "https://images.example.com/kabel.jpg"
        })
    }

    #[test]
    fn in_stock_defaults_to_true() {
        let input: ProductCreate = serde_json::from_value(body()).unwrap();
        let p = Product::create(input);
        assert!(p.in_stock);
        assert_eq!(p.price, 185000.0);
    }

    #[test]
    fn client_supplied_identity_is_ignored() {
        let mut raw = body();
        raw["id"] = json!("client-chosen");
        raw["created_at"] = json!("1999-01-01T00:00:00Z");
        let input: ProductCreate = serde_json::from_value(raw).unwrap();
        let p = Product::create(input);
        assert_ne!(p.id, "client-chosen");
        assert!(p.created_at.timestamp() > 946_684_800);
    }

    #[test]
    fn negative_and_zero_prices_are_kept() {
        for price in [-1.0, 0.0, -0.5] {
            let mut raw = body();
            raw["price"] = json!(price);
            let input: ProductCreate = serde_json::from_value(raw).unwrap();
            assert_eq!(Product::create(input).price, price);
        }
    }

    #[test]
    fn missing_required_field_fails_to_parse() {
        let mut raw = body();
        raw.as_object_mut().unwrap().remove("category");
        assert!(serde_json::from_value::<ProductCreate>(raw).is_err());
    }
}
