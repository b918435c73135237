// server/store.rs - In-memory product store
//
// Products live in insertion order behind a single lock; ids are
// assigned monotonically and never reused within a process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// A stored product record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredProduct {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub stock: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a product.
///
/// The browser form sends only `name` and `price`; the rest defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stock: u32,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub stock: Option<u32>,
}

#[derive(Default)]
struct Inner {
    items: Vec<StoredProduct>,
    next_id: u64,
}

/// Thread-safe in-memory collection of products.
#[derive(Default)]
pub struct ProductStore {
    inner: RwLock<Inner>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, input: ProductInput) -> StoredProduct {
        let mut inner = self.inner.write().unwrap();
        inner.next_id += 1;
        let now = Utc::now();
        let product = StoredProduct {
            id: inner.next_id,
            name: input.name,
            price: input.price,
            description: input.description,
            stock: input.stock,
            created_at: now,
            updated_at: now,
        };
        inner.items.push(product.clone());
        product
    }

    pub fn get(&self, id: u64) -> Option<StoredProduct> {
        let inner = self.inner.read().unwrap();
        inner.items.iter().find(|p| p.id == id).cloned()
    }

    /// One page of products in insertion order.
    pub fn list(&self, skip: usize, limit: usize) -> Vec<StoredProduct> {
        let inner = self.inner.read().unwrap();
        inner.items.iter().skip(skip).take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies the non-`None` fields of `patch` and refreshes
    /// `updated_at`. Returns the new record, or `None` for an unknown id.
    pub fn update(&self, id: u64, patch: ProductPatch) -> Option<StoredProduct> {
        let mut inner = self.inner.write().unwrap();
        let item = inner.items.iter_mut().find(|p| p.id == id)?;
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(price) = patch.price {
            item.price = price;
        }
        if let Some(description) = patch.description {
            item.description = Some(description);
        }
        if let Some(stock) = patch.stock {
            item.stock = stock;
        }
        item.updated_at = Utc::now();
        Some(item.clone())
    }

    pub fn delete(&self, id: u64) -> bool {
        let mut inner = self.inner.write().unwrap();
        let before = inner.items.len();
        inner.items.retain(|p| p.id != id);
        inner.items.len() < before
    }

    /// Case-insensitive substring match over name and description.
    pub fn search(&self, term: &str) -> Vec<StoredProduct> {
        let needle = term.to_lowercase();
        let inner = self.inner.read().unwrap();
        inner
            .items
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: f64) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            price,
            description: None,
            stock: 0,
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = ProductStore::new();
        let first = store.create(input("Widget", 9.99));
        let second = store.create(input("Gadget", 5.0));
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_stamps_both_timestamps() {
        let store = ProductStore::new();
        let product = store.create(input("Widget", 9.99));
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_input_defaults_stock_and_description() {
        let parsed: ProductInput =
            serde_json::from_str(r#"{"name": "Widget", "price": 9.99}"#).unwrap();
        assert_eq!(parsed.stock, 0);
        assert!(parsed.description.is_none());
    }

    #[test]
    fn test_list_pages_in_insertion_order() {
        let store = ProductStore::new();
        for i in 0..5 {
            store.create(input(&format!("p{i}"), i as f64));
        }

        let page = store.list(0, 10);
        let names: Vec<&str> = page.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["p0", "p1", "p2", "p3", "p4"]);

        let window = store.list(1, 2);
        let names: Vec<&str> = window.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["p1", "p2"]);

        assert!(store.list(10, 10).is_empty());
    }

    #[test]
    fn test_update_is_partial() {
        let store = ProductStore::new();
        let created = store.create(input("Widget", 9.99));

        let updated = store
            .update(
                created.id,
                ProductPatch {
                    price: Some(12.5),
                    ..ProductPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.price, 12.5);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn test_update_unknown_id_returns_none() {
        let store = ProductStore::new();
        assert!(store.update(99, ProductPatch::default()).is_none());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = ProductStore::new();
        let a = store.create(input("A", 1.0));
        let b = store.create(input("B", 2.0));

        assert!(store.delete(a.id));
        assert!(!store.delete(a.id));
        assert_eq!(store.len(), 1);
        assert!(store.get(b.id).is_some());
    }

    #[test]
    fn test_search_matches_name_and_description_case_insensitively() {
        let store = ProductStore::new();
        store.create(ProductInput {
            name: "Teclado mecánico".to_string(),
            price: 50.0,
            description: Some("Switches rojos".to_string()),
            stock: 3,
        });
        store.create(input("Mouse", 20.0));

        assert_eq!(store.search("TECLADO").len(), 1);
        assert_eq!(store.search("rojos").len(), 1);
        assert_eq!(store.search("mouse").len(), 1);
        assert!(store.search("monitor").is_empty());
    }
}
