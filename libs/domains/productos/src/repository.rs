use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductoResult;
use crate::models::{Producto, ProductoInput};

/// Repository trait for Producto persistence
///
/// Every method maps to exactly one statement against the store. Not-found
/// is not an error here: lookups return `None` and mutations report the
/// number of rows they touched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductoRepository: Send + Sync {
    /// Insert a product and return the id the store assigned
    async fn create(&self, input: ProductoInput) -> ProductoResult<i32>;

    /// All products in ascending id order
    async fn list_all(&self) -> ProductoResult<Vec<Producto>>;

    /// Get a product by id
    async fn get_by_id(&self, id: i32) -> ProductoResult<Option<Producto>>;

    /// Replace all four columns of a product; returns affected rows
    async fn update_by_id(&self, id: i32, input: ProductoInput) -> ProductoResult<u64>;

    /// Delete a product; returns affected rows
    async fn delete_by_id(&self, id: i32) -> ProductoResult<u64>;
}

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<i32, Producto>,
    last_id: i32,
}

/// In-memory implementation of ProductoRepository (for development/testing)
///
/// Ids are handed out from 1 upward and never reused, like AUTO_INCREMENT.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductoRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductoRepository for InMemoryProductoRepository {
    async fn create(&self, input: ProductoInput) -> ProductoResult<i32> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let id = store.last_id;
        store.rows.insert(id, input.into_producto(id));

        tracing::info!(producto_id = id, "Created producto");
        Ok(id)
    }

    async fn list_all(&self) -> ProductoResult<Vec<Producto>> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductoResult<Option<Producto>> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn update_by_id(&self, id: i32, input: ProductoInput) -> ProductoResult<u64> {
        let mut store = self.store.write().await;

        match store.rows.get_mut(&id) {
            Some(row) => {
                *row = input.into_producto(id);
                tracing::info!(producto_id = id, "Updated producto");
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: i32) -> ProductoResult<u64> {
        let mut store = self.store.write().await;

        if store.rows.remove(&id).is_some() {
            tracing::info!(producto_id = id, "Deleted producto");
            Ok(1)
        } else {
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> ProductoInput {
        ProductoInput {
            name: name.to_string(),
            price: 9.99,
            category: "Tools".to_string(),
            description: "A widget".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_producto() {
        let repo = InMemoryProductoRepository::new();

        let id = repo.create(input("Widget")).await.unwrap();
        assert_eq!(id, 1);

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Widget");
        assert_eq!(fetched.price, 9.99);
    }

    #[tokio::test]
    async fn test_list_all_in_id_order() {
        let repo = InMemoryProductoRepository::new();
        assert!(repo.list_all().await.unwrap().is_empty());

        for name in ["a", "b", "c"] {
            repo.create(input(name)).await.unwrap();
        }

        let ids: Vec<i32> = repo.list_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_replaces_every_field() {
        let repo = InMemoryProductoRepository::new();
        let id = repo.create(input("Widget")).await.unwrap();

        let replacement = ProductoInput {
            name: "Gadget".to_string(),
            price: 1.5,
            category: "Toys".to_string(),
            description: "A gadget".to_string(),
        };
        assert_eq!(repo.update_by_id(id, replacement.clone()).await.unwrap(), 1);

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, replacement.into_producto(id));
    }

    #[tokio::test]
    async fn test_missing_rows_report_zero() {
        let repo = InMemoryProductoRepository::new();

        assert_eq!(repo.update_by_id(5, input("x")).await.unwrap(), 0);
        assert_eq!(repo.delete_by_id(5).await.unwrap(), 0);
        assert!(repo.get_by_id(5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryProductoRepository::new();
        let first = repo.create(input("a")).await.unwrap();

        assert_eq!(repo.delete_by_id(first).await.unwrap(), 1);
        let second = repo.create(input("b")).await.unwrap();

        assert_eq!(second, first + 1);
    }
}
