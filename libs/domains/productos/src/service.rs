use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductoError, ProductoResult};
use crate::models::{Producto, ProductoInput};
use crate::repository::ProductoRepository;

/// Service layer for Producto business logic
#[derive(Clone)]
pub struct ProductoService<R: ProductoRepository> {
    repository: Arc<R>,
}

impl<R: ProductoRepository> ProductoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a product, returning its new id
    pub async fn create_producto(&self, input: ProductoInput) -> ProductoResult<i32> {
        input
            .validate()
            .map_err(|e| ProductoError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn list_productos(&self) -> ProductoResult<Vec<Producto>> {
        self.repository.list_all().await
    }

    pub async fn get_producto(&self, id: i32) -> ProductoResult<Producto> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductoError::NotFound(id.into()))
    }

    /// Replace every field of an existing product
    pub async fn update_producto(&self, id: i32, input: ProductoInput) -> ProductoResult<()> {
        input
            .validate()
            .map_err(|e| ProductoError::Validation(e.to_string()))?;

        let affected = self.repository.update_by_id(id, input).await?;
        if affected == 0 {
            return Err(ProductoError::NotFound(id.into()));
        }

        Ok(())
    }

    pub async fn delete_producto(&self, id: i32) -> ProductoResult<()> {
        let affected = self.repository.delete_by_id(id).await?;
        if affected == 0 {
            return Err(ProductoError::NotFound(id.into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductoRepository;
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    fn input() -> ProductoInput {
        ProductoInput {
            name: "Widget".to_string(),
            price: 9.99,
            category: "Tools".to_string(),
            description: "A widget".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_passes_input_to_repository() {
        let mut mock_repo = MockProductoRepository::new();
        mock_repo
            .expect_create()
            .with(eq(input()))
            .times(1)
            .returning(|_| Ok(1));

        let service = ProductoService::new(mock_repo);
        assert_eq!(service.create_producto(input()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_repository() {
        let mut mock_repo = MockProductoRepository::new();
        mock_repo.expect_create().never();
        mock_repo.expect_update_by_id().never();

        let service = ProductoService::new(mock_repo);
        let mut bad = input();
        bad.name = String::new();

        let created = service.create_producto(bad.clone()).await;
        assert!(matches!(created, Err(ProductoError::Validation(_))));

        let updated = service.update_producto(1, bad).await;
        assert!(matches!(updated, Err(ProductoError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let mut mock_repo = MockProductoRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(7))
            .returning(|_| Ok(None));

        let service = ProductoService::new(mock_repo);
        let result = service.get_producto(7).await;

        assert!(matches!(result, Err(ProductoError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_zero_affected_rows_is_not_found() {
        let mut mock_repo = MockProductoRepository::new();
        mock_repo.expect_update_by_id().returning(|_, _| Ok(0));
        mock_repo.expect_delete_by_id().returning(|_| Ok(0));

        let service = ProductoService::new(mock_repo);

        assert!(matches!(
            service.update_producto(9, input()).await,
            Err(ProductoError::NotFound(9))
        ));
        assert!(matches!(
            service.delete_producto(9).await,
            Err(ProductoError::NotFound(9))
        ));
    }

    #[tokio::test]
    async fn test_affected_row_is_success() {
        let mut mock_repo = MockProductoRepository::new();
        mock_repo.expect_update_by_id().returning(|_, _| Ok(1));
        mock_repo.expect_delete_by_id().returning(|_| Ok(1));

        let service = ProductoService::new(mock_repo);

        assert!(service.update_producto(1, input()).await.is_ok());
        assert!(service.delete_producto(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_store_error_is_not_swallowed() {
        let mut mock_repo = MockProductoRepository::new();
        mock_repo
            .expect_list_all()
            .returning(|| Err(ProductoError::Store(DbErr::Custom("gone away".to_string()))));

        let service = ProductoService::new(mock_repo);
        let result = service.list_productos().await;

        assert!(matches!(result, Err(ProductoError::Store(_))));
    }
}
