use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity,
    error::ProductoResult,
    models::{Producto, ProductoInput},
    repository::ProductoRepository,
};

/// MySQL-backed repository over the `productos` table.
///
/// Each method issues a single statement; store failures surface unchanged
/// as [`ProductoError::Store`](crate::error::ProductoError::Store).
#[derive(Clone)]
pub struct MySqlProductoRepository {
    db: DatabaseConnection,
}

impl MySqlProductoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductoRepository for MySqlProductoRepository {
    async fn create(&self, input: ProductoInput) -> ProductoResult<i32> {
        let active_model: entity::ActiveModel = input.into();

        let result = entity::Entity::insert(active_model).exec(&self.db).await?;

        tracing::info!(producto_id = result.last_insert_id, "Created producto");
        Ok(result.last_insert_id)
    }

    async fn list_all(&self) -> ProductoResult<Vec<Producto>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductoResult<Option<Producto>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(Into::into))
    }

    async fn update_by_id(&self, id: i32, input: ProductoInput) -> ProductoResult<u64> {
        let result = entity::Entity::update_many()
            .set(entity::ActiveModel::from(input))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(producto_id = id, "Updated producto");
        }
        Ok(result.rows_affected)
    }

    async fn delete_by_id(&self, id: i32) -> ProductoResult<u64> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(producto_id = id, "Deleted producto");
        }
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductoError;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn input() -> ProductoInput {
        ProductoInput {
            name: "Widget".to_string(),
            price: 9.99,
            category: "Tools".to_string(),
            description: "A widget".to_string(),
        }
    }

    fn model(id: i32) -> entity::Model {
        entity::Model {
            id,
            name: "Widget".to_string(),
            price: 9.99,
            category: "Tools".to_string(),
            description: "A widget".to_string(),
        }
    }

    fn exec_result(last_insert_id: u64, rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_create_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([exec_result(15, 1)])
            .into_connection();
        let repo = MySqlProductoRepository::new(db.clone());

        let id = repo.create(input()).await.unwrap();
        assert_eq!(id, 15);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("INSERT INTO `productos`"));
        assert!(!sql.contains("`pr_id`"));
    }

    #[tokio::test]
    async fn test_list_all_orders_by_id() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![model(1), model(2)]])
            .into_connection();
        let repo = MySqlProductoRepository::new(db.clone());

        let productos = repo.list_all().await.unwrap();
        assert_eq!(productos.len(), 2);
        assert_eq!(productos[0].id, 1);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        assert!(format!("{:?}", log[0]).contains("ORDER BY `productos`.`pr_id` ASC"));
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = MySqlProductoRepository::new(db);

        assert!(repo.get_by_id(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_is_single_statement_and_reports_rows() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([exec_result(0, 1), exec_result(0, 0)])
            .into_connection();
        let repo = MySqlProductoRepository::new(db.clone());

        assert_eq!(repo.update_by_id(1, input()).await.unwrap(), 1);
        assert_eq!(repo.update_by_id(2, input()).await.unwrap(), 0);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("UPDATE `productos` SET"));
        assert!(sql.contains("`pr_desc`"));
    }

    #[tokio::test]
    async fn test_delete_reports_rows() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([exec_result(0, 1)])
            .into_connection();
        let repo = MySqlProductoRepository::new(db.clone());

        assert_eq!(repo.delete_by_id(3).await.unwrap(), 1);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        assert!(format!("{:?}", log[0]).contains("DELETE FROM `productos`"));
    }

    #[tokio::test]
    async fn test_store_error_is_propagated() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_errors([DbErr::Custom("Table 'productos' doesn't exist".to_string())])
            .into_connection();
        let repo = MySqlProductoRepository::new(db);

        let err = repo.list_all().await.unwrap_err();
        assert!(matches!(err, ProductoError::Store(_)));
        assert!(err.to_string().contains("doesn't exist"));
    }
}
