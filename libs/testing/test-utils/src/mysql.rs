//! MySQL test infrastructure
//!
//! Provides a `TestDatabase` helper that starts a throwaway MySQL container.
//! Tables are derived from sea-orm entities instead of migration files.

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, EntityTrait, Schema};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mysql::Mysql;

/// Test database wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
pub struct TestDatabase {
    #[allow(dead_code)]
    container: ContainerAsync<Mysql>,
    pub connection: DatabaseConnection,
    pub connection_string: String,
}

impl TestDatabase {
    /// Start MySQL and connect to its `test` schema as root.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let container = Mysql::default()
            .with_tag("8.1")
            .start()
            .await
            .expect("Failed to start MySQL container");

        let host_port = container
            .get_host_port_ipv4(3306)
            .await
            .expect("Failed to get host port");

        let connection_string = format!("mysql://root@127.0.0.1:{}/test", host_port);

        let connection = Database::connect(&connection_string)
            .await
            .expect("Failed to connect to test database");

        tracing::info!(port = host_port, "Test database ready (MySQL 8)");

        Self {
            container,
            connection,
            connection_string,
        }
    }

    /// Start MySQL and create the table backing `entity`.
    pub async fn with_table<E: EntityTrait>(entity: E) -> Self {
        let db = Self::new().await;
        db.create_table(entity).await;
        db
    }

    /// Create the table for `entity` from its sea-orm definition.
    pub async fn create_table<E: EntityTrait>(&self, entity: E) {
        let schema = Schema::new(DbBackend::MySql);
        let stmt = DbBackend::MySql.build(&schema.create_table_from_entity(entity));

        self.connection
            .execute_raw(stmt)
            .await
            .expect("Failed to create table");
    }

    /// Get a cloned connection for creating repositories
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
