use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Check MySQL database health
///
/// Executes `SELECT 1` to verify the connection is usable. Backs the
/// `/ready` probe.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running MySQL health check");

    let stmt = Statement::from_string(DatabaseBackend::MySql, "SELECT 1".to_owned());
    db.query_one_raw(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("MySQL health check failed: {}", e))
    })?;

    debug!("MySQL health check passed");
    Ok(())
}
