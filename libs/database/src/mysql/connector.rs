use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::{error, info, warn};

use super::MySqlConfig;

/// Connect once at startup without letting a database outage stop the server.
///
/// An eager connection is attempted first. If it fails the error is logged and
/// a lazy handle is returned instead: the pool opens connections on first use,
/// so store-backed requests fail individually until the database is reachable.
///
/// Only configuration problems that prevent building any handle at all (for
/// example an unparseable URL) are returned as errors.
pub async fn connect_or_lazy(config: MySqlConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = config.into_connect_options();

    match Database::connect(options.clone()).await {
        Ok(db) => {
            info!("Successfully connected to MySQL database");
            Ok(db)
        }
        Err(e) => {
            error!("Error connecting to MySQL: {}", e);
            warn!("Serving without a live database connection; requests will fail until it recovers");
            options.connect_lazy(true);
            Database::connect(options).await
        }
    }
}

/// Close the connection pool, logging instead of failing on error.
pub async fn close(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => info!("MySQL connection closed"),
        Err(e) => warn!("Error while closing MySQL connection: {}", e),
    }
}
