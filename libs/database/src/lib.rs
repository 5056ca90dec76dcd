//! Database library providing the MySQL connector used by the service.
//!
//! # Features
//!
//! - `mysql` (default) - MySQL support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mysql;
//!
//! let config = mysql::MySqlConfig::new("mysql://root@localhost:3306/dbproductos");
//! let db = mysql::connect_or_lazy(config).await?;
//! mysql::check_health(&db).await?;
//! ```

pub mod common;

#[cfg(feature = "mysql")]
pub mod mysql;

pub use common::DatabaseError;
