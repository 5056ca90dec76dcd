//! MySQL database connector and utilities
//!
//! Provides connection management and a health probe.

mod config;
mod connector;
mod health;

pub use config::{MySqlConfig, DEFAULT_DATABASE_URL};
pub use connector::{close, connect_or_lazy};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
