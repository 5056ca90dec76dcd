//! Productos API routes

use axum::Router;
use domain_productos::{MySqlProductoRepository, ProductoService, handlers};

use crate::state::AppState;

/// Create productos router
pub fn router(state: &AppState) -> Router {
    let repository = MySqlProductoRepository::new(state.db.clone());
    let service = ProductoService::new(repository);
    handlers::router(service)
}
