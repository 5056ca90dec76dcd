//! Productos Domain
//!
//! CRUD over the single `productos` table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MySQL / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_productos::{
//!     handlers,
//!     repository::InMemoryProductoRepository,
//!     service::ProductoService,
//! };
//!
//! let repository = InMemoryProductoRepository::new();
//! let service = ProductoService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mysql;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductoError, ProductoResult};
pub use models::{Mensaje, Producto, ProductoCreado, ProductoInput};
pub use mysql::MySqlProductoRepository;
pub use repository::{InMemoryProductoRepository, ProductoRepository};
pub use service::ProductoService;
