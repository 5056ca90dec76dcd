use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use axum_helpers::errors::{ErrorCode, error_response};
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::{MSG_NO_ENCONTRADO, Mensaje};

#[derive(Debug, Error)]
pub enum ProductoError {
    #[error("Producto not found: {0}")]
    NotFound(i64),

    #[error("Store error: {0}")]
    Store(#[from] DbErr),

    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type ProductoResult<T> = Result<T, ProductoError>;

/// Narrow a path id to the `pr_id` column type. Ids outside `i32` match no row.
pub fn column_id(id: i64) -> ProductoResult<i32> {
    i32::try_from(id).map_err(|_| ProductoError::NotFound(id))
}

impl IntoResponse for ProductoError {
    fn into_response(self) -> Response {
        match self {
            // Not-found answers with the bare `{mensaje}` body.
            ProductoError::NotFound(id) => {
                tracing::info!(producto_id = id, "Producto not found");
                (StatusCode::NOT_FOUND, Json(Mensaje::new(MSG_NO_ENCONTRADO))).into_response()
            }
            ProductoError::Validation(msg) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    msg
                );
                error_response(StatusCode::BAD_REQUEST, msg, ErrorCode::ValidationError)
            }
            ProductoError::Store(e) => AppError::Database(e).into_response(),
        }
    }
}
