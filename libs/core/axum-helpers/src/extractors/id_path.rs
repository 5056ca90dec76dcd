//! Integer path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use std::num::IntErrorKind;

/// Extractor for auto-increment integer ids in the path.
///
/// Rejects anything that is not an integer with a 400 `INVALID_ID`
/// response instead of axum's plain-text rejection. Integers too large for
/// `i64` saturate, so handlers still see them as ids that match no row.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_item(IdPath(id): IdPath) -> String {
///     format!("Item {}", id)
/// }
///
/// let app: Router = Router::new().route("/items/{id}", get(get_item));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.trim().parse::<i64>() {
            Ok(id) => Ok(IdPath(id)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(IdPath(i64::MAX)),
                IntErrorKind::NegOverflow => Ok(IdPath(i64::MIN)),
                _ => Err(AppError::InvalidId(raw).into_response()),
            },
        }
    }
}
