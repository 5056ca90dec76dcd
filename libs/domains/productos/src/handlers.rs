use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity::TAG;
use crate::error::{ProductoResult, column_id};
use crate::models::{
    MSG_ACTUALIZADO, MSG_ELIMINADO, Mensaje, Producto, ProductoCreado, ProductoInput,
};
use crate::repository::ProductoRepository;
use crate::service::ProductoService;

/// OpenAPI documentation for the Productos API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_productos,
        create_producto,
        get_producto,
        update_producto,
        delete_producto,
    ),
    components(
        schemas(Producto, ProductoInput, ProductoCreado, Mensaje),
        responses(
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Gestión de productos")
    )
)]
pub struct ApiDoc;

/// Create the productos router with all HTTP endpoints
pub fn router<R: ProductoRepository + 'static>(service: ProductoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_productos).post(create_producto))
        .route(
            "/{id}",
            get(get_producto).put(update_producto).delete(delete_producto),
        )
        .with_state(shared_service)
}

/// List every product
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Lista de productos", body = Vec<Producto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_productos<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
) -> ProductoResult<Json<Vec<Producto>>> {
    let productos = service.list_productos().await?;
    Ok(Json(productos))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = ProductoInput,
    responses(
        (status = 201, description = "Producto creado", body = ProductoCreado),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_producto<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductoInput>,
) -> ProductoResult<impl IntoResponse> {
    let id = service.create_producto(input).await?;
    Ok((StatusCode::CREATED, Json(ProductoCreado::new(id))))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "ID del producto")
    ),
    responses(
        (status = 200, description = "Producto encontrado", body = Producto),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Producto no encontrado", body = Mensaje),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_producto<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    IdPath(id): IdPath,
) -> ProductoResult<Json<Producto>> {
    let producto = service.get_producto(column_id(id)?).await?;
    Ok(Json(producto))
}

/// Replace every field of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "ID del producto")
    ),
    request_body = ProductoInput,
    responses(
        (status = 200, description = "Producto actualizado", body = Mensaje),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, description = "Producto no encontrado", body = Mensaje),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_producto<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ProductoInput>,
) -> ProductoResult<Json<Mensaje>> {
    service.update_producto(column_id(id)?, input).await?;
    Ok(Json(Mensaje::new(MSG_ACTUALIZADO)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "ID del producto")
    ),
    responses(
        (status = 200, description = "Producto eliminado", body = Mensaje),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Producto no encontrado", body = Mensaje),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_producto<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    IdPath(id): IdPath,
) -> ProductoResult<Json<Mensaje>> {
    service.delete_producto(column_id(id)?).await?;
    Ok(Json(Mensaje::new(MSG_ELIMINADO)))
}
