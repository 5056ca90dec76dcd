//! OpenAPI documentation configuration

use core_config::server::ServerConfig;
use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::openapi::server::Server;

/// Combined OpenAPI documentation for Productos API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Productos",
        version = "1.0.0",
        description = "API para gestionar productos"
    ),
    nest(
        (path = "/productos", api = domain_productos::handlers::ApiDoc)
    ),
    tags(
        (name = "Productos", description = "Gestión de productos")
    )
)]
pub struct ApiDoc;

/// The served document, advertising the local server on the bound port.
pub fn document(server: &ServerConfig) -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    let mut dev = Server::new(format!("http://localhost:{}", server.port));
    dev.description = Some("Servidor de desarrollo".to_string());
    doc.servers = Some(vec![dev]);
    doc
}
