use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const MSG_CREADO: &str = "Producto creado correctamente";
pub const MSG_ACTUALIZADO: &str = "Producto actualizado correctamente";
pub const MSG_ELIMINADO: &str = "Producto eliminado correctamente";
pub const MSG_NO_ENCONTRADO: &str = "Producto no encontrado";

fn validate_finite_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() {
        return Err(ValidationError::new("finite"));
    }
    Ok(())
}

/// A product row as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "pr_id": 1,
    "pr_nombre": "Widget",
    "pr_precio": 9.99,
    "pr_categoria": "Tools",
    "pr_desc": "A widget"
}))]
pub struct Producto {
    /// Store-assigned identifier
    #[serde(rename = "pr_id")]
    pub id: i32,
    #[serde(rename = "pr_nombre")]
    pub name: String,
    #[serde(rename = "pr_precio")]
    pub price: f64,
    #[serde(rename = "pr_categoria")]
    pub category: String,
    #[serde(rename = "pr_desc")]
    pub description: String,
}

/// Body of create and update requests. Every field is required; an update
/// replaces all four columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[schema(example = json!({
    "pr_nombre": "Widget",
    "pr_precio": 9.99,
    "pr_categoria": "Tools",
    "pr_desc": "A widget"
}))]
pub struct ProductoInput {
    #[serde(rename = "pr_nombre")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "pr_precio")]
    #[validate(custom(function = "validate_finite_price"))]
    pub price: f64,
    #[serde(rename = "pr_categoria")]
    pub category: String,
    #[serde(rename = "pr_desc")]
    pub description: String,
}

impl ProductoInput {
    pub fn into_producto(self, id: i32) -> Producto {
        Producto {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            description: self.description,
        }
    }
}

/// Acknowledgement returned by create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"mensaje": "Producto creado correctamente", "id": 1}))]
pub struct ProductoCreado {
    pub mensaje: String,
    pub id: i32,
}

impl ProductoCreado {
    pub fn new(id: i32) -> Self {
        Self {
            mensaje: MSG_CREADO.to_string(),
            id,
        }
    }
}

/// Plain message body used by update, delete and not-found responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"mensaje": "Producto actualizado correctamente"}))]
pub struct Mensaje {
    pub mensaje: String,
}

impl Mensaje {
    pub fn new(mensaje: impl Into<String>) -> Self {
        Self {
            mensaje: mensaje.into(),
        }
    }
}
