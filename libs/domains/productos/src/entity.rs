use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{Producto, ProductoInput};

pub const TAG: &str = "Productos";

/// Sea-ORM Entity for the `productos` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "productos")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "pr_id")]
    pub id: i32,
    #[sea_orm(column_name = "pr_nombre")]
    pub name: String,
    #[sea_orm(column_name = "pr_precio")]
    pub price: f64,
    #[sea_orm(column_name = "pr_categoria")]
    pub category: String,
    #[sea_orm(column_name = "pr_desc", column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Producto {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            category: model.category,
            description: model.description,
        }
    }
}

// id is left unset so the store assigns it
impl From<ProductoInput> for ActiveModel {
    fn from(input: ProductoInput) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
            category: Set(input.category),
            description: Set(input.description),
        }
    }
}
