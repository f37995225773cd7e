//! SeaORM entity for the brands table

use sea_orm::entity::prelude::*;

/// Brands table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "brands")]
pub struct Model {
    /// Caller-assigned identifier (primary key, not auto-generated)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    /// Brand name
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
