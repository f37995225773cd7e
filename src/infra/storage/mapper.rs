//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use crate::contract::Brand;
use super::entity;

impl From<entity::Model> for Brand {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<&Brand> for entity::ActiveModel {
    fn from(model: &Brand) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            name: Set(model.name.clone()),
        }
    }
}
