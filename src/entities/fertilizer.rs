//! Fertilizer entity - A named product with a brand and composition.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fertilizer database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fertilizer")]
pub struct Model {
    /// Store-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Product name
    pub name: String,
    /// Manufacturer or brand
    pub brand: String,
    /// Free-form composition description (e.g., "NPK 10-10-10")
    pub composition: String,
}

/// Defines relationships between Fertilizer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One fertilizer has many crop associations
    #[sea_orm(has_many = "super::crop_fertilizer::Entity")]
    CropFertilizer,
}

impl Related<super::crop_fertilizer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CropFertilizer.def()
    }
}

impl Related<super::crop::Entity> for Entity {
    fn to() -> RelationDef {
        super::crop_fertilizer::Relation::Crop.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::crop_fertilizer::Relation::Fertilizer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
