//! Farm entity - A parcel of land with a name and an area.
//!
//! Crops point at their farm through `crop.farm_id`; the farm itself stores no
//! crop list.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Farm database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "farm")]
pub struct Model {
    /// Store-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the farm (e.g., "Green Acres")
    pub name: String,
    /// Total area of the farm
    pub size: f64,
}

/// Defines relationships between Farm and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One farm has many crops
    #[sea_orm(has_many = "super::crop::Entity")]
    Crops,
}

impl Related<super::crop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crops.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
