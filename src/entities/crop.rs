//! Crop entity - A planting record tied to exactly one farm.
//!
//! Each crop has a name, planted area and optional planting and harvest dates.
//! Fertilizers applied to a crop live in the `crop_fertilizer` join table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Crop database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "crop")]
pub struct Model {
    /// Store-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the crop (e.g., "Corn")
    pub name: String,
    /// Area of the farm used by this crop
    pub planted_area: f64,
    /// Day the crop was planted, if recorded
    pub planted_date: Option<Date>,
    /// Day the crop is (or was) harvested, if recorded
    pub harvest_date: Option<Date>,
    /// ID of the farm this crop belongs to
    pub farm_id: i64,
}

/// Defines relationships between Crop and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each crop belongs to one farm
    #[sea_orm(
        belongs_to = "super::farm::Entity",
        from = "Column::FarmId",
        to = "super::farm::Column::Id"
    )]
    Farm,
    /// One crop has many fertilizer associations
    #[sea_orm(has_many = "super::crop_fertilizer::Entity")]
    CropFertilizer,
}

impl Related<super::farm::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farm.def()
    }
}

impl Related<super::crop_fertilizer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CropFertilizer.def()
    }
}

impl Related<super::fertilizer::Entity> for Entity {
    fn to() -> RelationDef {
        super::crop_fertilizer::Relation::Fertilizer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::crop_fertilizer::Relation::Crop.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
