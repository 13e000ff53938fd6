//! Join table between crops and fertilizers.
//!
//! Rows carry their own surrogate key and the (crop, fertilizer) pair is not unique:
//! associating the same pair twice stores two rows.

use sea_orm::entity::prelude::*;

/// Crop/fertilizer association row
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "crop_fertilizer")]
pub struct Model {
    /// Row ID
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Associated crop
    pub crop_id: i64,
    /// Associated fertilizer
    pub fertilizer_id: i64,
}

/// Both sides of the association
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The crop side
    #[sea_orm(
        belongs_to = "super::crop::Entity",
        from = "Column::CropId",
        to = "super::crop::Column::Id"
    )]
    Crop,
    /// The fertilizer side
    #[sea_orm(
        belongs_to = "super::fertilizer::Entity",
        from = "Column::FertilizerId",
        to = "super::fertilizer::Column::Id"
    )]
    Fertilizer,
}

impl Related<super::crop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crop.def()
    }
}

impl Related<super::fertilizer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fertilizer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
