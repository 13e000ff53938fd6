//! Crop business logic - Crop lookups, harvest-date search and fertilizer associations.
//!
//! Fertilizers are attached to a crop by inserting a `crop_fertilizer` row; the
//! association is only ever mutated from the crop side.

use crate::{
    entities::{Crop, Fertilizer, crop, crop_fertilizer, fertilizer},
    errors::{EntityKind, Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

/// Fields a client supplies when planting a crop. The ID and farm are assigned elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCrop {
    /// Name of the crop
    pub name: String,
    /// Area of the farm used by this crop
    pub planted_area: f64,
    /// Day the crop was planted
    pub planted_date: Option<NaiveDate>,
    /// Day the crop is harvested
    pub harvest_date: Option<NaiveDate>,
}

impl NewCrop {
    /// Builds an undated crop.
    #[must_use]
    pub fn named(name: &str, planted_area: f64) -> Self {
        Self {
            name: name.to_string(),
            planted_area,
            planted_date: None,
            harvest_date: None,
        }
    }
}

/// Finds a crop by its unique ID.
pub async fn get_crop_by_id(db: &DatabaseConnection, crop_id: i64) -> Result<Option<crop::Model>> {
    Crop::find_by_id(crop_id).one(db).await.map_err(Into::into)
}

/// Retrieves every crop, in insertion order.
pub async fn get_all_crops(db: &DatabaseConnection) -> Result<Vec<crop::Model>> {
    Crop::find()
        .order_by_asc(crop::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves crops whose harvest date lies in `[start, end]`, both ends inclusive.
///
/// Crops without a harvest date never match, and `start > end` matches nothing.
pub async fn get_by_harvest_date(
    db: &DatabaseConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<crop::Model>> {
    Crop::find()
        .filter(crop::Column::HarvestDate.between(start, end))
        .order_by_asc(crop::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Associates a fertilizer with a crop.
///
/// Both lookups and the insert run in one transaction. The crop is checked first, so a
/// request naming two missing records reports the crop. If any step fails the
/// transaction is dropped uncommitted and nothing is written.
///
/// Associating the same pair twice stores a second row, and the fertilizer is then listed
/// twice for that crop.
#[instrument(skip(db))]
pub async fn add_fertilizer_to_crop(
    db: &DatabaseConnection,
    crop_id: i64,
    fertilizer_id: i64,
) -> Result<()> {
    let txn = db.begin().await?;

    let crop = Crop::find_by_id(crop_id)
        .one(&txn)
        .await?
        .ok_or(Error::NotFound(EntityKind::Crop))?;

    let fertilizer = Fertilizer::find_by_id(fertilizer_id)
        .one(&txn)
        .await?
        .ok_or(Error::NotFound(EntityKind::Fertilizer))?;

    let association = crop_fertilizer::ActiveModel {
        crop_id: Set(crop.id),
        fertilizer_id: Set(fertilizer.id),
        ..Default::default()
    };
    association.insert(&txn).await?;

    txn.commit().await?;
    info!("Fertilizer associated with crop");
    Ok(())
}

/// Retrieves the fertilizers applied to a crop.
///
/// A missing crop yields [`Error::NotFound`] with [`EntityKind::Crop`].
pub async fn get_fertilizers_by_crop_id(
    db: &DatabaseConnection,
    crop_id: i64,
) -> Result<Vec<fertilizer::Model>> {
    let crop = get_crop_by_id(db, crop_id)
        .await?
        .ok_or(Error::NotFound(EntityKind::Crop))?;

    crop.find_related(Fertilizer)
        .order_by_asc(fertilizer::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
