//! Farm business logic - Handles farm records and the crops planted on them.
//!
//! Crops can only be created through a farm, which is how the crop's farm reference is
//! guaranteed to point at an existing record.

use crate::{
    core::crop::NewCrop,
    entities::{Crop, Farm, crop, farm},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{debug, instrument};

/// Persists a new farm and returns it with its assigned ID.
pub async fn insert_farm(db: &DatabaseConnection, name: String, size: f64) -> Result<farm::Model> {
    let farm = farm::ActiveModel {
        name: Set(name),
        size: Set(size),
        ..Default::default()
    };

    let result = farm.insert(db).await?;
    debug!(farm_id = result.id, "Inserted farm");
    Ok(result)
}

/// Finds a farm by its unique ID.
pub async fn get_farm_by_id(db: &DatabaseConnection, farm_id: i64) -> Result<Option<farm::Model>> {
    Farm::find_by_id(farm_id).one(db).await.map_err(Into::into)
}

/// Retrieves every farm, in insertion order.
pub async fn get_all_farms(db: &DatabaseConnection) -> Result<Vec<farm::Model>> {
    Farm::find()
        .order_by_asc(farm::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Plants a new crop on an existing farm.
///
/// Returns `Ok(None)` without touching the database if the farm does not exist, so the
/// caller decides how to report the missing farm.
#[instrument(skip(db, new_crop))]
pub async fn insert_crop(
    db: &DatabaseConnection,
    farm_id: i64,
    new_crop: NewCrop,
) -> Result<Option<crop::Model>> {
    let Some(farm) = get_farm_by_id(db, farm_id).await? else {
        debug!("Farm not found, crop not inserted");
        return Ok(None);
    };

    let crop = crop::ActiveModel {
        name: Set(new_crop.name),
        planted_area: Set(new_crop.planted_area),
        planted_date: Set(new_crop.planted_date),
        harvest_date: Set(new_crop.harvest_date),
        farm_id: Set(farm.id),
        ..Default::default()
    };

    let result = crop.insert(db).await?;
    debug!(crop_id = result.id, "Inserted crop");
    Ok(Some(result))
}

/// Retrieves all crops planted on the given farm.
///
/// This does not check that the farm exists: an unknown ID simply yields an empty list.
pub async fn get_crops_by_farm_id(
    db: &DatabaseConnection,
    farm_id: i64,
) -> Result<Vec<crop::Model>> {
    Crop::find()
        .filter(crop::Column::FarmId.eq(farm_id))
        .order_by_asc(crop::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_insert_and_get_farm() -> Result<()> {
        let db = setup_test_db().await?;

        let farm = insert_farm(&db, "Green Acres".to_string(), 120.5).await?;
        assert_eq!(farm.id, 1);
        assert_eq!(farm.name, "Green Acres");
        assert_eq!(farm.size, 120.5);

        let found = get_farm_by_id(&db, farm.id).await?;
        assert_eq!(found, Some(farm));

        let not_found = get_farm_by_id(&db, 999).await?;
        assert!(not_found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_farms() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(get_all_farms(&db).await?.is_empty());

        let first = create_test_farm(&db, "North").await?;
        let second = create_test_farm(&db, "South").await?;

        let farms = get_all_farms(&db).await?;
        assert_eq!(farms, vec![first, second]);

        Ok(())
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() -> Result<()> {
        let db = setup_test_db().await?;

        let first = create_test_farm(&db, "One").await?;
        let second = create_test_farm(&db, "Two").await?;
        assert!(second.id > first.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_crop_sets_farm_reference() -> Result<()> {
        let (db, farm) = setup_with_farm().await?;

        let new_crop = NewCrop {
            name: "Corn".to_string(),
            planted_area: 30.0,
            planted_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            harvest_date: NaiveDate::from_ymd_opt(2024, 9, 15),
        };
        let crop = insert_crop(&db, farm.id, new_crop).await?.unwrap();

        assert_eq!(crop.name, "Corn");
        assert_eq!(crop.planted_area, 30.0);
        assert_eq!(crop.farm_id, farm.id);
        assert_eq!(crop.planted_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(crop.harvest_date, NaiveDate::from_ymd_opt(2024, 9, 15));

        let crops = get_crops_by_farm_id(&db, farm.id).await?;
        assert_eq!(crops, vec![crop]);

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_crop_unknown_farm_persists_nothing() -> Result<()> {
        let db = setup_test_db().await?;

        let result = insert_crop(&db, 42, NewCrop::named("Rice", 5.0)).await?;
        assert!(result.is_none());

        let crops = crate::core::crop::get_all_crops(&db).await?;
        assert!(crops.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_crops_by_farm_id_only_returns_that_farm() -> Result<()> {
        let db = setup_test_db().await?;
        let north = create_test_farm(&db, "North").await?;
        let south = create_test_farm(&db, "South").await?;

        let wheat = create_test_crop(&db, north.id, "Wheat").await?;
        let barley = create_test_crop(&db, north.id, "Barley").await?;
        let soy = create_test_crop(&db, south.id, "Soy").await?;

        assert_eq!(get_crops_by_farm_id(&db, north.id).await?, vec![wheat, barley]);
        assert_eq!(get_crops_by_farm_id(&db, south.id).await?, vec![soy]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_crops_by_unknown_farm_is_empty() -> Result<()> {
        let db = setup_test_db().await?;

        let crops = get_crops_by_farm_id(&db, 999).await?;
        assert!(crops.is_empty());

        Ok(())
    }
}
