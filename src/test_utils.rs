//! Shared test utilities for Agrix.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{crop::NewCrop, farm, fertilizer},
    entities::{self, CropFertilizer, crop_fertilizer},
    errors::{EntityKind, Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test farm with sensible defaults.
///
/// # Defaults
/// * `size`: 100.0
pub async fn create_test_farm(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::farm::Model> {
    farm::insert_farm(db, name.to_string(), 100.0).await
}

/// Creates an undated test crop on the given farm.
///
/// # Defaults
/// * `planted_area`: 10.0
pub async fn create_test_crop(
    db: &DatabaseConnection,
    farm_id: i64,
    name: &str,
) -> Result<entities::crop::Model> {
    insert_or_fail(db, farm_id, NewCrop::named(name, 10.0)).await
}

/// Creates a test crop with a harvest date, for date-range searches.
pub async fn create_harvested_crop(
    db: &DatabaseConnection,
    farm_id: i64,
    name: &str,
    harvest_date: NaiveDate,
) -> Result<entities::crop::Model> {
    let new_crop = NewCrop {
        harvest_date: Some(harvest_date),
        ..NewCrop::named(name, 10.0)
    };
    insert_or_fail(db, farm_id, new_crop).await
}

async fn insert_or_fail(
    db: &DatabaseConnection,
    farm_id: i64,
    new_crop: NewCrop,
) -> Result<entities::crop::Model> {
    farm::insert_crop(db, farm_id, new_crop)
        .await?
        .ok_or(Error::NotFound(EntityKind::Farm))
}

/// Creates a test fertilizer with sensible defaults.
///
/// # Defaults
/// * `brand`: "Test Brand"
/// * `composition`: "NPK 10-10-10"
pub async fn create_test_fertilizer(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::fertilizer::Model> {
    fertilizer::insert_fertilizer(
        db,
        name.to_string(),
        "Test Brand".to_string(),
        "NPK 10-10-10".to_string(),
    )
    .await
}

/// Number of crop/fertilizer association rows for a crop.
pub async fn count_associations(db: &DatabaseConnection, crop_id: i64) -> Result<u64> {
    CropFertilizer::find()
        .filter(crop_fertilizer::Column::CropId.eq(crop_id))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Sets up a test environment with one farm.
/// Returns (db, farm) for common test scenarios.
pub async fn setup_with_farm() -> Result<(DatabaseConnection, entities::farm::Model)> {
    let db = setup_test_db().await?;
    let farm = create_test_farm(&db, "Test Farm").await?;
    Ok((db, farm))
}

/// Sets up a test environment with a farm and one crop planted on it.
/// Returns (db, farm, crop) for crop-related tests.
pub async fn setup_with_crop() -> Result<(
    DatabaseConnection,
    entities::farm::Model,
    entities::crop::Model,
)> {
    let (db, farm) = setup_with_farm().await?;
    let crop = create_test_crop(&db, farm.id, "Test Crop").await?;
    Ok((db, farm, crop))
}
