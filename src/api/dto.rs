//! Transfer objects - the JSON shapes clients send and receive.
//!
//! These are decoupled from the entity models: a crop carries a bare `farmId` rather
//! than a nested farm, and IDs sent by clients on create are ignored.

use crate::{core::crop::NewCrop, entities};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Farm as seen by API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmDto {
    /// Store-assigned ID, ignored on input
    pub id: Option<i64>,
    /// Farm name
    pub name: String,
    /// Total area
    pub size: f64,
}

impl From<entities::farm::Model> for FarmDto {
    fn from(farm: entities::farm::Model) -> Self {
        Self {
            id: Some(farm.id),
            name: farm.name,
            size: farm.size,
        }
    }
}

/// Crop as seen by API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDto {
    /// Store-assigned ID, ignored on input
    pub id: Option<i64>,
    /// Crop name
    pub name: String,
    /// Area used by the crop
    pub planted_area: f64,
    /// Planting day, `YYYY-MM-DD`
    pub planted_date: Option<NaiveDate>,
    /// Harvest day, `YYYY-MM-DD`
    pub harvest_date: Option<NaiveDate>,
    /// Owning farm, ignored on input (taken from the path)
    pub farm_id: Option<i64>,
}

impl From<entities::crop::Model> for CropDto {
    fn from(crop: entities::crop::Model) -> Self {
        Self {
            id: Some(crop.id),
            name: crop.name,
            planted_area: crop.planted_area,
            planted_date: crop.planted_date,
            harvest_date: crop.harvest_date,
            farm_id: Some(crop.farm_id),
        }
    }
}

impl From<CropDto> for NewCrop {
    fn from(dto: CropDto) -> Self {
        Self {
            name: dto.name,
            planted_area: dto.planted_area,
            planted_date: dto.planted_date,
            harvest_date: dto.harvest_date,
        }
    }
}

/// Fertilizer as seen by API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerDto {
    /// Store-assigned ID, ignored on input
    pub id: Option<i64>,
    /// Product name
    pub name: String,
    /// Manufacturer or brand
    pub brand: String,
    /// Composition description
    pub composition: String,
}

impl From<entities::fertilizer::Model> for FertilizerDto {
    fn from(fertilizer: entities::fertilizer::Model) -> Self {
        Self {
            id: Some(fertilizer.id),
            name: fertilizer.name,
            brand: fertilizer.brand,
            composition: fertilizer.composition,
        }
    }
}

/// Query string of `GET /crops/search`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HarvestDateRange {
    /// First harvest day included
    pub start: NaiveDate,
    /// Last harvest day included
    pub end: NaiveDate,
}
