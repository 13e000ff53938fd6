//! Crop endpoints - reads, harvest-date search and fertilizer associations.

use crate::{
    api::{
        AppState,
        dto::{CropDto, FertilizerDto, HarvestDateRange},
    },
    core::crop,
    errors::{EntityKind, Error, Result},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

/// Body returned when a fertilizer is attached to a crop.
pub const ASSOCIATION_CREATED: &str = "Fertilizante e plantação associados com sucesso!";

/// # GET /crops
pub async fn get_all_crops(State(state): State<AppState>) -> Result<Json<Vec<CropDto>>> {
    let crops = crop::get_all_crops(&state.database).await?;
    Ok(Json(crops.into_iter().map(CropDto::from).collect()))
}

/// # GET /crops/:crop_id
pub async fn get_crop_by_id(
    Path(crop_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CropDto>> {
    crop::get_crop_by_id(&state.database, crop_id)
        .await?
        .map(|crop| Json(crop.into()))
        .ok_or(Error::NotFound(EntityKind::Crop))
}

/// # GET /crops/search?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn get_by_harvest_date(
    Query(range): Query<HarvestDateRange>,
    State(state): State<AppState>,
) -> Result<Json<Vec<CropDto>>> {
    let crops = crop::get_by_harvest_date(&state.database, range.start, range.end).await?;
    Ok(Json(crops.into_iter().map(CropDto::from).collect()))
}

/// # POST /crops/:crop_id/fertilizers/:fertilizer_id
pub async fn add_fertilizer_to_crop(
    Path((crop_id, fertilizer_id)): Path<(i64, i64)>,
    State(state): State<AppState>,
) -> Result<(StatusCode, &'static str)> {
    crop::add_fertilizer_to_crop(&state.database, crop_id, fertilizer_id).await?;
    Ok((StatusCode::CREATED, ASSOCIATION_CREATED))
}

/// # GET /crops/:crop_id/fertilizers
pub async fn get_fertilizers_by_crop_id(
    Path(crop_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<FertilizerDto>>> {
    let fertilizers = crop::get_fertilizers_by_crop_id(&state.database, crop_id).await?;
    Ok(Json(fertilizers.into_iter().map(FertilizerDto::from).collect()))
}
