//! Farm endpoints, including the crops planted on a farm.

use crate::{
    api::{
        AppState,
        dto::{CropDto, FarmDto},
    },
    core::farm,
    errors::{EntityKind, Error, Result},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// # POST /farms
pub async fn create_farm(
    State(state): State<AppState>,
    Json(dto): Json<FarmDto>,
) -> Result<(StatusCode, Json<FarmDto>)> {
    let farm = farm::insert_farm(&state.database, dto.name, dto.size).await?;
    Ok((StatusCode::CREATED, Json(farm.into())))
}

/// # GET /farms
pub async fn get_all_farms(State(state): State<AppState>) -> Result<Json<Vec<FarmDto>>> {
    let farms = farm::get_all_farms(&state.database).await?;
    Ok(Json(farms.into_iter().map(FarmDto::from).collect()))
}

/// # GET /farms/:farm_id
pub async fn get_farm_by_id(
    Path(farm_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<FarmDto>> {
    farm::get_farm_by_id(&state.database, farm_id)
        .await?
        .map(|farm| Json(farm.into()))
        .ok_or(Error::NotFound(EntityKind::Farm))
}

/// # POST /farms/:farm_id/crops
/// Plants a crop on the farm named in the path; any `farmId` in the body is ignored.
pub async fn create_crop(
    Path(farm_id): Path<i64>,
    State(state): State<AppState>,
    Json(dto): Json<CropDto>,
) -> Result<(StatusCode, Json<CropDto>)> {
    let crop = farm::insert_crop(&state.database, farm_id, dto.into())
        .await?
        .ok_or(Error::NotFound(EntityKind::Farm))?;
    Ok((StatusCode::CREATED, Json(crop.into())))
}

/// # GET /farms/:farm_id/crops
/// The crop query itself does not know about farms, so existence is checked here.
pub async fn get_crops_by_farm_id(
    Path(farm_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<CropDto>>> {
    if farm::get_farm_by_id(&state.database, farm_id).await?.is_none() {
        return Err(Error::NotFound(EntityKind::Farm));
    }

    let crops = farm::get_crops_by_farm_id(&state.database, farm_id).await?;
    Ok(Json(crops.into_iter().map(CropDto::from).collect()))
}
