//! Fertilizer endpoints.

use crate::{
    api::{AppState, dto::FertilizerDto},
    core::fertilizer,
    errors::{EntityKind, Error, Result},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// # POST /fertilizers
pub async fn create_fertilizer(
    State(state): State<AppState>,
    Json(dto): Json<FertilizerDto>,
) -> Result<(StatusCode, Json<FertilizerDto>)> {
    let fertilizer =
        fertilizer::insert_fertilizer(&state.database, dto.name, dto.brand, dto.composition)
            .await?;
    Ok((StatusCode::CREATED, Json(fertilizer.into())))
}

/// # GET /fertilizers
pub async fn get_all_fertilizers(
    State(state): State<AppState>,
) -> Result<Json<Vec<FertilizerDto>>> {
    let fertilizers = fertilizer::get_all_fertilizers(&state.database).await?;
    Ok(Json(fertilizers.into_iter().map(FertilizerDto::from).collect()))
}

/// # GET /fertilizers/:fertilizer_id
pub async fn get_fertilizer_by_id(
    Path(fertilizer_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<FertilizerDto>> {
    fertilizer::get_fertilizer_by_id(&state.database, fertilizer_id)
        .await?
        .map(|fertilizer| Json(fertilizer.into()))
        .ok_or(Error::NotFound(EntityKind::Fertilizer))
}
