use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::EntityTrait;
use uuid::Uuid;

use crate::entities::hotel;
use crate::error::{AppError, AppResult};
use crate::AppState;

/// List the full hotel catalog. No pagination, no server-side filtering;
/// the client narrows by search text, price and rating on its own.
pub async fn list_hotels(State(state): State<AppState>) -> AppResult<Json<Vec<hotel::Model>>> {
    let hotels = hotel::Entity::find().all(&state.db).await?;
    Ok(Json(hotels))
}

/// Get a single hotel by id
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
) -> AppResult<Json<hotel::Model>> {
    let hotel = hotel::Entity::find_by_id(hotel_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;

    Ok(Json(hotel))
}
