use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::booking::{self, BookingStatus};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub hotel_id: Uuid,
    pub hotel_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub total_price: f64,
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct CreateBookingResponse {
    pub message: String,
    pub booking: booking::Model,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsQuery {
    pub user_id: Option<Uuid>,
}

/// Create a booking. The total price is persisted as submitted; neither
/// hotel availability nor date overlap with existing bookings is checked,
/// so two concurrent requests for the same room and dates both succeed.
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<CreateBookingResponse>)> {
    // The token subject must match the booking owner
    if payload.user_id != claims.sub {
        return Err(AppError::Forbidden(
            "You can only create bookings for your own account".to_string(),
        ));
    }

    if payload.guests < 1 {
        return Err(AppError::BadRequest(
            "Must book for at least 1 guest".to_string(),
        ));
    }

    if payload.check_out <= payload.check_in {
        return Err(AppError::BadRequest(
            "Check-out must be after check-in".to_string(),
        ));
    }

    let now = Utc::now();
    let new_booking = booking::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(payload.user_id),
        hotel_id: Set(payload.hotel_id),
        hotel_name: Set(payload.hotel_name.clone()),
        check_in: Set(payload.check_in),
        check_out: Set(payload.check_out),
        guests: Set(payload.guests),
        total_price: Set(payload.total_price),
        status: Set(BookingStatus::Confirmed),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };

    let booking = new_booking.insert(&state.db).await?;
    tracing::info!(
        booking_id = %booking.id,
        hotel = %booking.hotel_name,
        "New booking created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            message: "Booking successful".to_string(),
            booking,
        }),
    ))
}

/// List a user's bookings, in natural storage order
pub async fn list_user_bookings(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<BookingsQuery>,
) -> AppResult<Json<Vec<booking::Model>>> {
    let user_id = query
        .user_id
        .ok_or_else(|| AppError::BadRequest("User ID is required".to_string()))?;

    if user_id != claims.sub {
        return Err(AppError::Forbidden(
            "You can only view your own bookings".to_string(),
        ));
    }

    let bookings = booking::Entity::find()
        .filter(booking::Column::UserId.eq(user_id))
        .all(&state.db)
        .await?;

    Ok(Json(bookings))
}
