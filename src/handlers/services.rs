use axum::Json;
use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::data::services::{Car, CityGuideEntry, Translator, CARS, CITY_GUIDE, TRANSLATORS};

/// Health check (used by the hosting platform)
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "HotlLink API is running" }))
}

pub async fn list_cars() -> Json<&'static [Car]> {
    Json(CARS)
}

pub async fn list_translators() -> Json<&'static [Translator]> {
    Json(TRANSLATORS)
}

pub async fn city_guide() -> Json<&'static [CityGuideEntry]> {
    Json(CITY_GUIDE)
}

#[derive(Debug, Deserialize)]
pub struct TripPlannerRequest {
    pub destination: Option<String>,
    pub dates: Option<Value>,
    pub preferences: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Accept a trip-planner request. Nothing is persisted; the request is
/// logged and acknowledged with a throwaway plan id.
pub async fn trip_planner(Json(payload): Json<TripPlannerRequest>) -> Json<Value> {
    tracing::info!(
        destination = payload.destination.as_deref().unwrap_or("-"),
        "Trip planner request"
    );

    let plan_id: u32 = rand::thread_rng().gen_range(0..1000);
    Json(json!({ "message": "Trip plan request received!", "planId": plan_id }))
}

/// Accept a contact-form submission. Logged, never stored.
pub async fn contact(Json(payload): Json<ContactRequest>) -> Json<Value> {
    tracing::info!(
        name = payload.name.as_deref().unwrap_or("-"),
        email = payload.email.as_deref().unwrap_or("-"),
        message = payload.message.as_deref().unwrap_or("-"),
        "Contact form submission"
    );

    Json(json!({ "message": "Message sent successfully!" }))
}
