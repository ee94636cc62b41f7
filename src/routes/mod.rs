use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, bookings, hotels, services};
use crate::middleware::auth::auth_middleware;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Public auth routes
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    // Public catalog and concierge routes
    let public_routes = Router::new()
        .route("/hotels", get(hotels::list_hotels))
        .route("/hotels/{id}", get(hotels::get_hotel))
        .route("/cars", get(services::list_cars))
        .route("/translators", get(services::list_translators))
        .route("/city-guide", get(services::city_guide))
        .route("/trip-planner", post(services::trip_planner))
        .route("/contact", post(services::contact));

    // Booking routes (requires a verified bearer token)
    let booking_routes = Router::new()
        .route("/", post(bookings::create_booking))
        .route("/", get(bookings::list_user_bookings))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .route("/", get(services::health))
        .nest("/api/auth", auth_routes)
        .nest("/api", public_routes)
        .nest("/api/bookings", booking_routes)
        .with_state(state)
}
