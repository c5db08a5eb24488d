//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod auth;
#[allow(clippy::missing_errors_doc)]
pub mod dashboard;
#[allow(clippy::missing_errors_doc)]
pub mod hotels;
#[allow(clippy::missing_errors_doc)]
pub mod seed;

use axum::Router;
use axum::routing::{get, post};

use stayease_app::ports::BookingRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: BookingRepository + Send + Sync + 'static,
{
    Router::new()
        // Login
        .route("/login", post(auth::login::<R>))
        .route("/hotel/login", post(auth::hotel_login::<R>))
        // Catalog
        .route("/hotels", get(hotels::list::<R>))
        .route("/hotel/details", get(hotels::details::<R>))
        // Dashboards
        .route("/hotel/dashboard", get(dashboard::hotel::<R>))
        .route("/user/dashboard", get(dashboard::user::<R>))
        // Demo data
        .route("/init", get(seed::init::<R>))
}
