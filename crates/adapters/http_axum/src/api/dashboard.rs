//! JSON handlers for the hotel and guest dashboards.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use stayease_app::ports::BookingRepository;
use stayease_domain::dashboard::{HotelDashboard, UserDashboard};
use stayease_domain::error::{StayEaseError, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserDashboardQuery {
    pub user_name: Option<String>,
}

/// Possible responses from the hotel dashboard endpoint.
pub enum HotelDashboardResponse {
    Ok(Json<HotelDashboard>),
}

impl IntoResponse for HotelDashboardResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the guest dashboard endpoint.
pub enum UserDashboardResponse {
    Ok(Json<UserDashboard>),
}

impl IntoResponse for UserDashboardResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/hotel/dashboard`
pub async fn hotel<R>(
    State(state): State<AppState<R>>,
) -> Result<HotelDashboardResponse, ApiError>
where
    R: BookingRepository + Send + Sync + 'static,
{
    let dashboard = state.booking_service.hotel_dashboard().await?;
    Ok(HotelDashboardResponse::Ok(Json(dashboard)))
}

/// `GET /api/user/dashboard?user_name=`
pub async fn user<R>(
    State(state): State<AppState<R>>,
    query: Result<Query<UserDashboardQuery>, QueryRejection>,
) -> Result<UserDashboardResponse, ApiError>
where
    R: BookingRepository + Send + Sync + 'static,
{
    let Ok(Query(query)) = query else {
        return Err(StayEaseError::from(ValidationError::MissingUserName).into());
    };
    let user_name = query.user_name.unwrap_or_default();
    let dashboard = state.booking_service.user_dashboard(&user_name).await?;
    Ok(UserDashboardResponse::Ok(Json(dashboard)))
}
