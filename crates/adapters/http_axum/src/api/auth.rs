//! JSON handlers for guest and hotel-partner login.
//!
//! Login only confirms the email appears in the bookings; no session or
//! token is issued. Failures use the `{success, message}` body shape.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use stayease_app::ports::BookingRepository;
use stayease_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body shared by both login endpoints.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
}

impl LoginRequest {
    fn from_payload(payload: Result<Json<Self>, JsonRejection>) -> Result<Self, ApiError> {
        payload
            .map(|Json(req)| req)
            .map_err(|rejection| ApiError::login(ValidationError::MalformedBody(rejection.body_text())))
    }
}

#[derive(Serialize)]
pub struct LoginBody {
    pub success: bool,
    pub name: String,
}

#[derive(Serialize)]
pub struct HotelLoginBody {
    pub success: bool,
    pub message: &'static str,
}

/// Possible responses from the guest login endpoint.
pub enum LoginResponse {
    Ok(Json<LoginBody>),
}

impl IntoResponse for LoginResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the hotel login endpoint.
pub enum HotelLoginResponse {
    Ok(Json<HotelLoginBody>),
}

impl IntoResponse for HotelLoginResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/login`
pub async fn login<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<LoginResponse, ApiError>
where
    R: BookingRepository + Send + Sync + 'static,
{
    let req = LoginRequest::from_payload(payload)?;
    let email = req.email.unwrap_or_default();
    let name = state
        .booking_service
        .login(&email)
        .await
        .map_err(ApiError::login)?;
    Ok(LoginResponse::Ok(Json(LoginBody {
        success: true,
        name,
    })))
}

/// `POST /api/hotel/login`
pub async fn hotel_login<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<HotelLoginResponse, ApiError>
where
    R: BookingRepository + Send + Sync + 'static,
{
    let req = LoginRequest::from_payload(payload)?;
    let email = req.email.unwrap_or_default();
    state
        .booking_service
        .hotel_login(&email)
        .await
        .map_err(ApiError::login)?;
    Ok(HotelLoginResponse::Ok(Json(HotelLoginBody {
        success: true,
        message: "Hotel login successful.",
    })))
}
