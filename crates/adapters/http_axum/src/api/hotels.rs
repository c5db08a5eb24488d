//! JSON handlers for the hotel catalog.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use stayease_app::ports::BookingRepository;
use stayease_domain::error::{StayEaseError, ValidationError};
use stayease_domain::hotel::Hotel;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the details endpoint.
///
/// `id` is kept as text so a non-numeric value is reported as missing
/// rather than rejected by the extractor.
#[derive(Deserialize)]
pub struct DetailsQuery {
    pub id: Option<String>,
}

impl DetailsQuery {
    fn hotel_id(&self) -> Result<i64, StayEaseError> {
        self.id
            .as_deref()
            .and_then(|id| id.trim().parse().ok())
            .ok_or_else(|| ValidationError::MissingHotelId.into())
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Hotel>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the details endpoint.
pub enum DetailsResponse {
    Ok(Json<Hotel>),
}

impl IntoResponse for DetailsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/hotels`
pub async fn list<R>(State(state): State<AppState<R>>) -> ListResponse
where
    R: BookingRepository + Send + Sync + 'static,
{
    ListResponse::Ok(Json(state.catalog.hotels().to_vec()))
}

/// `GET /api/hotel/details?id=`
pub async fn details<R>(
    State(state): State<AppState<R>>,
    query: Result<Query<DetailsQuery>, QueryRejection>,
) -> Result<DetailsResponse, ApiError>
where
    R: BookingRepository + Send + Sync + 'static,
{
    let Ok(Query(query)) = query else {
        return Err(StayEaseError::from(ValidationError::MissingHotelId).into());
    };
    let hotel = state.catalog.get(query.hotel_id()?)?;
    Ok(DetailsResponse::Ok(Json(hotel.clone())))
}
