//! Demo data seeding endpoint.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use stayease_app::ports::{BookingRepository, SeedOutcome};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
struct CreatedBody {
    success: bool,
    message: &'static str,
}

#[derive(Serialize)]
struct PopulatedBody {
    message: &'static str,
}

/// Possible responses from the init endpoint.
pub enum InitResponse {
    Created,
    AlreadyPopulated,
}

impl IntoResponse for InitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created => Json(CreatedBody {
                success: true,
                message: "Dummy data created.",
            })
            .into_response(),
            Self::AlreadyPopulated => Json(PopulatedBody {
                message: "Database already populated.",
            })
            .into_response(),
        }
    }
}

/// `GET /api/init`
pub async fn init<R>(State(state): State<AppState<R>>) -> Result<InitResponse, ApiError>
where
    R: BookingRepository + Send + Sync + 'static,
{
    match state.booking_service.seed_demo_data().await? {
        SeedOutcome::Seeded(_) => Ok(InitResponse::Created),
        SeedOutcome::AlreadyPopulated => Ok(InitResponse::AlreadyPopulated),
    }
}
