use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{itinerary::ItineraryService, models::TripRequest};

/// Message returned to clients for any generation failure
pub const GENERATION_FAILED: &str = "Failed to generate trip itinerary.";
/// Message returned for a body that is not a trip request
pub const INVALID_REQUEST: &str = "Invalid trip request.";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn router(service: ItineraryService) -> Router {
    Router::new()
        .route("/generate-itinerary", post(generate_itinerary))
        .route("/health", get(health))
        .with_state(service)
}

async fn health() -> &'static str {
    "OK"
}

async fn generate_itinerary(
    State(service): State<ItineraryService>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Response {
    let trip = match payload {
        Ok(Json(trip)) => trip,
        Err(rejection) => {
            tracing::warn!("Rejected itinerary request: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, INVALID_REQUEST);
        }
    };

    match service.generate(&trip).await {
        Ok(itinerary) => Json(itinerary).into_response(),
        Err(e) => {
            // detail stays in the server log
            tracing::error!("Error generating itinerary: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED)
        }
    }
}
