//! Client side of itinerary generation
//!
//! Sends a finished [`TripRequest`] to the backend. Failures never abort the
//! flow: the caller always gets an [`Itinerary`] to show, falling back to
//! [`Itinerary::fallback`] when the backend cannot deliver one.

use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::TripPlannerError;
use crate::models::{Itinerary, TripRequest};

pub struct ItineraryClient {
    client: Client,
    endpoint: String,
}

impl ItineraryClient {
    /// Create a client for the backend at `backend_url`
    pub fn new(backend_url: &str) -> crate::Result<Self> {
        let client = Client::builder()
            .user_agent("TripPlanner/0.1.0")
            .build()
            .map_err(|e| TripPlannerError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/generate-itinerary", backend_url.trim_end_matches('/')),
        })
    }

    /// One request, no retry. Any failure yields the fallback itinerary.
    #[instrument(skip(self, trip), fields(destination = %trip.destination))]
    pub async fn request(&self, trip: &TripRequest) -> Itinerary {
        match self.try_request(trip).await {
            Ok(itinerary) => {
                info!("Received itinerary with {} days", itinerary.days.len());
                itinerary
            }
            Err(e) => {
                warn!("Itinerary request failed, showing fallback: {}", e);
                Itinerary::fallback(&trip.destination)
            }
        }
    }

    /// Single request that reports what went wrong
    pub async fn try_request(&self, trip: &TripRequest) -> crate::Result<Itinerary> {
        let response = self.client.post(&self.endpoint).json(trip).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TripPlannerError::api(format!(
                "Backend responded with status {status}"
            )));
        }

        response
            .json::<Itinerary>()
            .await
            .map_err(|e| TripPlannerError::parse(format!("Unreadable itinerary: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Accommodation, Budget, FALLBACK_MESSAGE, Transportation, TripType};
    use axum::{Json, Router, http::StatusCode, routing::post};
    use chrono::NaiveDate;
    use serde_json::json;

    fn trip() -> TripRequest {
        TripRequest {
            destination: "Queenstown, New Zealand".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 11, 4).unwrap(),
            travelers: 1,
            budget: Budget::Luxury,
            trip_type: TripType::Adventure,
            interests: vec!["Adventure".into(), "Nature".into(), "Hiking".into()],
            accommodation: Accommodation::Resort,
            transportation: Transportation::Car,
        }
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_network_failure_renders_fallback() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ItineraryClient::new(&format!("http://{addr}")).unwrap();
        let itinerary = client.request(&trip()).await;

        assert!(itinerary.is_fallback());
        assert!(itinerary.recommendations.iter().any(|r| r == FALLBACK_MESSAGE));
        assert!(itinerary.to_string().contains(FALLBACK_MESSAGE));
    }

    #[tokio::test]
    async fn test_server_error_renders_fallback() {
        let app = Router::new().route(
            "/generate-itinerary",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to generate trip itinerary." })),
                )
            }),
        );
        let client = ItineraryClient::new(&serve(app).await).unwrap();

        let err = client.try_request(&trip()).await.unwrap_err();
        assert!(err.to_string().contains("500"));

        let itinerary = client.request(&trip()).await;
        assert_eq!(itinerary, Itinerary::fallback("Queenstown, New Zealand"));
    }

    #[tokio::test]
    async fn test_success_returns_backend_itinerary() {
        let app = Router::new().route(
            "/generate-itinerary",
            post(|Json(trip): Json<TripRequest>| async move {
                Json(json!({
                    "destination": trip.destination,
                    "duration": "3 days",
                    "totalBudget": "$3000",
                    "highlights": ["Bungee jump"],
                    "days": [ { "day": 1, "title": "Arrival" } ],
                    "recommendations": ["Pack layers"]
                }))
            }),
        );
        let client = ItineraryClient::new(&format!("{}/", serve(app).await)).unwrap();

        let itinerary = client.request(&trip()).await;
        assert!(!itinerary.is_fallback());
        assert_eq!(itinerary.destination, "Queenstown, New Zealand");
        assert_eq!(itinerary.days[0].title, "Arrival");
    }
}
