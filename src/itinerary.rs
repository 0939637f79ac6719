//! Itinerary generation service
//!
//! Turns a [`TripRequest`] into a prompt, makes exactly one model call and
//! hands back the model's JSON untouched once it is known to have the
//! [`Itinerary`] shape.

use std::sync::Arc;
use std::time::Instant;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::TripPlannerError;
use crate::model::GenerativeModel;
use crate::models::{Itinerary, TripRequest};
use crate::prompt::build_prompt;

/// Remove a surrounding markdown code fence (```` ``` ```` or ```` ```json ````) if present
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // only the info string (e.g. `json`) goes; the payload may share its line
    let body = rest
        .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        .trim();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse model text into JSON and check it describes an itinerary.
/// The returned value is the parsed text as-is, extra fields included.
pub fn parse_itinerary(text: &str) -> crate::Result<Value> {
    let cleaned = strip_code_fences(text);
    let value: Value = serde_json::from_str(cleaned).map_err(|e| {
        TripPlannerError::parse(format!("Model output is not valid JSON: {e}"))
    })?;

    Itinerary::deserialize(&value).map_err(|e| {
        TripPlannerError::parse(format!("Model output does not match the itinerary shape: {e}"))
    })?;

    Ok(value)
}

/// Stateless itinerary generator shared by all requests
#[derive(Clone)]
pub struct ItineraryService {
    model: Arc<dyn GenerativeModel>,
}

impl ItineraryService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Generate an itinerary for one request. No retry is attempted.
    #[instrument(skip(self, trip), fields(destination = %trip.destination))]
    pub async fn generate(&self, trip: &TripRequest) -> crate::Result<Value> {
        let start_time = Instant::now();
        let prompt = build_prompt(trip);
        debug!("Prompt built ({} bytes)", prompt.len());

        let text = self.model.generate_json(&prompt).await?;
        let itinerary = parse_itinerary(&text)?;

        info!(
            "Generated itinerary for '{}' in {:.3}s",
            trip.destination,
            start_time.elapsed().as_secs_f64()
        );
        Ok(itinerary)
    }
}
