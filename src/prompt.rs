//! Prompt construction for itinerary generation

use crate::models::TripRequest;

/// JSON layout the model is asked to follow
const ITINERARY_TEMPLATE: &str = r#"{
  "destination": "string",
  "duration": "string",
  "totalBudget": "string",
  "highlights": ["string", "string", "string"],
  "days": [
    {
      "day": "number",
      "title": "string",
      "morning": { "activity": "string", "time": "string", "location": "string" },
      "afternoon": { "activity": "string", "time": "string", "location": "string" },
      "evening": { "activity": "string", "time": "string", "location": "string" }
    }
  ],
  "recommendations": ["string", "string", "string"]
}"#;

/// Render interests as a comma separated list, or `None` when nothing was selected
#[must_use]
pub fn format_interests(interests: &[String]) -> String {
    if interests.is_empty() {
        "None".to_string()
    } else {
        interests.join(", ")
    }
}

/// Build the instruction sent to the generative model for one trip request
#[must_use]
pub fn build_prompt(trip: &TripRequest) -> String {
    format!(
        "You are an AI-powered travel agent. Generate a detailed trip itinerary in JSON format. \
The JSON must strictly follow this structure:

{template}

Here are the user's preferences:
- Destination: {destination}
- Start Date: {start}
- End Date: {end}
- Number of Travelers: {travelers}
- Budget: {budget}
- Trip Type: {trip_type}
- Interests: {interests}
- Accommodation: {accommodation}
- Transportation: {transportation}

Do not include any text or markdown outside of the JSON object.
",
        template = ITINERARY_TEMPLATE,
        destination = trip.destination,
        start = trip.start_date,
        end = trip.end_date,
        travelers = trip.travelers,
        budget = trip.budget,
        trip_type = trip.trip_type,
        interests = format_interests(&trip.interests),
        accommodation = trip.accommodation,
        transportation = trip.transportation,
    )
}
