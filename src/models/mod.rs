//! Data models for the TripPlanner application
//!
//! - Trip: the request collected from the traveler
//! - Itinerary: the day-by-day plan produced by the model

pub mod itinerary;
pub mod trip;

// Re-export all public types for convenient access
pub use itinerary::{DayPlan, FALLBACK_MESSAGE, Itinerary, TimeSlot};
pub use trip::{
    Accommodation, Budget, INTEREST_OPTIONS, MAX_TRAVELERS, MIN_INTERESTS, MIN_TRAVELERS,
    Transportation, TripRequest, TripType,
};
