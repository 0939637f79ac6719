//! `TripPlanner` - AI-assisted trip itinerary planning
//!
//! This library provides the trip planning wizard, the prompt and model
//! integration behind the itinerary endpoint, and the client that talks to it.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod itinerary;
pub mod logging;
pub mod model;
pub mod models;
pub mod prompt;
pub mod web;
pub mod wizard;

// Re-export core types for public API
pub use client::ItineraryClient;
pub use config::TripPlannerConfig;
pub use error::TripPlannerError;
pub use itinerary::{ItineraryService, parse_itinerary, strip_code_fences};
pub use model::{GenerativeModel, VertexModel};
pub use models::{Itinerary, TripRequest};
pub use wizard::{TripWizard, WizardError, WizardStep};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripPlannerError>;
