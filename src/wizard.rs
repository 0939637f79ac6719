//! Multi-step trip planning wizard
//!
//! Collects a [`TripRequest`] one step at a time. Each step is validated
//! locally before the wizard advances; a rejected step leaves the wizard
//! where it was so the user can fix the input.

use std::fmt::Display;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::TripPlannerError;
use crate::models::trip::distinct_interests;
use crate::models::{
    Accommodation, Budget, INTEREST_OPTIONS, MAX_TRAVELERS, MIN_INTERESTS, MIN_TRAVELERS,
    Transportation, TripRequest, TripType,
};

/// Wizard steps in the order they are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Destination, travel dates and traveler count
    Destination,
    /// Trip type and budget
    Style,
    Interests,
    /// Accommodation and transportation
    Logistics,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Destination,
        WizardStep::Style,
        WizardStep::Interests,
        WizardStep::Logistics,
    ];

    #[must_use]
    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Destination => Some(WizardStep::Style),
            WizardStep::Style => Some(WizardStep::Interests),
            WizardStep::Interests => Some(WizardStep::Logistics),
            WizardStep::Logistics => None,
        }
    }

    #[must_use]
    pub fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::Destination => None,
            WizardStep::Style => Some(WizardStep::Destination),
            WizardStep::Interests => Some(WizardStep::Style),
            WizardStep::Logistics => Some(WizardStep::Interests),
        }
    }

    /// 1-based position, for "step 2 of 4" style progress
    #[must_use]
    pub fn number(self) -> usize {
        match self {
            WizardStep::Destination => 1,
            WizardStep::Style => 2,
            WizardStep::Interests => 3,
            WizardStep::Logistics => 4,
        }
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = match self {
            WizardStep::Destination => "Where & when",
            WizardStep::Style => "Trip style",
            WizardStep::Interests => "Interests",
            WizardStep::Logistics => "Stay & travel",
        };
        write!(f, "Step {} of {}: {}", self.number(), Self::ALL.len(), title)
    }
}

/// Reasons a wizard step cannot be completed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Please choose a destination")]
    MissingDestination,

    #[error("Please select both a start and an end date")]
    MissingDates,

    #[error("End date {end} must be after start date {start}")]
    EndNotAfterStart { start: NaiveDate, end: NaiveDate },

    #[error("Number of travelers must be between 1 and 10, got {0}")]
    TravelersOutOfRange(u8),

    #[error("Please choose a trip type")]
    MissingTripType,

    #[error("Please choose a budget")]
    MissingBudget,

    #[error("Please select at least {required} interests ({selected} selected)")]
    TooFewInterests { selected: usize, required: usize },

    #[error("Please choose an accommodation type")]
    MissingAccommodation,

    #[error("Please choose a transportation preference")]
    MissingTransportation,

    #[error("The wizard is already on its last step")]
    AlreadyComplete,
}

impl From<WizardError> for TripPlannerError {
    fn from(err: WizardError) -> Self {
        TripPlannerError::validation(err.to_string())
    }
}

/// Partially filled trip request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripDraft {
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub travelers: u8,
    pub budget: Option<Budget>,
    pub trip_type: Option<TripType>,
    pub interests: Vec<String>,
    pub accommodation: Option<Accommodation>,
    pub transportation: Option<Transportation>,
}

/// Linear wizard over [`WizardStep`]s
#[derive(Debug, Clone)]
pub struct TripWizard {
    step: WizardStep,
    draft: TripDraft,
}

impl Default for TripWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl TripWizard {
    /// Start an empty wizard on the first step with a single traveler
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: WizardStep::Destination,
            draft: TripDraft {
                travelers: MIN_TRAVELERS,
                ..TripDraft::default()
            },
        }
    }

    /// Interests offered on the interests step; any other value may be toggled too
    #[must_use]
    pub fn interest_options() -> &'static [&'static str] {
        &INTEREST_OPTIONS
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn draft(&self) -> &TripDraft {
        &self.draft
    }

    pub fn set_destination<S: Into<String>>(&mut self, destination: S) -> &mut Self {
        self.draft.destination = Some(destination.into());
        self
    }

    pub fn set_dates(&mut self, start: NaiveDate, end: NaiveDate) -> &mut Self {
        self.draft.start_date = Some(start);
        self.draft.end_date = Some(end);
        self
    }

    pub fn set_travelers(&mut self, travelers: u8) -> &mut Self {
        self.draft.travelers = travelers;
        self
    }

    pub fn set_budget(&mut self, budget: Budget) -> &mut Self {
        self.draft.budget = Some(budget);
        self
    }

    pub fn set_trip_type(&mut self, trip_type: TripType) -> &mut Self {
        self.draft.trip_type = Some(trip_type);
        self
    }

    pub fn set_accommodation(&mut self, accommodation: Accommodation) -> &mut Self {
        self.draft.accommodation = Some(accommodation);
        self
    }

    pub fn set_transportation(&mut self, transportation: Transportation) -> &mut Self {
        self.draft.transportation = Some(transportation);
        self
    }

    /// Select an interest, or deselect it if already selected
    pub fn toggle_interest(&mut self, interest: &str) -> &mut Self {
        let interest = interest.trim();
        if interest.is_empty() {
            return self;
        }
        if let Some(pos) = self.draft.interests.iter().position(|i| i == interest) {
            self.draft.interests.remove(pos);
        } else {
            self.draft.interests.push(interest.to_string());
        }
        self
    }

    /// Check that everything a step asks for is present and consistent
    pub fn validate_step(&self, step: WizardStep) -> Result<(), WizardError> {
        let draft = &self.draft;
        match step {
            WizardStep::Destination => {
                let destination = draft.destination.as_deref().unwrap_or_default();
                if destination.trim().is_empty() {
                    return Err(WizardError::MissingDestination);
                }
                let (Some(start), Some(end)) = (draft.start_date, draft.end_date) else {
                    return Err(WizardError::MissingDates);
                };
                if end <= start {
                    return Err(WizardError::EndNotAfterStart { start, end });
                }
                if !(MIN_TRAVELERS..=MAX_TRAVELERS).contains(&draft.travelers) {
                    return Err(WizardError::TravelersOutOfRange(draft.travelers));
                }
            }
            WizardStep::Style => {
                if draft.trip_type.is_none() {
                    return Err(WizardError::MissingTripType);
                }
                if draft.budget.is_none() {
                    return Err(WizardError::MissingBudget);
                }
            }
            WizardStep::Interests => {
                let selected = distinct_interests(&draft.interests);
                if selected < MIN_INTERESTS {
                    return Err(WizardError::TooFewInterests {
                        selected,
                        required: MIN_INTERESTS,
                    });
                }
            }
            WizardStep::Logistics => {
                if draft.accommodation.is_none() {
                    return Err(WizardError::MissingAccommodation);
                }
                if draft.transportation.is_none() {
                    return Err(WizardError::MissingTransportation);
                }
            }
        }
        Ok(())
    }

    /// Validate the current step and move to the next one
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        self.validate_step(self.step)?;
        let next = self.step.next().ok_or(WizardError::AlreadyComplete)?;
        debug!("Wizard advanced from {:?} to {:?}", self.step, next);
        self.step = next;
        Ok(next)
    }

    /// Go back one step; stays put on the first step
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Validate every step and build the request
    pub fn submit(&self) -> Result<TripRequest, WizardError> {
        for step in WizardStep::ALL {
            self.validate_step(step)?;
        }

        let draft = &self.draft;
        let Some(destination) = draft.destination.as_deref() else {
            return Err(WizardError::MissingDestination);
        };
        let (Some(start_date), Some(end_date)) = (draft.start_date, draft.end_date) else {
            return Err(WizardError::MissingDates);
        };
        let Some(budget) = draft.budget else {
            return Err(WizardError::MissingBudget);
        };
        let Some(trip_type) = draft.trip_type else {
            return Err(WizardError::MissingTripType);
        };
        let Some(accommodation) = draft.accommodation else {
            return Err(WizardError::MissingAccommodation);
        };
        let Some(transportation) = draft.transportation else {
            return Err(WizardError::MissingTransportation);
        };

        Ok(TripRequest {
            destination: destination.trim().to_string(),
            start_date,
            end_date,
            travelers: draft.travelers,
            budget,
            trip_type,
            interests: draft.interests.clone(),
            accommodation,
            transportation,
        })
    }
}
