//! Trip request model collected by the planning wizard

use std::collections::HashSet;
use std::fmt::Display;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::TripPlannerError;

/// Smallest traveler count accepted
pub const MIN_TRAVELERS: u8 = 1;
/// Largest traveler count accepted
pub const MAX_TRAVELERS: u8 = 10;
/// Minimum number of distinct interests a request must carry
pub const MIN_INTERESTS: usize = 3;

/// Interests offered by the wizard. Free-form values are accepted as well.
pub const INTEREST_OPTIONS: [&str; 12] = [
    "Sightseeing",
    "Food & Dining",
    "Adventure",
    "Culture",
    "Nightlife",
    "Shopping",
    "Nature",
    "History",
    "Art",
    "Hiking",
    "Photography",
    "Beaches",
];

/// Budget tier for the whole trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Budget,
    Moderate,
    Luxury,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Budget, Budget::Moderate, Budget::Luxury];

    /// Wire value, also used in the model prompt
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Budget => "budget",
            Budget::Moderate => "moderate",
            Budget::Luxury => "luxury",
        }
    }

    /// Human-readable label including the price range
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Budget::Budget => "Budget ($0 - $500)",
            Budget::Moderate => "Moderate ($500 - $1500)",
            Budget::Luxury => "Luxury ($1500+)",
        }
    }
}

/// Overall character of the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Adventure,
    Relaxation,
    Cultural,
    Foodie,
}

impl TripType {
    pub const ALL: [TripType; 4] = [
        TripType::Adventure,
        TripType::Relaxation,
        TripType::Cultural,
        TripType::Foodie,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Adventure => "adventure",
            TripType::Relaxation => "relaxation",
            TripType::Cultural => "cultural",
            TripType::Foodie => "foodie",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TripType::Adventure => "Adventure",
            TripType::Relaxation => "Relaxation",
            TripType::Cultural => "Cultural",
            TripType::Foodie => "Foodie",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accommodation {
    Hotel,
    Boutique,
    Resort,
    Airbnb,
}

impl Accommodation {
    pub const ALL: [Accommodation; 4] = [
        Accommodation::Hotel,
        Accommodation::Boutique,
        Accommodation::Resort,
        Accommodation::Airbnb,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Accommodation::Hotel => "hotel",
            Accommodation::Boutique => "boutique",
            Accommodation::Resort => "resort",
            Accommodation::Airbnb => "airbnb",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Accommodation::Hotel => "Hotel",
            Accommodation::Boutique => "Boutique Hotel",
            Accommodation::Resort => "Resort",
            Accommodation::Airbnb => "Airbnb",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transportation {
    Flight,
    Car,
    Train,
    Mixed,
}

impl Transportation {
    pub const ALL: [Transportation; 4] = [
        Transportation::Flight,
        Transportation::Car,
        Transportation::Train,
        Transportation::Mixed,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Transportation::Flight => "flight",
            Transportation::Car => "car",
            Transportation::Train => "train",
            Transportation::Mixed => "mixed",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Transportation::Flight => "Flight",
            Transportation::Car => "Car",
            Transportation::Train => "Train",
            Transportation::Mixed => "Mixed",
        }
    }
}

impl Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for TripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Accommodation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Transportation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's collected travel preferences, submitted for itinerary generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    /// Display name of the destination
    pub destination: String,
    /// First day of the trip
    pub start_date: NaiveDate,
    /// Last day of the trip, strictly after `start_date`
    pub end_date: NaiveDate,
    /// Number of travelers (1-10)
    pub travelers: u8,
    pub budget: Budget,
    pub trip_type: TripType,
    /// Selected interests; absent or `null` on the wire means none selected
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interests: Vec<String>,
    pub accommodation: Accommodation,
    pub transportation: Transportation,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl TripRequest {
    /// Read a request from a JSON file and check its invariants
    pub fn from_json_file(path: &Path) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let trip: TripRequest = serde_json::from_str(&raw)?;
        trip.validate()?;
        Ok(trip)
    }

    /// Number of days the trip spans, counting both ends
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Check the invariants the wizard enforces step by step
    pub fn validate(&self) -> crate::Result<()> {
        if self.destination.trim().is_empty() {
            return Err(TripPlannerError::validation("Destination cannot be empty"));
        }

        if self.end_date <= self.start_date {
            return Err(TripPlannerError::validation(format!(
                "End date {} must be after start date {}",
                self.end_date, self.start_date
            )));
        }

        if !(MIN_TRAVELERS..=MAX_TRAVELERS).contains(&self.travelers) {
            return Err(TripPlannerError::validation(format!(
                "Travelers must be between {MIN_TRAVELERS} and {MAX_TRAVELERS}, got: {}",
                self.travelers
            )));
        }

        let distinct = distinct_interests(&self.interests);
        if distinct < MIN_INTERESTS {
            return Err(TripPlannerError::validation(format!(
                "Select at least {MIN_INTERESTS} interests, got: {distinct}"
            )));
        }

        Ok(())
    }
}

impl Display for TripRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "📍 {}", self.destination)?;
        writeln!(
            f,
            "   📅 {} to {} ({} days), {} traveler(s)",
            self.start_date,
            self.end_date,
            self.duration_days(),
            self.travelers
        )?;
        writeln!(
            f,
            "   🧭 {} trip, {}",
            self.trip_type.label(),
            self.budget.label()
        )?;
        writeln!(
            f,
            "   🏨 {}, getting there by {}",
            self.accommodation.label(),
            self.transportation.label()
        )?;
        if !self.interests.is_empty() {
            writeln!(f, "   ❤️ {}", self.interests.join(", "))?;
        }
        Ok(())
    }
}

/// Count interests ignoring blanks and duplicates
pub(crate) fn distinct_interests(interests: &[String]) -> usize {
    interests
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn sample_request() -> TripRequest {
        TripRequest {
            destination: "Lisbon, Portugal".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 5, 4).unwrap(),
            travelers: 2,
            budget: Budget::Moderate,
            trip_type: TripType::Cultural,
            interests: vec!["Nature".into(), "Hiking".into(), "Photography".into()],
            accommodation: Accommodation::Boutique,
            transportation: Transportation::Train,
        }
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(json["startDate"], "2026-05-01");
        assert_eq!(json["endDate"], "2026-05-04");
        assert_eq!(json["tripType"], "cultural");
        assert_eq!(json["accommodation"], "boutique");
        assert_eq!(json["transportation"], "train");
        assert_eq!(json["budget"], "moderate");
    }

    #[test]
    fn test_missing_interests_defaults_to_empty() {
        let json = serde_json::json!({
            "destination": "Kyoto",
            "startDate": "2026-04-01",
            "endDate": "2026-04-05",
            "travelers": 1,
            "budget": "luxury",
            "tripType": "foodie",
            "accommodation": "hotel",
            "transportation": "flight"
        });
        let request: TripRequest = serde_json::from_value(json).unwrap();
        assert!(request.interests.is_empty());
    }

    #[test]
    fn test_null_interests_defaults_to_empty() {
        let mut json = serde_json::to_value(sample_request()).unwrap();
        json["interests"] = serde_json::Value::Null;
        let request: TripRequest = serde_json::from_value(json).unwrap();
        assert!(request.interests.is_empty());
    }

    #[test]
    fn test_display_summarizes_request() {
        let summary = sample_request().to_string();
        assert!(summary.contains("Lisbon, Portugal"));
        assert!(summary.contains("(4 days)"));
        assert!(summary.contains("Cultural trip, Moderate ($500 - $1500)"));
        assert!(summary.contains("Boutique Hotel, getting there by Train"));
        assert!(summary.contains("Nature, Hiking, Photography"));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "{}", serde_json::to_string(&sample_request()).unwrap()).unwrap();
        let request = TripRequest::from_json_file(file.path()).unwrap();
        assert_eq!(request, sample_request());
    }

    #[test]
    fn test_from_json_file_errors() {
        let missing = TripRequest::from_json_file(Path::new("/nonexistent/trip.json"));
        assert!(matches!(missing, Err(TripPlannerError::Io { .. })));

        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "{{ not json").unwrap();
        let broken = TripRequest::from_json_file(file.path());
        assert!(matches!(broken, Err(TripPlannerError::Parse { .. })));

        let mut request = sample_request();
        request.interests.truncate(2);
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "{}", serde_json::to_string(&request).unwrap()).unwrap();
        let invalid = TripRequest::from_json_file(file.path());
        assert!(matches!(invalid, Err(TripPlannerError::Validation { .. })));
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let json = serde_json::json!({
            "destination": "Kyoto",
            "startDate": "2026-04-01",
            "endDate": "2026-04-05",
            "travelers": 1,
            "budget": "luxury",
            "tripType": "party",
            "interests": [],
            "accommodation": "hotel",
            "transportation": "flight"
        });
        assert!(serde_json::from_value::<TripRequest>(json).is_err());
    }

    #[test]
    fn test_valid_request() {
        assert!(sample_request().validate().is_ok());
        assert_eq!(sample_request().duration_days(), 4);
    }

    #[rstest]
    #[case(2026, 5, 1)]
    #[case(2026, 4, 30)]
    fn test_end_date_not_after_start_rejected(#[case] y: i32, #[case] m: u32, #[case] d: u32) {
        let mut request = sample_request();
        request.end_date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("must be after start date"));
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    fn test_travelers_out_of_range(#[case] travelers: u8) {
        let mut request = sample_request();
        request.travelers = travelers;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_duplicate_interests_do_not_count_twice() {
        let mut request = sample_request();
        request.interests = vec!["Art".into(), "Art".into(), " ".into(), "History".into()];
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("got: 2"));
    }

    #[test]
    fn test_enum_display_matches_wire_value() {
        for budget in Budget::ALL {
            let wire = serde_json::to_value(budget).unwrap();
            assert_eq!(wire, budget.to_string());
        }
        for trip_type in TripType::ALL {
            assert_eq!(serde_json::to_value(trip_type).unwrap(), trip_type.to_string());
        }
        for accommodation in Accommodation::ALL {
            assert_eq!(
                serde_json::to_value(accommodation).unwrap(),
                accommodation.to_string()
            );
        }
        for transportation in Transportation::ALL {
            assert_eq!(
                serde_json::to_value(transportation).unwrap(),
                transportation.to_string()
            );
        }
    }
}
