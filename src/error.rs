//! Failures surfaced by trip planning, from config loading to model output

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripPlannerError {
    /// Missing or inconsistent settings (project, region, endpoint)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The generative model or the itinerary backend could not be reached,
    /// or answered with a non-success status
    #[error("Upstream request failed: {message}")]
    Api { message: String },

    /// A trip request breaking one of the wizard rules
    #[error("Invalid trip request: {message}")]
    Validation { message: String },

    /// Text that is not valid JSON, or JSON without the itinerary shape
    #[error("Unreadable JSON: {message}")]
    Parse { message: String },

    /// Reading a trip request file failed
    #[error("File access failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TripPlannerError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Text safe to show a traveler. Only validation messages carry detail,
    /// since those describe the traveler's own input.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripPlannerError::Config { .. } => {
                "Trip planner is misconfigured. Check the model project and region settings."
                    .to_string()
            }
            TripPlannerError::Api { .. } => {
                "The itinerary service is unreachable right now. Try again in a moment.".to_string()
            }
            TripPlannerError::Validation { message } => message.clone(),
            TripPlannerError::Parse { .. } => {
                "The itinerary came back in an unexpected format.".to_string()
            }
            TripPlannerError::Io { source } => match source.kind() {
                std::io::ErrorKind::NotFound => "Trip request file not found.".to_string(),
                _ => "Trip request file could not be read.".to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for TripPlannerError {
    fn from(err: serde_json::Error) -> Self {
        TripPlannerError::parse(err.to_string())
    }
}

impl From<reqwest::Error> for TripPlannerError {
    fn from(err: reqwest::Error) -> Self {
        TripPlannerError::api(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_as_is() {
        let err = TripPlannerError::validation("Select at least 3 interests, got: 2");
        assert_eq!(err.user_message(), "Select at least 3 interests, got: 2");
        assert_eq!(
            err.to_string(),
            "Invalid trip request: Select at least 3 interests, got: 2"
        );
    }

    #[test]
    fn test_internal_detail_stays_out_of_user_message() {
        let parse_err = TripPlannerError::parse("expected value at line 1");
        assert!(!parse_err.user_message().contains("line 1"));

        let api_err = TripPlannerError::api("HTTP 403 from aiplatform");
        assert!(!api_err.user_message().contains("403"));

        let config_err = TripPlannerError::config("model.project is empty");
        assert!(config_err.user_message().contains("misconfigured"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: TripPlannerError = json_err.into();
        assert!(matches!(err, TripPlannerError::Parse { .. }));
    }

    #[test]
    fn test_io_error_kinds() {
        let missing: TripPlannerError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(missing.user_message(), "Trip request file not found.");

        let denied: TripPlannerError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        assert_eq!(denied.user_message(), "Trip request file could not be read.");
    }
}
