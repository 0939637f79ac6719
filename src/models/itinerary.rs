//! Itinerary model returned by the generative model, plus its terminal rendering

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Message shown in place of model output when the backend cannot be reached
pub const FALLBACK_MESSAGE: &str =
    "We couldn't generate your itinerary right now. Please try again in a few minutes.";

/// Structured day-by-day travel plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub destination: String,
    pub duration: String,
    pub total_budget: String,
    pub highlights: Vec<String>,
    pub days: Vec<DayPlan>,
    pub recommendations: Vec<String>,
}

/// One day of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day counter
    pub day: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning: Option<TimeSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afternoon: Option<TimeSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening: Option<TimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub activity: String,
    pub time: String,
    pub location: String,
}

impl Itinerary {
    /// Stand-in itinerary shown when generation failed on the way to the backend
    #[must_use]
    pub fn fallback(destination: &str) -> Self {
        Self {
            destination: destination.to_string(),
            duration: "N/A".to_string(),
            total_budget: "N/A".to_string(),
            highlights: vec![FALLBACK_MESSAGE.to_string()],
            days: Vec::new(),
            recommendations: vec![FALLBACK_MESSAGE.to_string()],
        }
    }

    /// Whether this is the client-side stand-in rather than model output
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.days.is_empty() && self.recommendations.iter().any(|r| r == FALLBACK_MESSAGE)
    }
}

impl Display for Itinerary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "✈️  Your trip to {}", self.destination)?;
        writeln!(f, "   ⏳ Duration: {}", self.duration)?;
        writeln!(f, "   💰 Total budget: {}", self.total_budget)?;

        if !self.highlights.is_empty() {
            writeln!(f)?;
            writeln!(f, "Highlights")?;
            for highlight in &self.highlights {
                writeln!(f, "   • {highlight}")?;
            }
        }

        for day in &self.days {
            writeln!(f)?;
            write!(f, "{day}")?;
        }

        if !self.recommendations.is_empty() {
            writeln!(f)?;
            writeln!(f, "Recommendations")?;
            for recommendation in &self.recommendations {
                writeln!(f, "   • {recommendation}")?;
            }
        }
        Ok(())
    }
}

impl Display for DayPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Day {}: {}", self.day, self.title)?;
        let slots = [
            ("🌅 Morning", &self.morning),
            ("☀️ Afternoon", &self.afternoon),
            ("🌙 Evening", &self.evening),
        ];
        for (label, slot) in slots {
            if let Some(slot) = slot {
                writeln!(f, "   {label} ({}): {}", slot.time, slot.activity)?;
                writeln!(f, "      🗺️ {}", slot.location)?;
            }
        }
        Ok(())
    }
}
