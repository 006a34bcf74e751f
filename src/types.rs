use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};

pub const EIGHTEEN_HOLES_TAG: &str = "18holes";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub start: DateTime<FixedOffset>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Slot {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchAvailabilityRequest {
    #[serde(default)]
    pub date: Option<String>,
}

/// Offsets used when summarizing slots. `day` decides which calendar day a
/// slot start belongs to, `display` is the offset its time is rendered in.
///
/// A `day` of UTC matches the requested date as a literal prefix of an UTC
/// normalized start timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBasis {
    pub day: FixedOffset,
    pub display: FixedOffset,
}

impl Default for TimeBasis {
    fn default() -> Self {
        let utc = Utc.fix();
        Self {
            day: utc,
            display: utc,
        }
    }
}

/// A date string that passed every check of the date validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDate {
    literal: String,
    date: NaiveDate,
}

impl ValidDate {
    pub(crate) fn new(literal: &str, date: NaiveDate) -> Self {
        Self {
            literal: literal.to_string(),
            date,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.literal
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "missing")]
    Missing,
    #[serde(rename = "past_date")]
    PastDate,
    #[serde(rename = "invalid_date")]
    InvalidDate,
    #[serde(rename = "server")]
    Server,
    #[serde(rename = "")]
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityReport {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eighteen_holes_message: Option<String>,
    pub is_valid: bool,
    pub error_type: ErrorKind,
}

impl AvailabilityReport {
    pub fn available(message: String, eighteen_holes_message: String) -> Self {
        Self {
            message,
            eighteen_holes_message: Some(eighteen_holes_message),
            is_valid: true,
            error_type: ErrorKind::None,
        }
    }
}
