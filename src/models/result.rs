// Search result models

use crate::models::{Day, Mess, MessId};
use serde::Serialize;
use std::fmt;

/// A catalog entry that passed the filter, annotated for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedResult {
    pub mess: Mess,
    pub is_open_now: bool,
    /// Distance from the search origin, when one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// What is wrong with a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    MissingDay(Day),
    DuplicateDay(Day),
    MalformedTime { day: Day, value: String },
    OvernightSpan(Day),
    CoordinateOutOfRange,
    RatingOutOfRange(f64),
    /// Entry at `index` of the catalog document could not be read and was skipped
    MalformedEntry { index: usize, reason: String },
}

/// Anomaly in catalog data; the affected entry is treated fail-closed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataIntegrityWarning {
    pub mess_id: MessId,
    pub kind: WarningKind,
}

impl fmt::Display for DataIntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mess {}: ", self.mess_id)?;
        match &self.kind {
            WarningKind::MissingDay(day) => write!(f, "no timing for {}", day),
            WarningKind::DuplicateDay(day) => write!(f, "more than one timing for {}", day),
            WarningKind::MalformedTime { day, value } => {
                write!(f, "unreadable time {:?} on {}", value, day)
            }
            WarningKind::OvernightSpan(day) => {
                write!(f, "hours on {} cross midnight and are treated as closed", day)
            }
            WarningKind::CoordinateOutOfRange => write!(f, "coordinate out of range"),
            WarningKind::RatingOutOfRange(rating) => write!(f, "rating {} outside [0, 5]", rating),
            WarningKind::MalformedEntry { index, reason } => {
                write!(f, "entry {} skipped: {}", index, reason)
            }
        }
    }
}

/// Results of one search plus any data anomalies found along the way
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<AnnotatedResult>,
    pub warnings: Vec<DataIntegrityWarning>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results whose mess is open at the searched instant
    pub fn open_now(&self) -> impl Iterator<Item = &AnnotatedResult> {
        self.results.iter().filter(|r| r.is_open_now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let warning = DataIntegrityWarning {
            mess_id: "m9".into(),
            kind: WarningKind::MalformedTime {
                day: Day::Sunday,
                value: "9am".into(),
            },
        };
        assert_eq!(warning.to_string(), r#"mess m9: unreadable time "9am" on Sunday"#);
    }

    #[test]
    fn test_empty_outcome() {
        let outcome = SearchOutcome::default();
        assert!(outcome.is_empty());
        assert_eq!(outcome.open_now().count(), 0);
    }
}
