use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised while turning query values into filter criteria.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Unknown date filter: {0}")]
    UnknownDateMode(String),
}

/// Errors that can occur when loading the static event fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Fixture is not a valid event list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate event id in fixture: {0}")]
    DuplicateId(String),
    #[error("Event {id} has a negative price: {price}")]
    NegativePrice { id: String, price: f64 },
}

/// Errors that prevent building a calendar deep link for a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarLinkError {
    #[error("Invalid event date: {0}")]
    InvalidDate(String),
    #[error("Invalid start time: {0}")]
    InvalidStartTime(String),
    #[error("Invalid end time: {0}")]
    InvalidEndTime(String),
    #[error("Local time {0} does not exist in the event's time zone")]
    NonexistentLocalTime(NaiveDateTime),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_error_display() {
        assert_eq!(
            CriteriaError::UnknownDateMode("soon".to_string()).to_string(),
            "Unknown date filter: soon"
        );
    }

    #[test]
    fn test_fixture_error_display() {
        assert_eq!(
            FixtureError::DuplicateId("evt-1".to_string()).to_string(),
            "Duplicate event id in fixture: evt-1"
        );
        assert_eq!(
            FixtureError::NegativePrice {
                id: "evt-2".to_string(),
                price: -5.0
            }
            .to_string(),
            "Event evt-2 has a negative price: -5"
        );
    }

    #[test]
    fn test_calendar_link_error_display() {
        assert_eq!(
            CalendarLinkError::InvalidStartTime("dusk".to_string()).to_string(),
            "Invalid start time: dusk"
        );
    }
}
