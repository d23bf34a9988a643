//! Event, round and tournament domain types.
//!
//! An event is a club calendar entry for a season. Events with play are
//! split into rounds, and each round hosts one or more tournaments (gross,
//! net, skins, ...).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of club event, stored as a single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventType {
    Weeknight,
    WeekendMajor,
    Meeting,
    Other,
    External,
    SeasonRegistration,
    Deadline,
    Open,
    MatchPlay,
}

impl EventType {
    /// Parse an event type from its storage code.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "N" => Some(Self::Weeknight),
            "W" => Some(Self::WeekendMajor),
            "M" => Some(Self::Meeting),
            "O" => Some(Self::Other),
            "E" => Some(Self::External),
            "R" => Some(Self::SeasonRegistration),
            "D" => Some(Self::Deadline),
            "P" => Some(Self::Open),
            "S" => Some(Self::MatchPlay),
            _ => None,
        }
    }

    /// Storage code for this event type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weeknight => "N",
            Self::WeekendMajor => "W",
            Self::Meeting => "M",
            Self::Other => "O",
            Self::External => "E",
            Self::SeasonRegistration => "R",
            Self::Deadline => "D",
            Self::Open => "P",
            Self::MatchPlay => "S",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        value.as_str().to_string()
    }
}

impl TryFrom<String> for EventType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown event type code: {value}"))
    }
}

/// Scheduling status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventStatus {
    Canceled,
    Scheduled,
    Tentative,
}

impl EventStatus {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "C" => Some(Self::Canceled),
            "S" => Some(Self::Scheduled),
            "T" => Some(Self::Tentative),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Canceled => "C",
            Self::Scheduled => "S",
            Self::Tentative => "T",
        }
    }
}

impl From<EventStatus> for String {
    fn from(value: EventStatus) -> Self {
        value.as_str().to_string()
    }
}

impl TryFrom<String> for EventStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown event status code: {value}"))
    }
}

/// A club event within a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub event_type: EventType,
    pub name: String,
    pub season: i32,
    pub start_date: NaiveDate,
    pub status: EventStatus,
    pub rounds: Option<i32>,
    pub gg_id: Option<String>,
}

/// Data for creating a new event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub event_type: EventType,
    pub name: String,
    pub season: i32,
    pub start_date: NaiveDate,
    pub status: EventStatus,
    pub rounds: Option<i32>,
    pub gg_id: Option<String>,
}

/// One round of play for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: i64,
    pub event_id: i64,
    pub round_number: i32,
    pub round_date: NaiveDate,
    pub gg_id: String,
}

/// Data for creating a new round.
#[derive(Debug, Clone)]
pub struct NewRound {
    pub event_id: i64,
    pub round_number: i32,
    pub round_date: NaiveDate,
    pub gg_id: String,
}

/// A scored competition played during a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: i64,
    pub event_id: i64,
    pub round_id: i64,
    pub name: String,
    pub format: Option<String>,
    pub is_net: bool,
    pub gg_id: String,
}

/// Data for creating a new tournament.
#[derive(Debug, Clone)]
pub struct NewTournament {
    pub event_id: i64,
    pub round_id: i64,
    pub name: String,
    pub format: Option<String>,
    pub is_net: bool,
    pub gg_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_codes_roundtrip() {
        for code in ["N", "W", "M", "O", "E", "R", "D", "P", "S"] {
            let parsed = EventType::parse(code).unwrap();
            assert_eq!(parsed.as_str(), code);
        }
        assert_eq!(EventType::parse("X"), None);
    }

    #[test]
    fn test_event_serializes_codes() {
        let event = Event {
            id: 1,
            event_type: EventType::WeekendMajor,
            name: "Club Championship".to_string(),
            season: 2024,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            status: EventStatus::Scheduled,
            rounds: Some(2),
            gg_id: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "W");
        assert_eq!(json["status"], "S");
        assert_eq!(json["start_date"], "2024-06-01");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<EventStatus, _> = serde_json::from_str("\"Z\"");
        assert!(result.is_err());
    }
}
