//! Tournament record and TournamentError.

use crate::models::category::{TournamentStatus, TournamentType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a tournament (stable across reorderings).
pub type TournamentId = u32;

/// Placeholder shown for a podium place that has not been decided.
pub const TBD: &str = "TBD";

/// Date layout accepted and rendered for `startDate` / `endDate`.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// Errors raised while validating tournament records or queries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A date field is not a strict `YYYY-MM-DD` calendar date.
    MalformedDate { field: &'static str, value: String },
    /// Neither the range form nor the single `date` form supplied this field.
    MissingDate(&'static str),
    /// `type` is not one of rapid, blitz, bullet, classical.
    UnknownType(String),
    /// `status` is not one of upcoming, ongoing, completed.
    UnknownStatus(String),
    /// `startDate` is after `endDate`.
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    /// Another record in the same batch already uses this id.
    DuplicateId(TournamentId),
    /// A date filter key is neither `all` nor `{startDate}_{endDate}`.
    InvalidDateFilter(String),
    /// No tournament with this id in the store.
    TournamentNotFound(TournamentId),
    /// The record could not be decoded at all (wrong field types, missing fields).
    MalformedRecord(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::MalformedDate { field, value } => {
                write!(f, "{} is not a YYYY-MM-DD date: {:?}", field, value)
            }
            TournamentError::MissingDate(field) => write!(f, "Missing {}", field),
            TournamentError::UnknownType(t) => write!(f, "Unknown tournament type: {:?}", t),
            TournamentError::UnknownStatus(s) => write!(f, "Unknown tournament status: {:?}", s),
            TournamentError::InvalidDateRange { start, end } => {
                write!(f, "Start date {} is after end date {}", start, end)
            }
            TournamentError::DuplicateId(id) => write!(f, "Duplicate tournament id {}", id),
            TournamentError::InvalidDateFilter(key) => write!(f, "Invalid date filter: {:?}", key),
            TournamentError::TournamentNotFound(id) => write!(f, "No tournament with id {}", id),
            TournamentError::MalformedRecord(reason) => write!(f, "Malformed record: {}", reason),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Podium for a tournament; each place is a player name or [`TBD`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Winners {
    pub gold: String,
    pub silver: String,
    pub bronze: String,
}

impl Default for Winners {
    fn default() -> Self {
        Self {
            gold: TBD.to_string(),
            silver: TBD.to_string(),
            bronze: TBD.to_string(),
        }
    }
}

/// A validated tournament. Single-date records have `start_date == end_date`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TournamentType,
    pub status: TournamentStatus,
    /// Player count or free-form label; display only.
    pub players: String,
    pub winners: Winners,
    pub excel_link: String,
}

impl Tournament {
    /// Create a range-form tournament with placeholder players, winners and link.
    pub fn new(
        id: TournamentId,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        kind: TournamentType,
        status: TournamentStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start_date,
            end_date,
            kind,
            status,
            players: String::new(),
            winners: Winners::default(),
            excel_link: "#".to_string(),
        }
    }

    /// `startDate` exactly as it appears on the wire.
    pub fn raw_start_date(&self) -> String {
        self.start_date.format(ISO_DATE).to_string()
    }

    /// `endDate` exactly as it appears on the wire.
    pub fn raw_end_date(&self) -> String {
        self.end_date.format(ISO_DATE).to_string()
    }

    /// Month section this tournament is listed under, e.g. "June 2025".
    pub fn month_label(&self) -> String {
        self.start_date.format("%B %Y").to_string()
    }

    /// Card / detail label, e.g. "Jun 20, 2025 - Jun 24, 2025".
    pub fn date_range_label(&self) -> String {
        format!(
            "{} - {}",
            self.start_date.format("%b %-d, %Y"),
            self.end_date.format("%b %-d, %Y")
        )
    }
}

/// Parse a strict ISO calendar date; `field` names the source field in the error.
pub fn parse_iso_date(field: &'static str, value: &str) -> Result<NaiveDate, TournamentError> {
    let malformed = || TournamentError::MalformedDate {
        field,
        value: value.to_string(),
    };
    let date = NaiveDate::parse_from_str(value, ISO_DATE).map_err(|_| malformed())?;
    // chrono accepts unpadded fields; the raw string must round-trip for search.
    if date.format(ISO_DATE).to_string() != value {
        return Err(malformed());
    }
    Ok(date)
}
