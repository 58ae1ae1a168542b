//! Selectable values for the type and date facets.

use crate::models::{parse_iso_date, Tournament, TournamentError, TournamentType, ISO_DATE};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::str::FromStr;

/// Facet value meaning "no filter".
pub const ALL: &str = "all";

/// One `(startDate, endDate)` pair offered by the date selector.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateFacet {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateFacet {
    pub fn of(tournament: &Tournament) -> Self {
        Self {
            start_date: tournament.start_date,
            end_date: tournament.end_date,
        }
    }

    /// Selector key, `"{startDate}_{endDate}"`.
    pub fn key(&self) -> String {
        format!(
            "{}_{}",
            self.start_date.format(ISO_DATE),
            self.end_date.format(ISO_DATE)
        )
    }

    /// Selector label, e.g. "Jun 20 - Jun 24, 2025".
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start_date.format("%b %-d"),
            self.end_date.format("%b %-d, %Y")
        )
    }

    pub fn matches(&self, tournament: &Tournament) -> bool {
        tournament.start_date == self.start_date && tournament.end_date == self.end_date
    }
}

impl FromStr for DateFacet {
    type Err = TournamentError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || TournamentError::InvalidDateFilter(key.to_string());
        let (start, end) = key.split_once('_').ok_or_else(invalid)?;
        let start_date = parse_iso_date("startDate", start).map_err(|_| invalid())?;
        let end_date = parse_iso_date("endDate", end).map_err(|_| invalid())?;
        Ok(Self {
            start_date,
            end_date,
        })
    }
}

impl Serialize for DateFacet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire {
            key: String,
            label: String,
            start_date: NaiveDate,
            end_date: NaiveDate,
        }
        Wire {
            key: self.key(),
            label: self.label(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
        .serialize(serializer)
    }
}

/// Distinct date ranges in the store, sorted by key.
///
/// Key order is calendar order because ISO dates sort lexicographically.
pub fn date_facets(tournaments: &[Tournament]) -> Vec<DateFacet> {
    let mut seen = HashSet::new();
    let mut facets: Vec<DateFacet> = tournaments
        .iter()
        .map(DateFacet::of)
        .filter(|f| seen.insert(*f))
        .collect();
    facets.sort_by_cached_key(DateFacet::key);
    facets
}

/// Type selector values: `all`, then every type.
pub fn type_facets() -> Vec<&'static str> {
    std::iter::once(ALL)
        .chain(TournamentType::ALL.iter().map(|t| t.as_str()))
        .collect()
}
