//! Searchable text: one lowercase string per tournament holding every way a
//! user might type its dates.

use crate::models::Tournament;
use chrono::{Datelike, NaiveDate};

/// Number of renderings produced for one date.
pub const TOKENS_PER_DATE: usize = 16;

const MONTH_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

const SHORT_MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// All renderings of one date, in a fixed order:
///
/// 1. bare components: year, month name, short month, `MM`, day (no leading zero);
/// 2. composites: `month year`, `mon year`, `MM/year`, `d/MM`, `d/MM/year`,
///    `month d`, `mon d`, `year-MM`, `year/MM`, `MM-d-year`, `d-MM-year`.
pub fn date_tokens(date: NaiveDate) -> [String; TOKENS_PER_DATE] {
    let year = date.year().to_string();
    let month_idx = date.month0() as usize;
    let month = MONTH_NAMES[month_idx];
    let short = SHORT_MONTH_NAMES[month_idx];
    let mm = format!("{:02}", date.month());
    let day = date.day().to_string();

    [
        year.clone(),
        month.to_string(),
        short.to_string(),
        mm.clone(),
        day.clone(),
        format!("{month} {year}"),
        format!("{short} {year}"),
        format!("{mm}/{year}"),
        format!("{day}/{mm}"),
        format!("{day}/{mm}/{year}"),
        format!("{month} {day}"),
        format!("{short} {day}"),
        format!("{year}-{mm}"),
        format!("{year}/{mm}"),
        format!("{mm}-{day}-{year}"),
        format!("{day}-{mm}-{year}"),
    ]
}

/// Name, raw dates, type, status and both dates' tokens, space-joined and lowercased.
pub fn searchable_text(tournament: &Tournament) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(5 + 2 * TOKENS_PER_DATE);
    parts.push(tournament.name.clone());
    parts.push(tournament.raw_start_date());
    parts.push(tournament.raw_end_date());
    parts.push(tournament.kind.as_str().to_string());
    parts.push(tournament.status.as_str().to_string());
    parts.extend(date_tokens(tournament.start_date));
    parts.extend(date_tokens(tournament.end_date));
    parts.join(" ").to_lowercase()
}

/// Searchable text for a whole store, position-aligned with it.
///
/// Built once per store; a changed store gets a fresh index, never a patched one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchIndex {
    entries: Vec<String>,
}

impl SearchIndex {
    pub fn build(tournaments: &[Tournament]) -> Self {
        Self {
            entries: tournaments.iter().map(searchable_text).collect(),
        }
    }

    /// Text for the tournament at `position` in the store it was built from.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
