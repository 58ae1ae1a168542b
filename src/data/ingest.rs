//! Wire records from a data source and their validation into [`Tournament`]s.

use crate::models::{
    parse_iso_date, Tournament, TournamentError, TournamentId, TournamentStatus, TournamentType,
    Winners,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Player count as supplied: a number or a free-form label such as "07".
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayersField {
    Count(u64),
    Label(String),
}

impl Default for PlayersField {
    fn default() -> Self {
        PlayersField::Label(String::new())
    }
}

impl std::fmt::Display for PlayersField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayersField::Count(n) => write!(f, "{}", n),
            PlayersField::Label(s) => f.write_str(s),
        }
    }
}

/// A tournament as it arrives from a data source, before validation.
///
/// Two shapes are accepted: a range (`startDate` + `endDate`) or a single
/// `date` that stands for both ends. Explicit range fields win over `date`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTournament {
    pub id: TournamentId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(default)]
    pub players: PlayersField,
    #[serde(default)]
    pub winners: Option<Winners>,
    #[serde(default)]
    pub excel_link: Option<String>,
}

impl TryFrom<RawTournament> for Tournament {
    type Error = TournamentError;

    fn try_from(raw: RawTournament) -> Result<Self, Self::Error> {
        let start = raw
            .start_date
            .as_deref()
            .or(raw.date.as_deref())
            .ok_or(TournamentError::MissingDate("startDate"))?;
        let end = raw
            .end_date
            .as_deref()
            .or(raw.date.as_deref())
            .ok_or(TournamentError::MissingDate("endDate"))?;
        let start_date = parse_iso_date("startDate", start)?;
        let end_date = parse_iso_date("endDate", end)?;
        if start_date > end_date {
            return Err(TournamentError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        let kind: TournamentType = raw.kind.parse()?;
        let status: TournamentStatus = raw.status.parse()?;
        Ok(Tournament {
            id: raw.id,
            name: raw.name,
            start_date,
            end_date,
            kind,
            status,
            players: raw.players.to_string(),
            winners: raw.winners.unwrap_or_default(),
            excel_link: raw
                .excel_link
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| "#".to_string()),
        })
    }
}

/// A record as it came out of a decoder: either a wire record or the reason it
/// could not be read.
pub type Decoded = Result<RawTournament, TournamentError>;

/// A record that failed decoding or validation, with its position in the source batch.
/// `id` is `None` when the record was too broken to read one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RejectedRecord {
    pub position: usize,
    pub id: Option<TournamentId>,
    pub error: TournamentError,
}

/// Result of validating a batch: accepted tournaments in source order, plus rejects.
#[derive(Clone, Debug, Default)]
pub struct Ingested {
    pub tournaments: Vec<Tournament>,
    pub rejected: Vec<RejectedRecord>,
}

/// Validate a batch of decoded wire records.
pub fn ingest(records: impl IntoIterator<Item = RawTournament>) -> Ingested {
    ingest_decoded(records.into_iter().map(Ok))
}

/// Validate a batch record by record, including records that failed to decode.
/// A bad record is logged and skipped; it never aborts the batch.
/// For duplicate ids the first record wins.
pub fn ingest_decoded(records: impl IntoIterator<Item = Decoded>) -> Ingested {
    let mut out = Ingested::default();
    let mut seen: HashSet<TournamentId> = HashSet::new();
    for (position, decoded) in records.into_iter().enumerate() {
        let id = decoded.as_ref().ok().map(|raw| raw.id);
        let result = decoded.and_then(|raw| {
            if seen.contains(&raw.id) {
                Err(TournamentError::DuplicateId(raw.id))
            } else {
                Tournament::try_from(raw)
            }
        });
        match result {
            Ok(t) => {
                seen.insert(t.id);
                out.tournaments.push(t);
            }
            Err(error) => {
                log::warn!("Skipping tournament record #{}: {}", position, error);
                out.rejected.push(RejectedRecord {
                    position,
                    id,
                    error,
                });
            }
        }
    }
    out
}

/// Built-in store used when no data file is configured.
pub fn demo_records() -> Vec<RawTournament> {
    vec![
        RawTournament {
            id: 1,
            name: "Rapid 10|0 & 30|0".to_string(),
            start_date: Some("2025-06-20".to_string()),
            end_date: Some("2025-06-24".to_string()),
            date: None,
            kind: "rapid".to_string(),
            status: "ongoing".to_string(),
            players: PlayersField::Label("07".to_string()),
            winners: None,
            excel_link: Some(
                "https://docs.google.com/spreadsheets/d/16Kk1npleEeacmeK6VBTgHqcJDBwGJApglwTN5XLLjdQ/edit?gid=0#gid=0"
                    .to_string(),
            ),
        },
        RawTournament {
            id: 2,
            name: "Blitz 5|0".to_string(),
            start_date: Some("2025-06-25".to_string()),
            end_date: Some("2025-06-30".to_string()),
            date: None,
            kind: "blitz".to_string(),
            status: "upcoming".to_string(),
            players: PlayersField::Label("32".to_string()),
            winners: None,
            excel_link: Some("#".to_string()),
        },
    ]
}

/// The demo store, validated.
pub fn demo_tournaments() -> Vec<Tournament> {
    ingest(demo_records()).tournaments
}
