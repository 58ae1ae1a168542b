//! Loading tournament records from JSON or CSV files.

use crate::data::ingest::{ingest_decoded, Decoded, Ingested, PlayersField, RawTournament};
use crate::models::{TournamentError, TournamentId, Winners, TBD};
use serde::Deserialize;
use std::path::Path;

/// Errors that make a whole source unreadable (as opposed to one bad record).
#[derive(Debug)]
pub enum SourceError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    /// File extension is neither `.json` nor `.csv`.
    UnsupportedFormat(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Io(e) => write!(f, "Could not read tournament data: {}", e),
            SourceError::Json(e) => write!(f, "Invalid tournament JSON: {}", e),
            SourceError::Csv(e) => write!(f, "Invalid tournament CSV: {}", e),
            SourceError::UnsupportedFormat(p) => {
                write!(f, "Unsupported tournament data file (expected .json or .csv): {}", p)
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io(e) => Some(e),
            SourceError::Json(e) => Some(e),
            SourceError::Csv(e) => Some(e),
            SourceError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Json(e)
    }
}

impl From<csv::Error> for SourceError {
    fn from(e: csv::Error) -> Self {
        SourceError::Csv(e)
    }
}

/// On-disk layout of a tournament data file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceFormat {
    Json,
    Csv,
}

impl SourceFormat {
    /// Pick the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(SourceFormat::Json),
            Some("csv") => Ok(SourceFormat::Csv),
            _ => Err(SourceError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// One CSV row. Podium places are flattened into their own columns.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRecord {
    id: TournamentId,
    name: String,
    start_date: Option<String>,
    end_date: Option<String>,
    date: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    status: String,
    players: Option<String>,
    gold: Option<String>,
    silver: Option<String>,
    bronze: Option<String>,
    excel_link: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<CsvRecord> for RawTournament {
    fn from(r: CsvRecord) -> Self {
        let place = |v: Option<String>| non_empty(v).unwrap_or_else(|| TBD.to_string());
        RawTournament {
            id: r.id,
            name: r.name,
            start_date: non_empty(r.start_date),
            end_date: non_empty(r.end_date),
            date: non_empty(r.date),
            kind: r.kind,
            status: r.status,
            players: PlayersField::Label(r.players.unwrap_or_default()),
            winners: Some(Winners {
                gold: place(r.gold),
                silver: place(r.silver),
                bronze: place(r.bronze),
            }),
            excel_link: non_empty(r.excel_link),
        }
    }
}

/// Decode one JSON value into a wire record; a type mismatch rejects only this record.
pub fn decode_json_record(value: serde_json::Value) -> Decoded {
    serde_json::from_value(value).map_err(|e| TournamentError::MalformedRecord(e.to_string()))
}

/// Parse a JSON array of tournament records. Only a broken array fails as a whole;
/// each element is decoded on its own.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<Decoded>, SourceError> {
    let values: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
    Ok(values.into_iter().map(decode_json_record).collect())
}

/// Parse CSV rows (with a header line) into tournament records.
/// A row that cannot be read or decoded becomes a per-record error.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<Decoded>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let headers = reader.headers()?.clone();
    let mut records: Vec<Decoded> = Vec::new();
    for row in reader.records() {
        let decoded = row
            .and_then(|row| row.deserialize::<CsvRecord>(Some(&headers)))
            .map(RawTournament::from)
            .map_err(|e| TournamentError::MalformedRecord(e.to_string()));
        records.push(decoded);
    }
    Ok(records)
}

/// Parse and validate file contents. Bad records end up in `Ingested::rejected`.
pub fn parse(format: SourceFormat, bytes: &[u8]) -> Result<Ingested, SourceError> {
    let records = match format {
        SourceFormat::Json => parse_json(bytes)?,
        SourceFormat::Csv => parse_csv(bytes)?,
    };
    Ok(ingest_decoded(records))
}

/// Read, parse and validate a tournament data file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Ingested, SourceError> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path)?;
    let bytes = std::fs::read(path)?;
    let ingested = parse(format, &bytes)?;
    log::info!(
        "Loaded {} tournament(s) from {} ({} rejected)",
        ingested.tournaments.len(),
        path.display(),
        ingested.rejected.len()
    );
    Ok(ingested)
}
