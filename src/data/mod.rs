//! Getting tournaments into the store: wire records, validation, file sources.

mod ingest;
mod source;

pub use ingest::{
    demo_records, demo_tournaments, ingest, ingest_decoded, Decoded, Ingested, PlayersField,
    RawTournament, RejectedRecord,
};
pub use source::{
    decode_json_record, load_file, parse, parse_csv, parse_json, SourceError, SourceFormat,
};
