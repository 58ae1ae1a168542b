//! Chess tournament finder: library with models, data loading and the search/grouping engine.

pub mod data;
pub mod logic;
pub mod models;

pub use data::{
    demo_tournaments, ingest, load_file, Ingested, RawTournament, RejectedRecord, SourceError,
    SourceFormat,
};
pub use logic::{
    date_facets, filter_tournaments, group_by_month, searchable_text, type_facets, Catalog,
    DateFacet, DateFilter, GroupedTournaments, MonthGroup, Query, TypeFilter,
};
pub use models::{
    Tournament, TournamentError, TournamentId, TournamentStatus, TournamentType, Winners,
};
