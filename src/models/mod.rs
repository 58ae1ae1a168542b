//! Data structures for the tournament list: tournaments, types, statuses.

mod category;
mod tournament;

pub use category::{TournamentStatus, TournamentType};
pub use tournament::{
    parse_iso_date, Tournament, TournamentError, TournamentId, Winners, ISO_DATE, TBD,
};
