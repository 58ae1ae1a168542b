//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use tournament_finder::{Tournament, TournamentStatus, TournamentType};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn tournament(
    id: u32,
    name: &str,
    start: &str,
    end: &str,
    kind: TournamentType,
    status: TournamentStatus,
) -> Tournament {
    Tournament::new(id, name, date(start), date(end), kind, status)
}

/// Mixed store spanning June and July 2025, not in calendar order.
pub fn mixed_store() -> Vec<Tournament> {
    use TournamentStatus::*;
    use TournamentType::*;
    vec![
        tournament(1, "Rapid 10|0", "2025-06-20", "2025-06-24", Rapid, Ongoing),
        tournament(2, "Blitz 5|0", "2025-07-02", "2025-07-03", Blitz, Upcoming),
        tournament(3, "Summer Classical", "2025-06-01", "2025-06-10", Classical, Completed),
        tournament(4, "Bullet Night", "2025-07-15", "2025-07-15", Bullet, Upcoming),
        tournament(5, "Blitz Arena", "2025-06-20", "2025-06-24", Blitz, Ongoing),
    ]
}

pub fn ids(tournaments: &[&Tournament]) -> Vec<u32> {
    tournaments.iter().map(|t| t.id).collect()
}
