//! TournamentType and TournamentStatus: the two closed enumerations on a tournament.

use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Time control of a tournament.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentType {
    Rapid,
    Blitz,
    Bullet,
    Classical,
}

impl TournamentType {
    /// All types in selector order.
    pub const ALL: [TournamentType; 4] = [
        TournamentType::Rapid,
        TournamentType::Blitz,
        TournamentType::Bullet,
        TournamentType::Classical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TournamentType::Rapid => "rapid",
            TournamentType::Blitz => "blitz",
            TournamentType::Bullet => "bullet",
            TournamentType::Classical => "classical",
        }
    }
}

impl FromStr for TournamentType {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TournamentError::UnknownType(s.to_string()))
    }
}

impl std::fmt::Display for TournamentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status; each month section has one bucket per status.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl TournamentStatus {
    pub const ALL: [TournamentStatus; 3] = [
        TournamentStatus::Upcoming,
        TournamentStatus::Ongoing,
        TournamentStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "upcoming",
            TournamentStatus::Ongoing => "ongoing",
            TournamentStatus::Completed => "completed",
        }
    }
}

impl FromStr for TournamentStatus {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| TournamentError::UnknownStatus(s.to_string()))
    }
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
