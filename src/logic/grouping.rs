//! Grouping of filtered tournaments into month sections with one bucket per status.

use crate::models::{Tournament, TournamentStatus};
use serde::Serialize;
use std::collections::HashMap;

/// One month section, e.g. "June 2025". Buckets keep filtered order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MonthGroup<'a> {
    pub month: String,
    pub ongoing: Vec<&'a Tournament>,
    pub upcoming: Vec<&'a Tournament>,
    pub completed: Vec<&'a Tournament>,
}

impl<'a> MonthGroup<'a> {
    fn new(month: String) -> Self {
        Self {
            month,
            ongoing: Vec::new(),
            upcoming: Vec::new(),
            completed: Vec::new(),
        }
    }

    pub fn bucket(&self, status: TournamentStatus) -> &[&'a Tournament] {
        match status {
            TournamentStatus::Ongoing => &self.ongoing,
            TournamentStatus::Upcoming => &self.upcoming,
            TournamentStatus::Completed => &self.completed,
        }
    }

    fn bucket_mut(&mut self, status: TournamentStatus) -> &mut Vec<&'a Tournament> {
        match status {
            TournamentStatus::Ongoing => &mut self.ongoing,
            TournamentStatus::Upcoming => &mut self.upcoming,
            TournamentStatus::Completed => &mut self.completed,
        }
    }

    pub fn len(&self) -> usize {
        self.ongoing.len() + self.upcoming.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Month label → status buckets, in order of first appearance (not calendar order).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroupedTournaments<'a> {
    groups: Vec<MonthGroup<'a>>,
}

impl<'a> GroupedTournaments<'a> {
    pub fn get(&self, month: &str) -> Option<&MonthGroup<'a>> {
        self.groups.iter().find(|g| g.month == month)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthGroup<'a>> {
        self.groups.iter()
    }

    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.month.as_str())
    }

    /// Number of month sections.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Tournaments across all sections and buckets.
    pub fn total(&self) -> usize {
        self.groups.iter().map(MonthGroup::len).sum()
    }
}

impl<'g, 'a> IntoIterator for &'g GroupedTournaments<'a> {
    type Item = &'g MonthGroup<'a>;
    type IntoIter = std::slice::Iter<'g, MonthGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Partition tournaments by the month of their start date, then by status.
pub fn group_by_month<'a>(
    tournaments: impl IntoIterator<Item = &'a Tournament>,
) -> GroupedTournaments<'a> {
    let mut groups: Vec<MonthGroup<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for t in tournaments {
        let month = t.month_label();
        let i = match index.get(&month) {
            Some(&i) => i,
            None => {
                index.insert(month.clone(), groups.len());
                groups.push(MonthGroup::new(month));
                groups.len() - 1
            }
        };
        groups[i].bucket_mut(t.status).push(t);
    }
    GroupedTournaments { groups }
}
