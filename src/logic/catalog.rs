//! Catalog: an immutable store snapshot with its derived search index and date facets.

use crate::logic::facets::{date_facets, DateFacet};
use crate::logic::grouping::{group_by_month, GroupedTournaments};
use crate::logic::query::Query;
use crate::logic::search_text::SearchIndex;
use crate::models::{Tournament, TournamentError, TournamentId};

/// A store and everything derived from it. Never mutated: a new store means a new catalog.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    tournaments: Vec<Tournament>,
    index: SearchIndex,
    date_facets: Vec<DateFacet>,
}

impl Catalog {
    pub fn new(tournaments: Vec<Tournament>) -> Self {
        let index = SearchIndex::build(&tournaments);
        let date_facets = date_facets(&tournaments);
        log::info!(
            "Built catalog: {} tournament(s), {} date range(s)",
            tournaments.len(),
            date_facets.len()
        );
        Self {
            tournaments,
            index,
            date_facets,
        }
    }

    pub fn date_facets(&self) -> &[DateFacet] {
        &self.date_facets
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    /// Look up one tournament for the detail view.
    pub fn get(&self, id: TournamentId) -> Result<&Tournament, TournamentError> {
        self.tournaments
            .iter()
            .find(|t| t.id == id)
            .ok_or(TournamentError::TournamentNotFound(id))
    }

    /// Stable filter using the precomputed search index.
    pub fn filter(&self, query: &Query) -> Vec<&Tournament> {
        let terms = query.terms();
        let filtered: Vec<&Tournament> = self
            .tournaments
            .iter()
            .enumerate()
            .filter(|(_, t)| query.facets_match(t))
            .filter(|(i, _)| {
                terms.is_empty()
                    || self
                        .index
                        .get(*i)
                        .is_some_and(|text| Query::text_matches(&terms, text))
            })
            .map(|(_, t)| t)
            .collect();
        log::debug!(
            "Query {:?} matched {} of {} tournament(s)",
            query.search,
            filtered.len(),
            self.tournaments.len()
        );
        filtered
    }

    /// Filter, then group into month sections.
    pub fn search(&self, query: &Query) -> GroupedTournaments<'_> {
        group_by_month(self.filter(query))
    }
}
