//! Query engine: free-text search, type facet and date facet combined into one predicate.

use crate::logic::facets::{DateFacet, ALL};
use crate::logic::search_text::searchable_text;
use crate::models::{Tournament, TournamentError, TournamentType};
use std::str::FromStr;

/// Type facet selection.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TournamentType),
}

impl FromStr for TypeFilter {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(TypeFilter::All)
        } else {
            s.parse().map(TypeFilter::Only)
        }
    }
}

impl TypeFilter {
    pub fn matches(&self, tournament: &Tournament) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(kind) => tournament.kind == *kind,
        }
    }
}

/// Date facet selection.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DateFilter {
    #[default]
    All,
    Range(DateFacet),
}

impl FromStr for DateFilter {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(DateFilter::All)
        } else {
            s.parse().map(DateFilter::Range)
        }
    }
}

impl DateFilter {
    pub fn matches(&self, tournament: &Tournament) -> bool {
        match self {
            DateFilter::All => true,
            DateFilter::Range(facet) => facet.matches(tournament),
        }
    }
}

/// A full filter: search text plus both facets. The default matches everything.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Query {
    pub search: String,
    pub kind: TypeFilter,
    pub date: DateFilter,
}

impl Query {
    /// Build a query from raw control values (`"all"` disables a facet).
    pub fn parse(search: &str, type_filter: &str, date_filter: &str) -> Result<Self, TournamentError> {
        Ok(Self {
            search: search.to_string(),
            kind: type_filter.parse()?,
            date: date_filter.parse()?,
        })
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_type(mut self, kind: TournamentType) -> Self {
        self.kind = TypeFilter::Only(kind);
        self
    }

    pub fn with_date(mut self, facet: DateFacet) -> Self {
        self.date = DateFilter::Range(facet);
        self
    }

    /// Lowercase search terms. Empty for an empty or all-whitespace search,
    /// in which case the search predicate is off.
    pub fn terms(&self) -> Vec<String> {
        self.search
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }

    /// True when every term is a substring of `text` (already lowercased).
    pub fn text_matches(terms: &[String], text: &str) -> bool {
        terms.iter().all(|term| text.contains(term.as_str()))
    }

    /// Facet predicates only; search is checked separately against searchable text.
    pub fn facets_match(&self, tournament: &Tournament) -> bool {
        self.kind.matches(tournament) && self.date.matches(tournament)
    }
}

/// Stable filter of `tournaments` by `query`, building searchable text on the fly.
pub fn filter_tournaments<'a>(tournaments: &'a [Tournament], query: &Query) -> Vec<&'a Tournament> {
    let terms = query.terms();
    tournaments
        .iter()
        .filter(|t| query.facets_match(t))
        .filter(|t| terms.is_empty() || Query::text_matches(&terms, &searchable_text(t)))
        .collect()
}
