//! Tournament list logic: searchable text, filtering, month grouping, facets.

mod catalog;
mod facets;
mod grouping;
mod query;
mod search_text;

pub use catalog::Catalog;
pub use facets::{date_facets, type_facets, DateFacet, ALL};
pub use grouping::{group_by_month, GroupedTournaments, MonthGroup};
pub use query::{filter_tournaments, DateFilter, Query, TypeFilter};
pub use search_text::{date_tokens, searchable_text, SearchIndex, TOKENS_PER_DATE};
