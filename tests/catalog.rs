//! Integration tests for the catalog snapshot.

mod common;

use common::{ids, mixed_store};
use tournament_finder::{Catalog, Query, TournamentError, TournamentType};

#[test]
fn get_finds_by_id_or_reports_not_found() {
    let catalog = Catalog::new(mixed_store());
    assert_eq!(catalog.get(4).unwrap().name, "Bullet Night");
    assert_eq!(catalog.get(42), Err(TournamentError::TournamentNotFound(42)));
}

#[test]
fn search_filters_then_groups() {
    let catalog = Catalog::new(mixed_store());
    let q = Query::parse("2025", "blitz", "all").unwrap();
    let grouped = catalog.search(&q);
    assert_eq!(grouped.total(), 2);
    assert_eq!(ids(&grouped.get("July 2025").unwrap().upcoming), vec![2]);
    assert_eq!(ids(&grouped.get("June 2025").unwrap().ongoing), vec![5]);
}

#[test]
fn rebuilding_from_the_same_store_gives_the_same_answers() {
    let store = mixed_store();
    let first = Catalog::new(store.clone());
    let second = Catalog::new(store);
    let q = Query::default().with_search("june").with_type(TournamentType::Rapid);
    assert_eq!(ids(&first.filter(&q)), ids(&second.filter(&q)));
    assert_eq!(first.search(&q), second.search(&q));
    assert_eq!(first.date_facets(), second.date_facets());
}

#[test]
fn empty_catalog_answers_with_empty_results() {
    let catalog = Catalog::new(Vec::new());
    assert!(catalog.is_empty());
    assert!(catalog.filter(&Query::default()).is_empty());
    assert!(catalog.search(&Query::default().with_search("june")).is_empty());
}
