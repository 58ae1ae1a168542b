//! Integration tests for month/status grouping.

mod common;

use common::{ids, mixed_store, tournament};
use tournament_finder::{
    demo_tournaments, filter_tournaments, group_by_month, Catalog, Query, Tournament,
    TournamentStatus, TournamentType,
};

#[test]
fn same_month_different_status_share_one_section() {
    use TournamentStatus::*;
    let store = vec![
        tournament(1, "Rapid", "2025-06-20", "2025-06-24", TournamentType::Rapid, Ongoing),
        tournament(2, "Blitz", "2025-06-25", "2025-06-30", TournamentType::Blitz, Upcoming),
    ];
    let grouped = group_by_month(&store);
    assert_eq!(grouped.len(), 1);
    let june = grouped.get("June 2025").unwrap();
    assert_eq!(ids(&june.ongoing), vec![1]);
    assert_eq!(ids(&june.upcoming), vec![2]);
    assert!(june.completed.is_empty());
    assert_eq!(june.bucket(Completed).len(), 0);
}

#[test]
fn months_follow_first_appearance_not_calendar_order() {
    let store = mixed_store();
    let grouped = group_by_month(&store);
    let months: Vec<&str> = grouped.months().collect();
    assert_eq!(months, vec!["June 2025", "July 2025"]);

    let reversed: Vec<_> = store.iter().rev().collect();
    let grouped = group_by_month(reversed);
    let months: Vec<&str> = grouped.months().collect();
    assert_eq!(months, vec!["June 2025", "July 2025"]);

    let july_first = vec![store[1].clone(), store[0].clone()];
    let grouped = group_by_month(&july_first);
    let months: Vec<&str> = grouped.months().collect();
    assert_eq!(months, vec!["July 2025", "June 2025"]);
}

#[test]
fn buckets_keep_filtered_order() {
    let store = mixed_store();
    let grouped = group_by_month(&store);
    let june = grouped.get("June 2025").unwrap();
    assert_eq!(ids(&june.ongoing), vec![1, 5]);
    assert_eq!(ids(&june.completed), vec![3]);
    let july = grouped.get("July 2025").unwrap();
    assert_eq!(ids(&july.upcoming), vec![2, 4]);
}

#[test]
fn month_is_taken_from_start_date() {
    let store = vec![tournament(
        9,
        "Year End Classical",
        "2025-12-28",
        "2026-01-03",
        TournamentType::Classical,
        TournamentStatus::Upcoming,
    )];
    let grouped = group_by_month(&store);
    assert!(grouped.get("December 2025").is_some());
    assert!(grouped.get("January 2026").is_none());
}

#[test]
fn grouping_partitions_the_filtered_input() {
    let store = mixed_store();
    for search in ["", "2025", "june", "blitz", "upcoming", "no-such-thing"] {
        let q = Query::default().with_search(search);
        let filtered = filter_tournaments(&store, &q);
        let grouped = group_by_month(filtered.iter().copied());
        assert_eq!(grouped.total(), filtered.len(), "search {search:?}");

        let mut seen: Vec<u32> = grouped
            .iter()
            .flat_map(|g| {
                TournamentStatus::ALL
                    .into_iter()
                    .flat_map(move |s| g.bucket(s).iter().map(|t| t.id))
            })
            .collect();
        seen.sort_unstable();
        let mut expected = ids(&filtered);
        expected.sort_unstable();
        assert_eq!(seen, expected);
    }
}

#[test]
fn empty_result_is_an_empty_grouping() {
    let store: Vec<Tournament> = Vec::new();
    let grouped = group_by_month(&store);
    assert!(grouped.is_empty());
    assert_eq!(grouped.total(), 0);
    assert_eq!(serde_json::to_string(&grouped).unwrap(), "[]");
}

#[test]
fn demo_store_groups_into_june() {
    let catalog = Catalog::new(demo_tournaments());
    let grouped = catalog.search(&Query::default());
    assert_eq!(grouped.len(), 1);
    let june = grouped.get("June 2025").unwrap();
    assert_eq!(june.len(), 2);
    assert_eq!(june.ongoing[0].name, "Rapid 10|0 & 30|0");
    assert_eq!(june.upcoming[0].name, "Blitz 5|0");
}

#[test]
fn grouping_serializes_as_ordered_sections() {
    let store = mixed_store();
    let grouped = group_by_month(&store);
    let json = serde_json::to_value(&grouped).unwrap();
    assert_eq!(json[0]["month"], "June 2025");
    assert_eq!(json[0]["ongoing"][0]["startDate"], "2025-06-20");
    assert_eq!(json[0]["ongoing"][0]["type"], "rapid");
    assert_eq!(json[1]["month"], "July 2025");
    assert_eq!(json[1]["upcoming"].as_array().map(Vec::len), Some(2));
}
