//! Integration tests for searchable text and date tokens.

mod common;

use common::{date, mixed_store, tournament};
use tournament_finder::logic::{date_tokens, SearchIndex, TOKENS_PER_DATE};
use tournament_finder::{searchable_text, TournamentStatus, TournamentType};

#[test]
fn date_tokens_cover_every_rendering_in_order() {
    let tokens = date_tokens(date("2025-06-20"));
    assert_eq!(tokens.len(), TOKENS_PER_DATE);
    assert_eq!(
        tokens,
        [
            "2025", "june", "jun", "06", "20", "june 2025", "jun 2025", "06/2025", "20/06",
            "20/06/2025", "june 20", "jun 20", "2025-06", "2025/06", "06-20-2025", "20-06-2025",
        ]
    );
}

#[test]
fn day_has_no_leading_zero_but_month_does() {
    let tokens = date_tokens(date("2024-12-01"));
    assert_eq!(tokens[3], "12");
    assert_eq!(tokens[4], "1");
    assert!(tokens.contains(&"1/12/2024".to_string()));
    assert!(tokens.contains(&"12-1-2024".to_string()));

    let tokens = date_tokens(date("2025-03-09"));
    assert_eq!(tokens[3], "03");
    assert!(tokens.contains(&"mar 9".to_string()));
    assert!(tokens.contains(&"9-03-2025".to_string()));
}

#[test]
fn searchable_text_starts_with_literal_fields_and_is_lowercase() {
    let t = tournament(
        1,
        "Rapid 10|0 & 30|0",
        "2025-06-20",
        "2025-06-24",
        TournamentType::Rapid,
        TournamentStatus::Ongoing,
    );
    let text = searchable_text(&t);
    assert!(text.starts_with("rapid 10|0 & 30|0 2025-06-20 2025-06-24 rapid ongoing 2025 june jun 06 20"));
    assert_eq!(text, text.to_lowercase());
    assert!(text.contains("june 24"));
    assert!(text.ends_with("24-06-2025"));
}

#[test]
fn searchable_text_holds_both_dates_tokens() {
    let t = tournament(
        7,
        "New Year Blitz",
        "2025-12-31",
        "2026-01-01",
        TournamentType::Blitz,
        TournamentStatus::Upcoming,
    );
    let text = searchable_text(&t);
    for token in date_tokens(t.start_date).iter().chain(date_tokens(t.end_date).iter()) {
        assert!(text.contains(token.as_str()), "missing {token}");
    }
    assert!(text.contains("dec 31"));
    assert!(text.contains("jan 1"));
    assert!(text.contains("2026-01"));
}

#[test]
fn index_is_position_aligned_with_store() {
    let store = mixed_store();
    let index = SearchIndex::build(&store);
    assert_eq!(index.len(), store.len());
    for (i, t) in store.iter().enumerate() {
        assert_eq!(index.get(i), Some(searchable_text(t).as_str()));
    }
    assert_eq!(index.get(store.len()), None);
    assert!(SearchIndex::build(&[]).is_empty());
}
