//! Grid state store tests - text layer, mark layer and their independence

mod common;

use bingo_card::model::{
    Card, CellIndex, FontSize, ReachPolicy, StatusKind, CELL_COUNT, FREE_INDEX,
};
use common::{card_with_marks, cell, highlighted, texts};

#[test]
fn test_new_card_is_blank() {
    let card = Card::default();
    assert_eq!(card.filled_count(), 0);
    assert_eq!(card.marks().count(), 0);
    assert_eq!(card.status().kind, StatusKind::None);
    for i in 0..CELL_COUNT {
        assert_eq!(card.text(i), "");
        assert_eq!(card.font_size(i), FontSize::Large);
    }
}

#[test]
fn test_free_cell_is_not_a_cell_index() {
    assert!(CellIndex::new(FREE_INDEX).is_none());
    assert!(CellIndex::new(CELL_COUNT).is_none());
    assert!(CellIndex::from_row_col(2, 2).is_none());
    assert_eq!(CellIndex::from_row_col(4, 4).map(CellIndex::get), Some(24));
}

#[test]
fn test_text_of_25_chars_is_third_bucket() {
    let mut card = Card::default();
    card.set_cell_text(cell(3), "x".repeat(25));
    assert_eq!(card.font_size(3), FontSize::Small);
    assert_eq!(card.font_size(3), FontSize::ALL[2]);
}

#[test]
fn test_font_size_buckets_at_boundaries() {
    let cases = [
        (0, FontSize::Large),
        (10, FontSize::Large),
        (11, FontSize::Medium),
        (20, FontSize::Medium),
        (21, FontSize::Small),
        (30, FontSize::Small),
        (31, FontSize::Smaller),
        (50, FontSize::Smaller),
        (51, FontSize::Tiny),
        (500, FontSize::Tiny),
    ];
    let mut card = Card::default();
    for (len, expected) in cases {
        card.set_cell_text(cell(0), "y".repeat(len));
        assert_eq!(card.font_size(0), expected, "length {}", len);
    }
}

#[test]
fn test_font_size_never_grows_with_length() {
    let mut previous = FontSize::for_text("").px();
    for len in 1..=80 {
        let px = FontSize::for_text(&"z".repeat(len)).px();
        assert!(px <= previous, "length {} grew from {} to {}", len, previous, px);
        previous = px;
    }
}

#[test]
fn test_font_size_counts_characters_not_bytes() {
    // 10 characters, 30 bytes
    assert_eq!(FontSize::for_text(&"日".repeat(10)), FontSize::Large);
}

#[test]
fn test_clear_text_keeps_marks() {
    let mut card = card_with_marks(&[0, 1, 2, 3, 4], ReachPolicy::Highlight);
    card.set_cell_text(cell(7), "Something long enough for medium");
    let marks = *card.marks();
    let status = card.status().clone();

    card.clear_text();

    assert!(texts(&card).iter().all(String::is_empty));
    assert!((0..CELL_COUNT).all(|i| card.font_size(i) == FontSize::Large));
    assert_eq!(card.marks(), &marks);
    assert_eq!(card.status(), &status);
}

#[test]
fn test_clear_marks_keeps_text() {
    let mut card = card_with_marks(&[0, 1, 2, 3, 4], ReachPolicy::Highlight);
    card.set_cell_text(cell(0), "Twenty-five characters!!!");
    let before_texts = texts(&card);
    let before_size = card.font_size(0);

    card.clear_marks();

    assert_eq!(texts(&card), before_texts);
    assert_eq!(card.font_size(0), before_size);
    assert_eq!(card.marks().count(), 0);
    assert_eq!(card.status().kind, StatusKind::None);
    assert!(highlighted(&card).is_empty());
}

#[test]
fn test_free_clicks_never_touch_marks() {
    let mut card = card_with_marks(&[6, 18], ReachPolicy::Highlight);
    let before = card.clone();

    for _ in 0..3 {
        assert!(!card.toggle_cell(FREE_INDEX));
    }
    assert!(!card.toggle_cell(99));

    assert_eq!(card, before);
    assert!(!card.is_marked(FREE_INDEX));
}

#[test]
fn test_cells_view_includes_free() {
    let card = card_with_marks(&[0, 6, 18, 24], ReachPolicy::Highlight);
    let views: Vec<_> = card.cells().collect();
    assert_eq!(views.len(), CELL_COUNT);

    let free = &views[FREE_INDEX];
    assert!(free.free);
    assert!(!free.marked);
    assert!(free.highlighted);
    assert!(views[0].marked && views[0].highlighted);
    assert!(!views[1].highlighted);
}

#[test]
fn test_reach_policy_switch_reevaluates() {
    let mut card = card_with_marks(&[0, 1, 2, 3], ReachPolicy::Highlight);
    assert_eq!(card.status().kind, StatusKind::Reach);

    card.set_reach_policy(ReachPolicy::Ignore);
    assert_eq!(card.status().kind, StatusKind::None);
    assert_eq!(card.reach_policy(), ReachPolicy::Ignore);

    card.set_reach_policy(ReachPolicy::Highlight);
    assert_eq!(highlighted(&card), vec![0, 1, 2, 3]);
}
