mod helpers;

use engram::recall::query::build_context;
use engram::recall::score::ScoreParams;
use engram::recall::types::FactCategory;
use helpers::{insert_fact, test_db};

#[test]
fn context_never_exceeds_the_character_budget() {
    let mut conn = test_db();
    for i in 0..12 {
        insert_fact(
            &mut conn,
            FactCategory::Fact,
            &format!("Memory number {i} with enough text to occupy a good chunk of the budget"),
            5,
        );
    }

    for tokens in [25, 50, 100, 800] {
        let ctx = build_context(&conn, "memory budget text", tokens, &ScoreParams::default())
            .unwrap()
            .unwrap();
        assert!(
            ctx.len() <= tokens * 4,
            "context of {} chars exceeds budget of {} tokens",
            ctx.len(),
            tokens
        );
    }
}

#[test]
fn context_lists_facts_as_category_bullets() {
    let mut conn = test_db();
    insert_fact(&mut conn, FactCategory::User, "The user's name is Alice", 9);
    insert_fact(&mut conn, FactCategory::Preference, "User prefers dark mode", 7);

    let ctx = build_context(&conn, "user preferences", 800, &ScoreParams::default())
        .unwrap()
        .unwrap();

    assert!(ctx.starts_with("[Memory — 2 relevant facts]\n"));
    assert!(ctx.contains("- [user] The user's name is Alice\n"));
    assert!(ctx.contains("- [preference] User prefers dark mode\n"));
}

#[test]
fn top_slots_are_kept_even_at_zero_score() {
    let mut conn = test_db();
    for i in 0..6 {
        insert_fact(&mut conn, FactCategory::Fact, &format!("Unrelated note number {i}"), 5);
    }

    // Nothing overlaps, nothing is high-importance: every score is zero.
    let ctx = build_context(&conn, "zebra xylophone", 800, &ScoreParams::default())
        .unwrap()
        .unwrap();

    let bullets = ctx.lines().filter(|l| l.starts_with("- ")).count();
    assert_eq!(bullets, 4, "zero-score facts stop surfacing past the top slots");
}

#[test]
fn scored_facts_are_not_cut_at_the_top_slots() {
    let mut conn = test_db();
    for i in 0..8 {
        insert_fact(
            &mut conn,
            FactCategory::Fact,
            &format!("Release note {i} covers the memory engine"),
            5,
        );
    }

    let ctx = build_context(&conn, "release memory engine", 800, &ScoreParams::default())
        .unwrap()
        .unwrap();

    let bullets = ctx.lines().filter(|l| l.starts_with("- ")).count();
    assert_eq!(bullets, 8, "positive-score facts all fit within a roomy budget");
}

#[test]
fn context_is_none_when_nothing_is_stored() {
    let conn = test_db();
    let ctx = build_context(&conn, "anything at all", 800, &ScoreParams::default()).unwrap();
    assert!(ctx.is_none());
}
