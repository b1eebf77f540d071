//! Integration tests for the combinator algebra
//!
//! Tests sequencing, choice, repetition, scanning, and located results.

use bestiary_combinator::{
    any, char_eq, choice, either, either3, end, int, keyword, literal, many, never, nothing,
    one_or_more, remainder, skip_until, whitespace, word, zip, zip3,
};
use bestiary_foundation::{Located, Span};

fn feet() -> bestiary_combinator::Parser<u32> {
    zip(int(), literal(" ft.")).map(|(n, _)| n)
}

// =============================================================================
// Sequencing
// =============================================================================

#[test]
fn zip_keeps_every_value() {
    let parser = zip3(word(), whitespace(), feet());
    assert_eq!(
        parser.run("fly 60 ft."),
        Some(("fly".to_string(), " ".to_string(), 60))
    );
}

#[test]
fn preceded_and_terminated() {
    let parser = int().preceded_by(literal("dc ")).terminated_by(char_eq(','));
    assert_eq!(parser.run_raw("dc 13, strength"), Some((13, " strength".to_string())));
}

#[test]
fn flat_map_can_reject() {
    let even = int().flat_map(|n| (n % 2 == 0).then_some(n));
    assert_eq!(even.run("4"), Some(4));
    assert_eq!(even.run("5"), None);
}

// =============================================================================
// Choice
// =============================================================================

#[test]
fn either_prefers_first() {
    let parser = either(literal("short or long rest"), literal("short"));
    assert_eq!(parser.run("short or long rest"), Some("short or long rest".to_string()));
    assert_eq!(parser.run("short rest"), Some("short".to_string()));
}

#[test]
fn choice_and_either3_try_in_order() {
    let parser = choice(vec![literal("b").value(2), literal("a").value(1), literal("a").value(3)]);
    assert_eq!(parser.run("a"), Some(1));
    let parser = either3(never(), nothing().value(7), literal("x").value(9));
    assert_eq!(parser.run("x"), Some(7));
}

// =============================================================================
// Repetition
// =============================================================================

#[test]
fn any_and_one_or_more() {
    assert_eq!(any(char_eq('a')).run("aab"), Some(vec!['a', 'a']));
    assert_eq!(any(char_eq('a')).run("b"), Some(vec![]));
    assert_eq!(one_or_more(char_eq('a')).run("b"), None);
}

#[test]
fn any_stops_on_zero_width_match() {
    assert_eq!(any(nothing()).run("abc").map(|v| v.len()), Some(0));
}

#[test]
fn many_leaves_dangling_separator() {
    let parser = many(int(), literal(", "), nothing());
    assert_eq!(parser.run_raw("1, 2, x"), Some((vec![1, 2], ", x".to_string())));
}

#[test]
fn many_requires_terminator() {
    let parser = many(int(), literal(","), end());
    assert_eq!(parser.run("1,2,3"), Some(vec![1, 2, 3]));
    assert_eq!(parser.run("1,2,3 ft."), None);
    assert_eq!(parser.run(""), Some(vec![]));
}

// =============================================================================
// Scanning
// =============================================================================

#[test]
fn skip_until_reports_skipped_text() {
    let parser = skip_until(keyword("hit:"));
    assert_eq!(
        parser.run_raw("one target. hit: 5"),
        Some((("one target. ".to_string(), "hit:".to_string()), " 5".to_string()))
    );
    assert_eq!(parser.run("one target."), None);
}

#[test]
fn skip_until_tries_the_end() {
    let parser = skip_until(end());
    assert_eq!(parser.run("abc"), Some(("abc".to_string(), ())));
}

#[test]
fn remainder_consumes_everything() {
    assert_eq!(remainder().run_raw("rest"), Some(("rest".to_string(), String::new())));
}

#[test]
fn skipping_any_before_keeps_value() {
    assert_eq!(feet().skipping_any_before().run("speed 30 ft."), Some(30));
}

// =============================================================================
// Located Results
// =============================================================================

#[test]
fn with_range_covers_consumed_input() {
    let parser = zip(literal("reach "), feet().with_range()).map(|(_, found)| found);
    assert_eq!(parser.run("reach 10 ft."), Some((10, Span::new(6, 12))));
}

#[test]
fn matches_finds_every_occurrence() {
    let found = feet().matches("walk 30 ft., fly 60 ft.");
    assert_eq!(
        found,
        vec![
            Located::new(30, Span::new(5, 11)),
            Located::new(60, Span::new(17, 23)),
        ]
    );
}

#[test]
fn joined_and_to_int() {
    let digits = one_or_more(bestiary_combinator::digit()).joined("");
    assert_eq!(digits.clone().run("042"), Some("042".to_string()));
    assert_eq!(digits.to_int().run("042"), Some(42));
    assert_eq!(
        many(word(), literal(" "), nothing()).joined("-").run("sacred flame"),
        Some("sacred-flame".to_string())
    );
}
