//! Property tests for parser behavior
//!
//! Determinism, backtracking, and alternation order over arbitrary input.

use bestiary_combinator::{Cursor, Parser, either, int, literal, word, zip, zip3};
use proptest::prelude::*;

fn prose() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 ,.:()+-]{0,40}").expect("valid regex")
}

fn attack_prefix() -> Parser<(String, u32, String)> {
    zip3(literal("+"), int(), literal(" to hit"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn parsing_is_deterministic(input in prose()) {
        let parser = zip(word(), int().optional());
        prop_assert_eq!(parser.run_raw(&input), parser.run_raw(&input));
    }

    #[test]
    fn failed_parse_leaves_cursor_unchanged(input in prose(), offset in 0usize..40) {
        let chars: Vec<char> = input.chars().collect();
        let cursor = Cursor::new(&chars).advance(offset);
        let before = cursor;
        if attack_prefix().attempt().parse(cursor).is_none() {
            prop_assert_eq!(cursor, before);
            // The same position is still usable by an alternative.
            let fallback = word().optional().parse(cursor).map(|(_, rest)| rest.position());
            prop_assert!(fallback.is_some_and(|position| position >= before.position()));
        }
    }

    #[test]
    fn or_prefers_the_first_match(input in prose()) {
        let first = word().map(|w| (1, w));
        let second = word().map(|w| (2, w));
        if let Some((tag, _)) = first.clone().or(second).run(&input) {
            prop_assert_eq!(tag, 1);
        }
    }

    #[test]
    fn partial_sequence_failure_backtracks(n in 0u32..1000, tail in "[a-z]{1,5}") {
        // zip consumes the number, then fails on the tail; the alternative
        // must still see the number.
        let input = format!("{n} {tail}");
        let sequence = zip(int(), literal(" ft.")).map(|(n, _)| n);
        let parser = either(sequence, int());
        prop_assert_eq!(parser.run(&input), Some(n));
    }
}
