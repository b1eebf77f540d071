//! Character-level building blocks.

use crate::combinators::{any, either, one_or_more, zip, zip3};
use crate::parser::Parser;

/// Case-folds `text` one character at a time.
///
/// Each character maps to exactly one character, so offsets found in the
/// folded text are valid offsets into `text`. Characters whose lowercase
/// form expands to several characters are kept unchanged.
#[must_use]
pub fn fold_case(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(folded), None) => folded,
                _ => c,
            }
        })
        .collect()
}

/// A single character satisfying `predicate`.
#[must_use]
pub fn character<F>(predicate: F) -> Parser<char>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    Parser::new(move |input| {
        let (c, rest) = input.next_char()?;
        predicate(c).then_some((c, rest))
    })
}

/// Exactly the character `expected`.
#[must_use]
pub fn char_eq(expected: char) -> Parser<char> {
    character(move |c| c == expected)
}

/// Any one of the characters in `set`.
#[must_use]
pub fn char_in(set: &'static str) -> Parser<char> {
    character(move |c| set.contains(c))
}

/// An ASCII digit.
#[must_use]
pub fn digit() -> Parser<char> {
    character(|c| c.is_ascii_digit())
}

/// Exactly the text `expected`.
#[must_use]
pub fn literal(expected: &str) -> Parser<String> {
    let chars: Vec<char> = expected.chars().collect();
    let owned = expected.to_string();
    Parser::new(move |input| {
        let rest = input.consume_literal(&chars)?;
        Some((owned.clone(), rest))
    })
}

/// A non-negative base-10 integer.
#[must_use]
pub fn int() -> Parser<u32> {
    one_or_more(digit()).joined("").to_int()
}

/// An explicitly signed integer such as `+4` or `-1`.
#[must_use]
pub fn signed_int() -> Parser<i32> {
    let sign = either(char_eq('+').value(1), char_eq('-').value(-1));
    zip(sign, int()).flat_map(|(sign, magnitude)| {
        i32::try_from(magnitude).ok().map(|magnitude| sign * magnitude)
    })
}

/// A word: letters, digits, and apostrophes.
#[must_use]
pub fn word() -> Parser<String> {
    one_or_more(character(|c| c.is_alphanumeric() || matches!(c, '\'' | '＇' | '’')))
        .joined("")
}

/// Spaces and tabs.
#[must_use]
pub fn horizontal_whitespace() -> Parser<String> {
    one_or_more(char_in(" \t")).joined("")
}

/// Line breaks.
#[must_use]
pub fn vertical_whitespace() -> Parser<String> {
    one_or_more(char_in("\r\n")).joined("")
}

/// Any mix of spaces, tabs, and line breaks.
#[must_use]
pub fn whitespace() -> Parser<String> {
    one_or_more(char_in(" \t\r\n")).joined("")
}

/// Zero-width: succeeds when the previous character does not continue a
/// word.
#[must_use]
pub fn word_start() -> Parser<()> {
    Parser::new(|input| {
        let inside_word = input.previous().is_some_and(char::is_alphanumeric);
        (!inside_word).then_some(((), input))
    })
}

/// Zero-width: succeeds when the next character does not continue a word.
#[must_use]
pub fn word_end() -> Parser<()> {
    Parser::new(|input| {
        let inside_word = input.peek().is_some_and(char::is_alphanumeric);
        (!inside_word).then_some(((), input))
    })
}

/// `text` as a whole word, not as part of a longer one.
#[must_use]
pub fn keyword(text: &str) -> Parser<String> {
    zip3(word_start(), literal(text), word_end()).map(|(_, matched, ())| matched)
}

/// Everything between a `(` and the next `)`, exclusive.
#[must_use]
pub fn parenthesized() -> Parser<String> {
    zip3(char_eq('('), any(character(|c| c != ')')).joined(""), char_eq(')'))
        .map(|(_, inner, _)| inner)
}
