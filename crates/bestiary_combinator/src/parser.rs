//! The parser type and its chaining methods.

use std::fmt;
use std::sync::Arc;

use bestiary_foundation::{Located, Span};
use tracing::trace;

use crate::combinators::{any, skip_until, zip3};
use crate::cursor::Cursor;

/// What a parser produces: a value and the cursor after it, or nothing.
pub type Reply<'i, A> = Option<(A, Cursor<'i>)>;

type ParseFn<A> = dyn for<'i> Fn(Cursor<'i>) -> Reply<'i, A> + Send + Sync;

/// A reusable parser producing values of type `A`.
///
/// Parsers are cheap to clone and can be shared between threads. Running a
/// parser never mutates the cursor it is given: on success it returns a new
/// cursor, on failure the caller still holds the position it started from.
/// Every combinator is therefore backtracking-safe.
pub struct Parser<A> {
    run: Arc<ParseFn<A>>,
}

impl<A> Clone for Parser<A> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<A> fmt::Debug for Parser<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Parser")
    }
}

impl<A: 'static> Parser<A> {
    /// Wraps a parsing function.
    #[must_use]
    pub fn new<F>(parse: F) -> Self
    where
        F: for<'i> Fn(Cursor<'i>) -> Reply<'i, A> + Send + Sync + 'static,
    {
        Self {
            run: Arc::new(parse),
        }
    }

    /// Runs the parser at `input`.
    pub fn parse<'i>(&self, input: Cursor<'i>) -> Reply<'i, A> {
        (self.run)(input)
    }

    /// Parses `text` from the start, discarding whatever is left over.
    #[must_use]
    pub fn run(&self, text: &str) -> Option<A> {
        self.run_raw(text).map(|(value, _)| value)
    }

    /// Parses `text` from the start, returning the unconsumed remainder.
    #[must_use]
    pub fn run_raw(&self, text: &str) -> Option<(A, String)> {
        let chars: Vec<char> = text.chars().collect();
        self.parse(Cursor::new(&chars))
            .map(|(value, rest)| (value, rest.remainder()))
    }

    /// Transforms the parsed value.
    #[must_use]
    pub fn map<B: 'static, F>(self, f: F) -> Parser<B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Parser::new(move |input| self.parse(input).map(|(value, rest)| (f(value), rest)))
    }

    /// Replaces the parsed value with a constant.
    #[must_use]
    pub fn value<B>(self, value: B) -> Parser<B>
    where
        B: Clone + Send + Sync + 'static,
    {
        self.map(move |_| value.clone())
    }

    /// Transforms the parsed value, failing when `f` returns `None`.
    #[must_use]
    pub fn flat_map<B: 'static, F>(self, f: F) -> Parser<B>
    where
        F: Fn(A) -> Option<B> + Send + Sync + 'static,
    {
        Parser::new(move |input| {
            let (value, rest) = self.parse(input)?;
            f(value).map(|mapped| (mapped, rest))
        })
    }

    /// Fails unless the parsed value satisfies `predicate`.
    #[must_use]
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: Fn(&A) -> bool + Send + Sync + 'static,
    {
        self.flat_map(move |value| predicate(&value).then_some(value))
    }

    /// Marks a point the grammar may backtrack from.
    ///
    /// Cursors are immutable, so every parser already restores its input
    /// on failure; this only documents intent at the call site.
    #[must_use]
    pub fn attempt(self) -> Self {
        self
    }

    /// Runs `self` then `next`, keeping both values.
    #[must_use]
    pub fn followed_by<B: 'static>(self, next: Parser<B>) -> Parser<(A, B)> {
        Parser::new(move |input| {
            let (first, rest) = self.parse(input)?;
            let (second, rest) = next.parse(rest)?;
            Some(((first, second), rest))
        })
    }

    /// Runs `prefix` then `self`, keeping only `self`'s value.
    #[must_use]
    pub fn preceded_by<B: 'static>(self, prefix: Parser<B>) -> Self {
        prefix.followed_by(self).map(|(_, value)| value)
    }

    /// Runs `self` then `suffix`, keeping only `self`'s value.
    #[must_use]
    pub fn terminated_by<B: 'static>(self, suffix: Parser<B>) -> Self {
        self.followed_by(suffix).map(|(value, _)| value)
    }

    /// Tries `self`, then `alternative` from the same position.
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        Parser::new(move |input| self.parse(input).or_else(|| alternative.parse(input)))
    }

    /// Always succeeds, yielding `None` without consuming when `self` fails.
    #[must_use]
    pub fn optional(self) -> Parser<Option<A>> {
        Parser::new(move |input| match self.parse(input) {
            Some((value, rest)) => Some((Some(value), rest)),
            None => Some((None, input)),
        })
    }

    /// Pairs the value with the half-open character range it consumed.
    #[must_use]
    pub fn with_range(self) -> Parser<(A, Span)> {
        Parser::new(move |input| {
            let (value, rest) = self.parse(input)?;
            Some(((value, Span::new(input.position(), rest.position())), rest))
        })
    }

    /// Like [`Parser::with_range`] but yields a [`Located`] value.
    #[must_use]
    pub fn located(self) -> Parser<Located<A>> {
        self.with_range()
            .map(|(value, span)| Located::new(value, span))
    }

    /// Allows optional `padding` on either side.
    #[must_use]
    pub fn trimming<B: 'static>(self, padding: Parser<B>) -> Self {
        zip3(padding.clone().optional(), self, padding.optional()).map(|(_, value, _)| value)
    }

    /// Skips any characters until `self` matches.
    #[must_use]
    pub fn skipping_any_before(self) -> Self {
        skip_until(self).map(|(_, value)| value)
    }

    /// Every non-overlapping match of `self` in `text`, left to right.
    #[must_use]
    pub fn matches(&self, text: &str) -> Vec<Located<A>> {
        let chars: Vec<char> = text.chars().collect();
        self.matches_in(Cursor::new(&chars))
    }

    /// Every non-overlapping match of `self` from `input` onwards.
    #[must_use]
    pub fn matches_in(&self, input: Cursor<'_>) -> Vec<Located<A>> {
        any(self.clone().located().skipping_any_before())
            .parse(input)
            .map(|(found, _)| found)
            .unwrap_or_default()
    }
}

impl<A: fmt::Debug + 'static> Parser<A> {
    /// Emits a `trace` event describing each attempt of this parser.
    #[must_use]
    pub fn log(self, label: &'static str) -> Self {
        Parser::new(move |input| {
            let reply = self.parse(input);
            match &reply {
                Some((value, rest)) => trace!(
                    parser = label,
                    start = input.position(),
                    end = rest.position(),
                    ?value,
                    "matched"
                ),
                None => trace!(parser = label, start = input.position(), "no match"),
            }
            reply
        })
    }
}

impl<T: fmt::Display + 'static> Parser<Vec<T>> {
    /// Concatenates the parsed elements with `separator`.
    #[must_use]
    pub fn joined(self, separator: &str) -> Parser<String> {
        let separator = separator.to_string();
        self.map(move |items| {
            items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(&separator)
        })
    }
}

impl Parser<String> {
    /// Interprets the parsed text as a base-10 unsigned integer.
    #[must_use]
    pub fn to_int(self) -> Parser<u32> {
        self.flat_map(|text| text.parse().ok())
    }
}
