//! Source location tracking.
//!
//! `Span` records where a parsed value came from in the prose it was read
//! from. Offsets count Unicode scalar values (characters), not bytes, so a
//! span found on case-folded text indexes the original text unchanged.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-open range of characters in source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// Character offset where this span starts.
    pub start: usize,
    /// Character offset where this span ends (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at the given offset.
    #[must_use]
    pub const fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Creates a span covering the range from this span to another.
    #[must_use]
    pub fn to(self, other: Self) -> Self {
        Self {
            start: self.start,
            end: other.end,
        }
    }

    /// Returns this span moved right by `offset` characters.
    #[must_use]
    pub const fn shifted(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Returns the length of this span in characters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if the two spans share at least one character.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns the text this span covers in the given source.
    ///
    /// Offsets past the end of `source` are clamped.
    #[must_use]
    pub fn text(&self, source: &str) -> String {
        source
            .chars()
            .skip(self.start)
            .take(self.end.saturating_sub(self.start))
            .collect()
    }
}

/// A value paired with the span of text it was parsed from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Located<V> {
    /// The parsed value.
    pub value: V,
    /// Where the value was found.
    pub span: Span,
}

impl<V> Located<V> {
    /// Pairs a value with its span.
    #[must_use]
    pub const fn new(value: V, span: Span) -> Self {
        Self { value, span }
    }

    /// Transforms the value, keeping the span.
    #[must_use]
    pub fn map<W>(self, f: impl FnOnce(V) -> W) -> Located<W> {
        Located {
            value: f(self.value),
            span: self.span,
        }
    }

    /// Borrows the value, keeping the span.
    #[must_use]
    pub fn as_ref(&self) -> Located<&V> {
        Located {
            value: &self.value,
            span: self.span,
        }
    }
}
