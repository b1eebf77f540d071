//! Input positions.
//!
//! A [`Cursor`] is an immutable view of a character slice plus an offset.
//! Parsers take a cursor and hand back a new one; the caller's copy is
//! never touched, so backtracking is simply reusing the old value.

/// A position in a character slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'i> {
    chars: &'i [char],
    position: usize,
}

impl<'i> Cursor<'i> {
    /// Creates a cursor at the start of `chars`.
    #[must_use]
    pub const fn new(chars: &'i [char]) -> Self {
        Self { chars, position: 0 }
    }

    /// Returns a cursor at the given offset, clamped to the end of input.
    #[must_use]
    pub fn at(self, position: usize) -> Self {
        Self {
            chars: self.chars,
            position: position.min(self.chars.len()),
        }
    }

    /// Current character offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Total number of characters in the input.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the input has no characters at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns true if no characters remain.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// The next character, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// The character just before the cursor.
    #[must_use]
    pub fn previous(&self) -> Option<char> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.chars.get(index).copied())
    }

    /// Consumes one character.
    #[must_use]
    pub fn next_char(self) -> Option<(char, Self)> {
        let c = self.peek()?;
        Some((c, self.advance(1)))
    }

    /// Moves forward `count` characters, stopping at the end.
    #[must_use]
    pub fn advance(self, count: usize) -> Self {
        self.at(self.position + count)
    }

    /// Consumes `literal` if the input continues with it.
    #[must_use]
    pub fn consume_literal(self, literal: &[char]) -> Option<Self> {
        let end = self.position + literal.len();
        let upcoming = self.chars.get(self.position..end)?;
        (upcoming == literal).then(|| self.at(end))
    }

    /// The characters from `self` up to (not including) `later`.
    #[must_use]
    pub fn text_until(&self, later: Cursor<'_>) -> String {
        let end = later.position.clamp(self.position, self.chars.len());
        self.chars[self.position..end].iter().collect()
    }

    /// Everything not yet consumed.
    #[must_use]
    pub fn remainder(&self) -> String {
        self.chars[self.position..].iter().collect()
    }
}
