//! Backtracking parser combinators over character cursors.
//!
//! Grammars in Bestiary are built from small [`Parser`] values composed
//! with the functions in [`combinators`] and the character primitives in
//! [`text`]. A parser receives an immutable [`Cursor`] and returns the
//! parsed value with a new cursor, or `None`:
//!
//! ```text
//! "30 ft., fly 60 ft."
//!     │
//!     ▼
//! zip(int(), literal(" ft."))  ──►  Some(((30, " ft."), cursor@6))
//! ```
//!
//! Because the input cursor is never mutated, any parser can be retried
//! from the same position after a failure. [`Parser::attempt`] exists only
//! to mark those points in a grammar.
//!
//! # Modules
//!
//! - [`cursor`] - Immutable input positions
//! - [`parser`] - The [`Parser`] type and its chaining methods
//! - [`combinators`] - Sequencing, choice, repetition, scanning
//! - [`text`] - Characters, literals, integers, words, whitespace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combinators;
pub mod cursor;
pub mod parser;
pub mod text;

pub use combinators::{
    any, choice, either, either3, either4, either5, either6, end, many, never, nothing,
    one_or_more, remainder, skip_until, zip, zip3, zip4, zip5, zip6, zip7,
};
pub use cursor::Cursor;
pub use parser::{Parser, Reply};
pub use text::{
    char_eq, char_in, character, digit, fold_case, horizontal_whitespace, int, keyword, literal,
    parenthesized, signed_int, vertical_whitespace, whitespace, word, word_end, word_start,
};
