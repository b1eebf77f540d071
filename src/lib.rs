//! Bestiary - Grammars for tabletop creature stat block prose
//!
//! This crate re-exports all layers of the Bestiary system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: bestiary_runtime     - Memoized parsing, resources, persistence, explorer
//! Layer 2: bestiary_grammar     - Auxiliary, action, and feature grammars
//! Layer 1: bestiary_combinator  - Cursor, parser type, combinators
//! Layer 0: bestiary_foundation  - Spans, dice, limited use, rules vocabulary, Error
//! ```

pub use bestiary_combinator as combinator;
pub use bestiary_foundation as foundation;
pub use bestiary_grammar as grammar;
pub use bestiary_runtime as runtime;
