//! Memoized parsing, combat resources, persistence, and the grammar
//! explorer for Bestiary.
//!
//! This crate provides:
//! - [`Parseable`] - Raw input with a versioned, lazily computed parse
//! - [`DomainParsers`] - The feature and action parsers with their version tags
//! - [`StatBlock`] - A creature's features and actions, parsed on demand
//! - [`CombatantResource`] - Spell slots and limited uses to track in combat
//! - `MessagePack` persistence of all of the above
//! - [`Repl`] - The grammar explorer behind the `bestiary` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod logging;
pub mod parseable;
pub mod parsers;
pub mod repl;
pub mod resources;
pub mod serialize;
pub mod statblock;

pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use logging::init_tracing;
pub use parseable::{DomainModel, DomainParser, Parseable, ParserResult, parse_all};
pub use parsers::{
    ActionParser, CreatureAction, CreatureFeature, DomainParsers, FeatureParser,
    ParseableCreatureAction, ParseableCreatureFeature,
};
pub use repl::{COMMANDS, Evaluation, Repl};
pub use resources::{
    CombatantResource, MAX_TRACKED_USES, english_list, extract_resources, ordinal,
};
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
pub use statblock::{Legendary, StatBlock};
