//! Grammars for creature stat block prose.
//!
//! This crate turns the text of a stat block into structured values:
//!
//! ```text
//! "40 ft., fly 80 ft."                 ──► auxiliary::parse_movement
//! "Melee Weapon Attack: +4 to hit..."  ──► action::ActionGrammar
//! "Spellcasting" / "The acolyte is..." ──► feature::parse_feature
//! ```
//!
//! # Modules
//!
//! - [`auxiliary`] - Speed, armor class, hit points, type line
//! - [`dice`] - Dice expressions in prose
//! - [`action`] - Attacks and saving throw actions
//! - [`feature`] - Usage limits and spellcasting
//! - [`vocabulary`] - Condition words and the reference catalog
//! - [`config`] - [`GrammarConfig`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod annotate;
pub mod auxiliary;
pub mod config;
pub mod dice;
pub mod feature;
pub mod vocabulary;

pub use action::{
    ACTION_GRAMMAR_VERSION, Action, ActionGrammar, ParsedCreatureAction, parse_action,
    parse_action_raw, parse_creature_action,
};
pub use annotate::description_annotations;
pub use config::GrammarConfig;
pub use dice::{dice_expression, dice_expression_matches, rolled_dice_expression};
pub use feature::{
    FEATURE_GRAMMAR_VERSION, LimitedUseSpellGroup, ParsedCreatureFeature, Spellcasting,
    parse_feature, parse_limited_use, parse_spellcasting,
};
pub use vocabulary::{ConditionVocabulary, ReferenceCatalog};
