//! Core stat block vocabulary for Bestiary.
//!
//! This crate provides:
//! - [`Span`] and [`Located`] - Character ranges into the original prose
//! - [`DiceExpression`] - Dice arithmetic such as `2d6 + 3`
//! - [`LimitedUse`] - Per-day, per-rest, and turn-start recharge limits
//! - [`TextAnnotation`] - Dice and cross-reference annotations over text
//! - Game vocabulary enums ([`Ability`], [`DamageType`], [`CreatureCondition`], ...)
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod annotation;
pub mod dice;
pub mod error;
pub mod limited_use;
pub mod span;
pub mod types;

pub use annotation::{ItemKind, ItemReference, TextAnnotation};
pub use dice::{DiceExpression, Die, Operator};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use limited_use::{LimitedUse, Recharge};
pub use span::{Located, Span};
pub use types::{
    Ability, Alignment, CreatureCondition, CreatureSize, DamageType, Ethic, Modifier, Moral,
    Movement, MovementMode,
};
