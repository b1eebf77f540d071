//! Annotations over stat block prose.
//!
//! A parsed feature or action exposes its recognized fragments as
//! `Located<TextAnnotation>` values so a presentation layer can highlight
//! dice to roll and names to link.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dice::DiceExpression;

/// What kind of thing a reference points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ItemKind {
    /// A spell.
    Spell,
    /// A magic item or piece of equipment.
    Item,
    /// Another creature.
    Monster,
}

/// A mention of a spell, item, or creature by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemReference {
    /// The name as it appears in the (case-folded) text.
    pub text: String,
    /// The kind of thing named, when known.
    pub kind: Option<ItemKind>,
}

impl ItemReference {
    /// Creates a spell reference.
    #[must_use]
    pub fn spell(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: Some(ItemKind::Spell),
        }
    }

    /// Creates a reference of the given kind.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: Option<ItemKind>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A recognized fragment of prose.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TextAnnotation {
    /// A rollable dice expression.
    DiceExpression(DiceExpression),
    /// A cross-reference to a named spell, item, or creature.
    Reference(ItemReference),
}

impl TextAnnotation {
    /// Returns the dice expression, if this is one.
    #[must_use]
    pub fn as_dice(&self) -> Option<&DiceExpression> {
        match self {
            Self::DiceExpression(expr) => Some(expr),
            Self::Reference(_) => None,
        }
    }

    /// Returns the reference, if this is one.
    #[must_use]
    pub fn as_reference(&self) -> Option<&ItemReference> {
        match self {
            Self::Reference(reference) => Some(reference),
            Self::DiceExpression(_) => None,
        }
    }
}

impl From<DiceExpression> for TextAnnotation {
    fn from(expr: DiceExpression) -> Self {
        Self::DiceExpression(expr)
    }
}

impl From<ItemReference> for TextAnnotation {
    fn from(reference: ItemReference) -> Self {
        Self::Reference(reference)
    }
}
