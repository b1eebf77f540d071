//! Grammar for creature features (traits).
//!
//! A feature's name may carry a usage limit and its description may hold a
//! spellcasting block. Both are recognized independently, alongside inline
//! dice and catalog references in the description.

mod limited_use;
mod spellcasting;

pub use limited_use::{limited_use_in_name, parse_limited_use};
pub use spellcasting::{LimitedUseSpellGroup, Spellcasting, parse_spellcasting, spellcasting};

use bestiary_combinator::fold_case;
use bestiary_foundation::{DiceExpression, LimitedUse, Located, Recharge, TextAnnotation};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotate::description_annotations;
use crate::config::GrammarConfig;

/// Bump when a grammar change alters the parsed output for the same text.
pub const FEATURE_GRAMMAR_VERSION: &str = "3";

/// Everything recognized in a feature.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedCreatureFeature {
    /// Usage limit from the name. The range is into the name.
    pub limited_use: Option<Located<LimitedUse>>,
    /// Spellcasting from the description.
    pub spellcasting: Option<Spellcasting>,
    /// Dice and references in the description, outside spell lists.
    pub other_description_annotations: Vec<Located<TextAnnotation>>,
}

impl ParsedCreatureFeature {
    /// Returns true if nothing was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limited_use.is_none()
            && self.spellcasting.is_none()
            && self.other_description_annotations.is_empty()
    }

    /// Annotations over the name: a `1d6` roll on a recharge limit.
    #[must_use]
    pub fn name_annotations(&self) -> Vec<Located<TextAnnotation>> {
        recharge_roll(self.limited_use.as_ref())
    }

    /// Annotations over the description, including listed spells.
    #[must_use]
    pub fn description_annotations(&self) -> Vec<Located<TextAnnotation>> {
        let mut annotations = self.other_description_annotations.clone();
        if let Some(spellcasting) = &self.spellcasting {
            annotations.extend(
                spellcasting
                    .spells()
                    .map(|spell| spell.clone().map(TextAnnotation::Reference)),
            );
        }
        annotations
    }
}

/// A `1d6` annotation over a recharge limit.
pub(crate) fn recharge_roll(limited_use: Option<&Located<LimitedUse>>) -> Vec<Located<TextAnnotation>> {
    limited_use
        .filter(|found| matches!(found.value.recharge, Some(Recharge::TurnStart(_))))
        .map(|found| found.as_ref().map(|_| TextAnnotation::from(DiceExpression::dice(1, 6))))
        .into_iter()
        .collect()
}

/// Parses a feature's name and description.
#[must_use]
pub fn parse_feature(name: &str, description: &str, config: &GrammarConfig) -> ParsedCreatureFeature {
    let limited_use = parse_limited_use(name);
    let spellcasting = parse_spellcasting(name, description);
    let excluded = spellcasting
        .as_ref()
        .map(Spellcasting::spell_spans)
        .unwrap_or_default();
    let other_description_annotations =
        description_annotations(&fold_case(description), &excluded, config);
    let parsed = ParsedCreatureFeature {
        limited_use,
        spellcasting,
        other_description_annotations,
    };
    debug!(
        name,
        limited_use = parsed.limited_use.is_some(),
        spellcasting = parsed.spellcasting.is_some(),
        annotations = parsed.other_description_annotations.len(),
        "parsed feature"
    );
    parsed
}
