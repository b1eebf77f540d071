//! Grammar for creature actions.
//!
//! An action description is either an attack roll or, in newer stat
//! blocks, a saving throw with labeled outcomes:
//!
//! ```text
//! Melee Weapon Attack: +4 to hit, reach 5 ft., one target. Hit: 5 (1d6 + 2) slashing damage.
//! Dexterity Saving Throw: DC 18, each creature in a line. Failure: 54 (12d8) acid damage.
//! ```
//!
//! The attack form is tried first. Text is case-folded before parsing, so
//! free text in the result is lowercase.

mod attack;
mod effect;
mod model;
mod saving_throw;

pub use model::{
    Action, AppliedCondition, AttackRange, AttackType, ConditionalHitModifier, Conditions,
    Damage, Effect, Outcome, OutcomeKind, SaveEffect, SavingThrow, SavingThrowAction,
    WeaponAttack, WeaponGrip,
};

use bestiary_combinator::{Cursor, Parser, fold_case};
use bestiary_foundation::{LimitedUse, Located, TextAnnotation};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotate::description_annotations;
use crate::config::GrammarConfig;
use crate::feature::{Spellcasting, parse_limited_use, parse_spellcasting, recharge_roll};

/// Bump when a grammar change alters the parsed output for the same text.
pub const ACTION_GRAMMAR_VERSION: &str = "4";

/// The action grammar, built once for a configuration.
#[derive(Clone, Debug)]
pub struct ActionGrammar {
    config: GrammarConfig,
    attack: Parser<WeaponAttack>,
    effects: Parser<Vec<Effect>>,
}

impl Default for ActionGrammar {
    fn default() -> Self {
        Self::new(&GrammarConfig::default())
    }
}

impl ActionGrammar {
    /// Builds the grammar.
    #[must_use]
    pub fn new(config: &GrammarConfig) -> Self {
        Self {
            config: config.clone(),
            attack: attack::weapon_attack(&config.vocabulary),
            effects: effect::effects(&config.vocabulary),
        }
    }

    /// Parses an action description.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<Action> {
        self.parse_raw(text).map(|(action, _)| action)
    }

    /// Parses an action description, also returning the text the attack
    /// grammar left unconsumed. Saving throw actions leave nothing.
    #[must_use]
    pub fn parse_raw(&self, text: &str) -> Option<(Action, String)> {
        let chars = fold_case(text);
        if let Some((attack, rest)) = self.attack.parse(Cursor::new(&chars)) {
            return Some((Action::WeaponAttack(attack), rest.remainder()));
        }
        saving_throw::saving_throw_action(&chars, &self.effects)
            .map(|action| (Action::SavingThrow(action), String::new()))
    }

    /// Parses an action's name and description together.
    #[must_use]
    pub fn parse_creature_action(&self, name: &str, description: &str) -> Option<ParsedCreatureAction> {
        let limited_use = parse_limited_use(name);
        let action = self.parse(description);
        let spellcasting = parse_spellcasting(name, description);
        let excluded = spellcasting
            .as_ref()
            .map(Spellcasting::spell_spans)
            .unwrap_or_default();
        let annotations = description_annotations(&fold_case(description), &excluded, &self.config);
        debug!(
            name,
            action = action.is_some(),
            limited_use = limited_use.is_some(),
            annotations = annotations.len(),
            "parsed action"
        );
        ParsedCreatureAction::new(limited_use, action, spellcasting, annotations)
    }
}

/// Parses an action description with the default configuration.
#[must_use]
pub fn parse_action(text: &str) -> Option<Action> {
    ActionGrammar::default().parse(text)
}

/// Like [`parse_action`], also returning the unconsumed text.
#[must_use]
pub fn parse_action_raw(text: &str) -> Option<(Action, String)> {
    ActionGrammar::default().parse_raw(text)
}

/// Parses an action's name and description.
#[must_use]
pub fn parse_creature_action(
    name: &str,
    description: &str,
    config: &GrammarConfig,
) -> Option<ParsedCreatureAction> {
    ActionGrammar::new(config).parse_creature_action(name, description)
}

/// Everything recognized in an action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedCreatureAction {
    /// Usage limit from the name. The range is into the name.
    pub limited_use: Option<Located<LimitedUse>>,
    /// The attack or saving throw.
    pub action: Option<Action>,
    /// Spellcasting, for actions named after it.
    pub spellcasting: Option<Spellcasting>,
    /// Dice and references in the description, outside spell lists.
    pub other_description_annotations: Vec<Located<TextAnnotation>>,
}

impl ParsedCreatureAction {
    /// Combines the parts, or returns `None` if every part is empty.
    #[must_use]
    pub fn new(
        limited_use: Option<Located<LimitedUse>>,
        action: Option<Action>,
        spellcasting: Option<Spellcasting>,
        other_description_annotations: Vec<Located<TextAnnotation>>,
    ) -> Option<Self> {
        if limited_use.is_none()
            && action.is_none()
            && spellcasting.is_none()
            && other_description_annotations.is_empty()
        {
            return None;
        }
        Some(Self {
            limited_use,
            action,
            spellcasting,
            other_description_annotations,
        })
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
