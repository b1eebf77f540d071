use bestiary_combinator::{
    Parser, any, char_eq, horizontal_whitespace, int, literal, signed_int, word, zip, zip3, zip4,
};
use bestiary_foundation::DiceExpression;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dice::dice_expression;

/// An armor class line such as `12 (natural armor)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArmorClass {
    /// The armor class.
    pub value: u32,
    /// The parenthesized source of the armor, if given.
    pub description: Option<String>,
}

/// A hit point line such as `225 (18d12 + 108)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HitPoints {
    /// Average hit points.
    pub value: u32,
    /// The hit dice, if given and well formed.
    pub dice: Option<DiceExpression>,
}

/// `12` or `12 (natural armor)`.
#[must_use]
pub fn armor_class() -> Parser<ArmorClass> {
    let words = any(zip(word(), horizontal_whitespace().optional()).map(|(w, _)| w)).joined(" ");
    let description = zip3(literal("(").skipping_any_before(), words, literal(")"))
        .map(|(_, description, _)| description);
    zip(int(), description.optional()).map(|(value, description)| ArmorClass { value, description })
}

/// Parses an armor class line.
#[must_use]
pub fn parse_armor_class(text: &str) -> Option<ArmorClass> {
    armor_class().run(text)
}

/// `3` or `1 (1d6)`. An unterminated dice group is ignored.
#[must_use]
pub fn hit_points() -> Parser<HitPoints> {
    let dice = zip3(char_eq('(').skipping_any_before(), dice_expression(), char_eq(')'))
        .map(|(_, dice, _)| dice);
    zip(int(), dice.optional()).map(|(value, dice)| HitPoints { value, dice })
}

/// Parses a hit point line.
#[must_use]
pub fn parse_hit_points(text: &str) -> Option<HitPoints> {
    hit_points().run(text)
}

/// `Dex +1, Cha +5` or `Perception +1, Stealth +5`.
#[must_use]
pub fn modifier_list() -> Parser<Vec<(String, i32)>> {
    any(
        zip4(word(), horizontal_whitespace(), signed_int(), literal(", ").optional())
            .map(|(label, _, modifier, _)| (label, modifier)),
    )
}

/// Parses a labeled modifier list; unparseable text yields no entries.
#[must_use]
pub fn parse_modifier_list(text: &str) -> Vec<(String, i32)> {
    modifier_list().run(text).unwrap_or_default()
}
