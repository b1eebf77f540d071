//! Attack roll actions.
//!
//! `Melee Weapon Attack: +4 to hit, reach 5 ft., one target. Hit: ...` and
//! the newer `Melee Attack Roll: +4, reach 5 ft. Hit: ...`.

use std::sync::Arc;

use bestiary_combinator::{
    Parser, char_eq, character, either, either3, end, int, keyword, literal, many, nothing,
    one_or_more, signed_int, skip_until, whitespace, zip, zip3, zip4, zip5, zip6,
};
use bestiary_foundation::Modifier;

use super::effect::effects;
use super::model::{AttackRange, ConditionalHitModifier, Effect, WeaponAttack};
use crate::vocabulary::ConditionVocabulary;

/// An attack: preamble, hit bonus, ranges, and what happens on a hit.
///
/// At least one reach or range clause is required.
pub(crate) fn weapon_attack(vocabulary: &Arc<ConditionVocabulary>) -> Parser<WeaponAttack> {
    zip6(
        preamble(),
        hit_modifier(),
        zip(literal(","), whitespace().optional()).optional(),
        ranges(),
        target_clause().optional(),
        hit(vocabulary),
    )
    .map(|(_, (hit_modifier, conditional_hit_modifiers), _, ranges, _, effects)| {
        WeaponAttack {
            hit_modifier,
            conditional_hit_modifiers,
            ranges,
            effects,
        }
    })
    .log("weapon_attack")
}

/// Scans to the first attack label, e.g. `melee or ranged weapon attack:`.
fn preamble() -> Parser<()> {
    let label = either3(
        literal("weapon attack:"),
        literal("spell attack:"),
        literal("attack roll:"),
    );
    zip(skip_until(label), whitespace().optional()).value(())
}

/// `+4 to hit` or `+7 to hit (+8 to hit with shortsword)`.
fn hit_modifier() -> Parser<(Modifier, Vec<ConditionalHitModifier>)> {
    let conditional = zip3(whitespace().optional(), char_eq('('), skip_until(char_eq(')')))
        .map(|(_, _, (inner, _))| conditional_hit_modifiers(&inner));
    zip3(
        signed_int(),
        zip(whitespace(), literal("to hit")).optional(),
        conditional.optional(),
    )
    .map(|(modifier, _, conditional)| (Modifier(modifier), conditional.unwrap_or_default()))
}

/// Every `+N to hit [with X]` inside a hit-bonus parenthetical.
fn conditional_hit_modifiers(text: &str) -> Vec<ConditionalHitModifier> {
    let condition = zip3(
        whitespace().optional(),
        literal("with"),
        one_or_more(character(|c| !matches!(c, ',' | ';'))).joined(""),
    )
    .map(|(_, _, condition)| format!("with {}", condition.trim()));
    zip4(
        signed_int(),
        whitespace().optional(),
        literal("to hit"),
        condition.optional(),
    )
    .map(|(modifier, _, _, condition)| ConditionalHitModifier {
        hit_modifier: Modifier(modifier),
        condition: condition.unwrap_or_else(|| "conditional".to_string()),
    })
    .matches(text)
    .into_iter()
    .map(|found| found.value)
    .collect()
}

/// `reach 5 ft. or range 20/60 ft.`
fn ranges() -> Parser<Vec<AttackRange>> {
    let reach = zip5(
        whitespace().optional(),
        literal("reach "),
        int(),
        whitespace(),
        literal("ft."),
    )
    .map(|(_, _, reach, _, _)| AttackRange::Reach(reach));
    let long = zip4(
        whitespace().optional(),
        char_eq('/'),
        whitespace().optional(),
        int(),
    )
    .map(|(_, _, _, long)| long);
    let range = zip6(
        whitespace().optional(),
        literal("range "),
        int(),
        long.optional(),
        literal(" ft"),
        literal(".").optional(),
    )
    .map(|(_, _, normal, long, _, _)| AttackRange::Range(normal, long));
    let separator =
        one_or_more(either(literal(","), keyword("or")).trimming(whitespace()));
    many(either(reach, range), separator, nothing()).filter(|ranges| !ranges.is_empty())
}

/// `, one target.` up to and including the full stop.
fn target_clause() -> Parser<()> {
    let full_stop = zip(literal("."), either(whitespace().value(()), end()));
    zip3(literal(","), whitespace().optional(), skip_until(full_stop)).value(())
}

/// `Hit: ...`; the label itself is optional.
fn hit(vocabulary: &Arc<ConditionVocabulary>) -> Parser<Vec<Effect>> {
    zip4(
        whitespace().optional(),
        literal("hit:").optional(),
        whitespace().optional(),
        effects(vocabulary),
    )
    .map(|(_, _, _, effects)| effects)
}
