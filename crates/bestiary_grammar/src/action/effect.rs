//! What happens on a hit or a failed save.
//!
//! At each position the clause shapes are tried in a fixed order and the
//! first one that matches wins. Damage followed by a special qualifier
//! (versatile grip, melee/range split, an alternative condition) is tried
//! before plain damage so the plain form does not claim only its first
//! half. Text that fits no shape is kept verbatim as a free-text effect.

use std::sync::Arc;

use bestiary_combinator::{
    Parser, char_eq, either, either3, either4, either6, end, int, keyword, literal, many,
    nothing, one_or_more, remainder, skip_until, whitespace, word, word_end, zip, zip3, zip4,
    zip5, zip6, zip7,
};
use bestiary_foundation::{Ability, CreatureCondition, DamageType};

use super::model::{
    AttackType, Conditions, Damage, Effect, SaveEffect, SavingThrow, WeaponGrip,
};
use crate::dice::dice_expression;
use crate::vocabulary::ConditionVocabulary;

const THE_TARGET: &str = "the target";

/// Effect clauses separated by `,`, `and`, `plus`, or `.`.
pub(crate) fn effects(vocabulary: &Arc<ConditionVocabulary>) -> Parser<Vec<Effect>> {
    let element = either6(
        versatile_damage(),
        range_conditioned_damage(),
        conditional_alternative_damage(),
        replacement(),
        damage_effect(),
        saving_throw_conditioned(vocabulary),
    )
    .or(other_conditioned(vocabulary))
    .or(other_effect(vocabulary))
    .or(fallback_remainder());
    let separator = one_or_more(
        either4(literal(","), keyword("and"), keyword("plus"), literal("."))
            .trimming(whitespace()),
    );
    many(element, separator, nothing())
        .map(|groups| groups.into_iter().flatten().collect())
        .log("effects")
}

/// `dc 12 constitution saving throw`
pub(crate) fn saving_throw() -> Parser<SavingThrow> {
    zip6(
        literal("dc "),
        int(),
        whitespace(),
        ability(),
        whitespace(),
        literal("saving throw"),
    )
    .map(|(_, dc, _, ability, _, _)| SavingThrow::new(ability, dc))
}

/// `7 (1d10 + 2) piercing damage`, `1 piercing damage`, or
/// `9 (2d8) fire or cold damage`.
pub(crate) fn damage() -> Parser<Damage> {
    let dice = zip4(whitespace(), char_eq('('), dice_expression(), char_eq(')'))
        .map(|(_, _, dice, _)| dice);
    let alternative = zip4(whitespace(), keyword("or"), whitespace(), damage_type())
        .map(|(_, _, _, damage_type)| damage_type);
    zip6(
        int(),
        dice.optional(),
        whitespace(),
        damage_type(),
        alternative.optional(),
        zip(whitespace(), literal("damage")),
    )
    .map(|(static_damage, dice, _, damage_type, alternative, _)| Damage {
        static_damage,
        dice,
        damage_type,
        alternative_types: alternative.into_iter().collect(),
    })
}

/// Trims whitespace, then stray punctuation, from leftover text.
pub(crate) fn trim_residue(text: &str) -> &str {
    text.trim()
        .trim_matches(|c: char| matches!(c, '.' | ',' | ';' | ':'))
}

fn ability() -> Parser<Ability> {
    word().flat_map(|name| Ability::from_name(&name))
}

fn damage_type() -> Parser<DamageType> {
    word().flat_map(|name| DamageType::from_name(&name))
}

fn condition_word(vocabulary: &Arc<ConditionVocabulary>) -> Parser<CreatureCondition> {
    let vocabulary = Arc::clone(vocabulary);
    word().flat_map(move |name| vocabulary.lookup(&name))
}

fn phrase(text: &str) -> Parser<String> {
    literal(text).trimming(whitespace())
}

fn spaced_keyword(text: &str) -> Parser<String> {
    keyword(text).trimming(whitespace())
}

/// A full stop, or the end of the text.
fn sentence_end() -> Parser<()> {
    either(literal(".").value(()), end()).trimming(whitespace())
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn gated(effect: Effect, conditions: Conditions) -> Effect {
    effect.with_conditions(conditions)
}

fn on_failed_save(mut effect: Effect, save: SavingThrow) -> Effect {
    effect.conditions.saving_throw = Some(save);
    effect
}

fn with_subject(mut effect: Effect, subject: &str) -> Effect {
    if subject != THE_TARGET {
        effect.conditions.other = Some(subject.to_string());
    }
    effect
}

/// `the target`, `the creature`, or `a swallowed creature`.
fn subject() -> Parser<String> {
    either3(
        literal(THE_TARGET),
        literal("the creature"),
        literal("a swallowed creature"),
    )
    .terminated_by(word_end())
    .trimming(whitespace())
}

fn parenthetical() -> Parser<String> {
    zip3(whitespace().optional(), char_eq('('), skip_until(char_eq(')')))
        .map(|(_, _, (inner, _))| inner)
}

fn damage_list() -> Parser<Vec<Damage>> {
    let separator = one_or_more(
        either3(literal(","), keyword("and"), keyword("plus")).trimming(whitespace()),
    );
    many(damage(), separator, nothing()).filter(|damage| !damage.is_empty())
}

/// One or more damage clauses, optionally followed by a parenthetical
/// that is kept as a free-text effect.
fn damage_effect() -> Parser<Vec<Effect>> {
    zip(damage_list(), parenthetical().optional()).map(|(damage, comment)| {
        let mut effects = vec![Effect::damage(damage)];
        effects.extend(comment.map(|inner| Effect::other(format!("({inner})"))));
        effects
    })
}

/// `9 (2d6 + 2) piercing damage in melee or 5 (1d6 + 2) piercing damage at range`
fn range_conditioned_damage() -> Parser<Vec<Effect>> {
    zip4(damage(), phrase("in melee or"), damage(), phrase("at range")).map(
        |(melee, _, ranged, _)| {
            vec![
                gated(
                    Effect::damage(vec![melee]),
                    Conditions {
                        attack_type: Some(AttackType::Melee),
                        ..Conditions::default()
                    },
                ),
                gated(
                    Effect::damage(vec![ranged]),
                    Conditions {
                        attack_type: Some(AttackType::Ranged),
                        ..Conditions::default()
                    },
                ),
            ]
        },
    )
}

/// `6 (1d8 + 2) piercing damage, or 11 (2d8 + 2) piercing damage while enlarged`
fn conditional_alternative_damage() -> Parser<Vec<Effect>> {
    let condition = either6(
        literal("with shillelagh or if wielded with two hands"),
        literal("if the swarm has half of its hit points or fewer"),
        literal("while enlarged"),
        literal("in small or medium form"),
        literal("with shillelagh"),
        literal("if wielded with two hands"),
    )
    .trimming(whitespace());
    zip5(
        damage(),
        phrase(",").optional(),
        spaced_keyword("or"),
        damage(),
        condition,
    )
    .map(|(default, _, _, alternative, condition)| {
        vec![
            Effect::damage(vec![default]),
            gated(
                Effect::damage(vec![alternative]),
                Conditions {
                    other: Some(condition),
                    ..Conditions::default()
                },
            ),
        ]
    })
}

/// `7 (1d8 + 3) bludgeoning damage, or 8 (1d10 + 3) bludgeoning damage if used with two hands`
fn versatile_damage() -> Parser<Vec<Effect>> {
    let melee_only =
        either(literal("in melee"), literal("to make a melee attack")).trimming(whitespace());
    zip6(
        damage(),
        phrase(",").optional(),
        spaced_keyword("or"),
        damage(),
        phrase("if used with two hands"),
        melee_only.optional(),
    )
    .map(|(one_handed, _, _, two_handed, _, _)| {
        vec![
            gated(
                Effect::damage(vec![one_handed]),
                Conditions {
                    grip: Some(WeaponGrip::OneHanded),
                    ..Conditions::default()
                },
            ),
            gated(
                Effect::damage(vec![two_handed]),
                Conditions {
                    grip: Some(WeaponGrip::TwoHanded),
                    ..Conditions::default()
                },
            ),
        ]
    })
}

/// `Instead of dealing damage, the vampire can grapple the target (escape DC 18)`
fn replacement() -> Parser<Vec<Effect>> {
    let grapple = zip(skip_until(phrase("grapple the target")), parenthetical().optional())
        .map(|(_, comment)| {
            Effect::condition(CreatureCondition::Grappled, comment).replacing_damage()
        });
    let other = skip_until(sentence_end())
        .flat_map(|(text, ())| non_empty(&text).map(|text| Effect::other(text).replacing_damage()));
    zip3(
        phrase("instead of dealing damage"),
        phrase(",").optional(),
        either(grapple, other),
    )
    .map(|(_, _, effect)| vec![effect])
}

/// `the target must make a DC 11 Constitution saving throw, taking ...` or
/// `the target must succeed on a DC 13 Strength saving throw or ...`.
fn saving_throw_conditioned(vocabulary: &Arc<ConditionVocabulary>) -> Parser<Vec<Effect>> {
    let half = zip3(
        literal(",").optional(),
        whitespace().optional(),
        literal("or half as much damage on a successful one"),
    );
    let must_make = zip7(
        phrase("the target must make a"),
        saving_throw(),
        phrase(",").optional(),
        literal("taking "),
        damage_effect(),
        phrase("on a failed save"),
        half.optional(),
    )
    .map(|(_, save, _, _, effects, _, half)| {
        let save = if half.is_some() {
            save.with_save_effect(SaveEffect::Half)
        } else {
            save
        };
        effects
            .into_iter()
            .map(|effect| on_failed_save(effect, save))
            .collect()
    });
    let must_succeed = zip(subject(), must_succeed_effects(vocabulary)).map(|(subject, effects)| {
        effects
            .into_iter()
            .map(|effect| with_subject(effect, &subject))
            .collect()
    });
    either(must_make, must_succeed)
}

/// A `must succeed` clause plus an optional `fails by N or more` rider.
fn must_succeed_effects(vocabulary: &Arc<ConditionVocabulary>) -> Parser<Vec<Effect>> {
    zip(must_succeed(vocabulary), failure_margin_rider(vocabulary).optional()).map(
        |(primary, rider)| {
            let save = primary.conditions.saving_throw;
            let mut effects = vec![primary];
            if let (Some((margin, effect)), Some(save)) = (rider, save) {
                let save = SavingThrow::new(save.ability, save.dc).with_failure_margin(margin);
                effects.push(on_failed_save(effect, save));
            }
            effects
        },
    )
}

fn must_succeed(vocabulary: &Arc<ConditionVocabulary>) -> Parser<Effect> {
    let take = zip(phrase("take"), damage()).map(|(_, damage)| Effect::damage(vec![damage]));
    let become_condition = zip(phrase("become"), condition_word(vocabulary))
        .map(|(_, condition)| Effect::condition(condition, None));
    let knocked_prone =
        literal("be knocked prone").value(Effect::condition(CreatureCondition::Prone, None));
    let other = skip_until(sentence_end())
        .flat_map(|(text, ())| non_empty(&text).map(Effect::other));
    zip4(
        phrase("must succeed on a"),
        saving_throw(),
        skip_until(spaced_keyword("or")),
        either4(take, become_condition, knocked_prone, other),
    )
    .map(|(_, save, _, effect)| on_failed_save(effect, save))
}

/// `If the saving throw fails by 5 or more, the target is ...`
fn failure_margin_rider(vocabulary: &Arc<ConditionVocabulary>) -> Parser<(u32, Effect)> {
    zip7(
        phrase(".").optional(),
        phrase("if the saving throw fails by"),
        int(),
        phrase("or more"),
        phrase(",").optional(),
        subject(),
        then_effect(vocabulary),
    )
    .map(|(_, _, margin, _, _, _, effect)| (margin, effect))
}

/// What happens to a subject: `takes ...`, `has the X condition`,
/// `is X (comment)`, or free text up to the end of the sentence.
fn then_effect(vocabulary: &Arc<ConditionVocabulary>) -> Parser<Effect> {
    let takes = zip(phrase("takes"), damage()).map(|(_, damage)| Effect::damage(vec![damage]));
    let has = zip5(
        spaced_keyword("has"),
        phrase("the").optional(),
        condition_word(vocabulary).trimming(whitespace()),
        spaced_keyword("condition"),
        skip_until(sentence_end()).optional(),
    )
    .map(|(_, _, condition, _, comment)| {
        let comment = comment.and_then(|(text, ())| non_empty(&text));
        Effect::condition(condition, comment)
    });
    let comment = either(
        zip3(char_eq('('), skip_until(char_eq(')')), skip_until(sentence_end()))
            .map(|(_, (inner, _), _)| inner),
        skip_until(sentence_end()).map(|(text, ())| text),
    );
    let is = zip3(
        either(spaced_keyword("is"), spaced_keyword("becomes")),
        condition_word(vocabulary).trimming(whitespace()),
        comment,
    )
    .map(|(_, condition, comment)| Effect::condition(condition, non_empty(&comment)));
    let other = skip_until(sentence_end())
        .flat_map(|(text, ())| non_empty(&text).map(Effect::other));
    either4(takes, has, is, other)
}

/// `If the target is a Large or smaller creature, it is grappled ...`
fn other_conditioned(vocabulary: &Arc<ConditionVocabulary>) -> Parser<Vec<Effect>> {
    let pronoun = either3(literal("it"), literal(THE_TARGET), literal("the creature"))
        .terminated_by(word_end())
        .trimming(whitespace());
    let first_save =
        must_succeed_effects(vocabulary).flat_map(|effects| effects.into_iter().next());
    zip4(
        phrase("if the target is"),
        skip_until(phrase(",")),
        pronoun,
        either(first_save, then_effect(vocabulary)),
    )
    .map(|(_, (clause, _), _, mut effect)| {
        effect.conditions.other = Some(format!("the target is {}", clause.trim()));
        vec![effect]
    })
}

/// `the target is grappled (escape DC 14)`
fn other_effect(vocabulary: &Arc<ConditionVocabulary>) -> Parser<Vec<Effect>> {
    zip(subject(), then_effect(vocabulary))
        .map(|(subject, effect)| vec![with_subject(effect, &subject)])
}

fn fallback_remainder() -> Parser<Vec<Effect>> {
    remainder().flat_map(|text| {
        let text = trim_residue(&text);
        (!text.is_empty()).then(|| vec![Effect::other(text)])
    })
}
