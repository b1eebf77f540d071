//! Saving throw actions in the newer stat block layout.
//!
//! ```text
//! Dexterity Saving Throw: DC 18, each creature in a 60-foot line.
//! Failure: 54 (12d8) acid damage. Success: Half damage.
//! ```

use bestiary_combinator::{
    Cursor, Parser, char_eq, either5, int, literal, skip_until, whitespace, word, word_start,
    zip, zip3, zip7,
};
use bestiary_foundation::Ability;

use super::effect::trim_residue;
use super::model::{Effect, Outcome, OutcomeKind, SavingThrow, SavingThrowAction};

const RIDER_PREFIX: &str = "this effect ends";

/// Parses a case-folded saving throw action.
///
/// Returns `None` unless the header matches and at least one labeled
/// outcome yields an effect.
pub(crate) fn saving_throw_action(
    text: &[char],
    effects: &Parser<Vec<Effect>>,
) -> Option<SavingThrowAction> {
    let ((saving_throw, target), rest) = header().parse(Cursor::new(text))?;
    let body = rest.remainder();
    let body: Vec<char> = body.trim().chars().collect();
    if body.is_empty() {
        return None;
    }
    let outcomes = outcomes(&body, saving_throw, effects);
    if outcomes.is_empty() {
        return None;
    }
    Some(SavingThrowAction {
        saving_throw,
        target: Some(target.trim().to_string()).filter(|target| !target.is_empty()),
        outcomes,
    })
}

/// `dexterity saving throw: dc 18, <target>.`
fn header() -> Parser<(SavingThrow, String)> {
    let ability = word().flat_map(|name| Ability::from_name(&name));
    let target = skip_until(zip(char_eq('.'), whitespace().optional()))
        .map(|(target, _)| target)
        .filter(|target| !target.is_empty());
    zip7(
        ability,
        whitespace(),
        literal("saving throw:"),
        whitespace().optional(),
        zip(literal("dc"), whitespace()),
        int(),
        zip3(literal(","), whitespace().optional(), target),
    )
    .map(|(ability, _, _, _, _, dc, (_, _, target))| (SavingThrow::new(ability, dc), target))
}

fn outcome_label() -> Parser<OutcomeKind> {
    let label = either5(
        literal("failure or success").value(OutcomeKind::FailureOrSuccess),
        literal("first failure").value(OutcomeKind::FirstFailure),
        literal("second failure").value(OutcomeKind::SecondFailure),
        literal("failure").value(OutcomeKind::Failure),
        literal("success").value(OutcomeKind::Success),
    );
    zip3(
        word_start(),
        label,
        zip3(whitespace().optional(), char_eq(':'), whitespace().optional()),
    )
    .map(|(_, label, _)| label)
}

/// Splits the body at each outcome label and parses the text in between.
fn outcomes(body: &[char], saving_throw: SavingThrow, effects: &Parser<Vec<Effect>>) -> Vec<Outcome> {
    let labels = outcome_label().matches_in(Cursor::new(body));
    labels
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let end = labels
                .get(index + 1)
                .map_or(body.len(), |next| next.span.start);
            let segment: String = body[label.span.end..end].iter().collect();
            let effects = segment_effects(segment.trim(), saving_throw, effects);
            (!effects.is_empty()).then(|| Outcome {
                outcome: label.value,
                effects,
            })
        })
        .collect()
}

fn segment_effects(
    segment: &str,
    saving_throw: SavingThrow,
    effects: &Parser<Vec<Effect>>,
) -> Vec<Effect> {
    if segment.is_empty() {
        return Vec::new();
    }
    let recap = |mut effect: Effect| {
        effect.conditions.saving_throw = Some(saving_throw);
        effect
    };
    match effects.run_raw(segment) {
        Some((mut parsed, rest)) if !parsed.is_empty() => {
            let trailing = trim_residue(&rest);
            if !trailing.is_empty() {
                parsed.push(Effect::other(trailing));
            }
            merge_riders(parsed).into_iter().map(recap).collect()
        }
        _ => {
            let fallback = trim_residue(segment);
            if fallback.is_empty() {
                Vec::new()
            } else {
                vec![recap(Effect::other(fallback))]
            }
        }
    }
}

/// Folds a free-text `this effect ends ...` sentence into the comment of
/// the condition before it.
fn merge_riders(effects: Vec<Effect>) -> Vec<Effect> {
    let mut merged: Vec<Effect> = Vec::with_capacity(effects.len());
    for effect in effects {
        if let Some(rider) = rider_text(&effect) {
            if let Some(condition) = merged.last_mut().and_then(|last| last.condition.as_mut()) {
                condition.comment = Some(match condition.comment.take().filter(|c| !c.is_empty()) {
                    Some(comment) => format!("{comment}. {rider}"),
                    None => rider.to_string(),
                });
                continue;
            }
        }
        merged.push(effect);
    }
    merged
}

fn rider_text(effect: &Effect) -> Option<&str> {
    let other_only = effect.damage.is_empty()
        && effect.condition.is_none()
        && effect.conditions.is_empty()
        && !effect.replaces_damage;
    effect
        .other
        .as_deref()
        .filter(|text| other_only && text.to_lowercase().starts_with(RIDER_PREFIX))
}
