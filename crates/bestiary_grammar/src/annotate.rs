//! Inline annotations over description prose.

use bestiary_foundation::{Located, Span, TextAnnotation};

use crate::config::GrammarConfig;
use crate::dice::dice_expression_matches;

/// Dice to roll and catalog names to link in a case-folded description.
///
/// Names inside `excluded` spans (already linked by a structured spell
/// list) are left out.
#[must_use]
pub fn description_annotations(
    text: &[char],
    excluded: &[Span],
    config: &GrammarConfig,
) -> Vec<Located<TextAnnotation>> {
    let mut annotations = Vec::new();
    if config.annotate_dice {
        annotations.extend(
            dice_expression_matches(text)
                .into_iter()
                .map(|found| found.map(TextAnnotation::from)),
        );
    }
    annotations.extend(
        config
            .references
            .find_in(text)
            .into_iter()
            .filter(|found| !excluded.iter().any(|span| span.overlaps(&found.span)))
            .map(|found| found.map(TextAnnotation::Reference)),
    );
    annotations
}
