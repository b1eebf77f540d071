//! Dice expressions in prose.
//!
//! Recognizes `2d6`, `1d8 + 3`, `12`, and a bare signed modifier such as
//! `+5`, which stands for a d20 roll (`1d20 + 5`).

use bestiary_combinator::{
    Cursor, Parser, any, char_eq, char_in, either, int, signed_int, zip, zip3,
};
use bestiary_foundation::{DiceExpression, Located, Operator};

/// A complete dice expression.
#[must_use]
pub fn dice_expression() -> Parser<DiceExpression> {
    zip(term(), any(zip(operator(), term())))
        .map(|(first, rest)| {
            rest.into_iter()
                .fold(first, |lhs, (op, rhs)| DiceExpression::compound(lhs, op, rhs))
        })
        .or(d20_modifier())
}

/// A dice expression that rolls at least one die.
#[must_use]
pub fn rolled_dice_expression() -> Parser<DiceExpression> {
    dice_expression().filter(|expr| expr.has_dice())
}

/// Every rolled dice expression in the case-folded `text`.
///
/// Plain numbers are skipped; only expressions with at least one die
/// (including bare modifiers) are reported.
#[must_use]
pub fn dice_expression_matches(text: &[char]) -> Vec<Located<DiceExpression>> {
    rolled_dice_expression().matches_in(Cursor::new(text))
}

fn term() -> Parser<DiceExpression> {
    let dice = zip3(int(), char_eq('d'), int())
        .map(|(count, _, sides)| DiceExpression::dice(count, sides));
    let number = int().flat_map(|n| i32::try_from(n).ok().map(DiceExpression::Number));
    either(dice, number)
}

fn operator() -> Parser<Operator> {
    let symbol = either(
        char_eq('+').value(Operator::Add),
        char_eq('-').value(Operator::Subtract),
    );
    zip3(any(char_in(" ")), symbol, any(char_in(" "))).map(|(_, op, _)| op)
}

fn d20_modifier() -> Parser<DiceExpression> {
    signed_int().map(DiceExpression::d20_check)
}
