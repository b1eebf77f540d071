//! Usage limits written into feature and action names.

use bestiary_combinator::{
    Cursor, Parser, char_eq, char_in, choice, fold_case, int, literal, zip, zip3, zip4,
};
use bestiary_foundation::{LimitedUse, Located};

/// The first usage limit in a case-folded name.
///
/// Recognizes `3/day`, `1e/day each`, `recharge 5-6`, `recharge 6`, and
/// `recharges after a short rest` (or long rest, or either). The located
/// range covers the limit itself, not the parentheses around it.
#[must_use]
pub fn limited_use_in_name() -> Parser<Located<LimitedUse>> {
    let per_day = zip4(
        int(),
        char_eq('e').optional(),
        literal("/day"),
        literal(" each").optional(),
    )
    .map(|(amount, _, _, _)| LimitedUse::per_day(amount));
    let recharge = zip3(
        literal("recharge "),
        zip(int(), char_in("-–")).optional(),
        int(),
    )
    .map(|(_, lower, upper)| {
        let lower = lower.map_or(upper, |(lower, _)| lower);
        LimitedUse::recharge_on(lower.min(upper)..=upper.max(lower))
    });
    let rest = |text: &str, short: bool, long: bool| {
        literal(text).value(LimitedUse::per_rest(short, long))
    };
    choice(vec![
        per_day,
        recharge,
        rest("recharges after a short or long rest", true, true),
        rest("recharges after a short rest", true, false),
        rest("recharges after a long rest", false, true),
    ])
    .located()
    .skipping_any_before()
    .log("limited_use_in_name")
}

/// Parses the usage limit in a name, with character offsets into `name`.
#[must_use]
pub fn parse_limited_use(name: &str) -> Option<Located<LimitedUse>> {
    let chars = fold_case(name);
    limited_use_in_name()
        .parse(Cursor::new(&chars))
        .map(|(found, _)| found)
}
