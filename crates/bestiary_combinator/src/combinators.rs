//! Free-standing combinators: sequencing, choice, repetition, and scanning.

use crate::parser::Parser;

/// Runs two parsers in sequence.
#[must_use]
pub fn zip<A: 'static, B: 'static>(a: Parser<A>, b: Parser<B>) -> Parser<(A, B)> {
    a.followed_by(b)
}

macro_rules! zip_n {
    ($(#[$doc:meta])* $name:ident, $($parser:ident => $value:ident : $ty:ident),+) => {
        $(#[$doc])*
        #[must_use]
        #[allow(clippy::many_single_char_names, clippy::too_many_arguments)]
        pub fn $name<$($ty: 'static),+>($($parser: Parser<$ty>),+) -> Parser<($($ty,)+)> {
            Parser::new(move |input| {
                let rest = input;
                $(let ($value, rest) = $parser.parse(rest)?;)+
                Some((($($value,)+), rest))
            })
        }
    };
}

zip_n!(
    /// Runs three parsers in sequence.
    zip3, a => va: A, b => vb: B, c => vc: C
);
zip_n!(
    /// Runs four parsers in sequence.
    zip4, a => va: A, b => vb: B, c => vc: C, d => vd: D
);
zip_n!(
    /// Runs five parsers in sequence.
    zip5, a => va: A, b => vb: B, c => vc: C, d => vd: D, e => ve: E
);
zip_n!(
    /// Runs six parsers in sequence.
    zip6, a => va: A, b => vb: B, c => vc: C, d => vd: D, e => ve: E, f => vf: F
);
zip_n!(
    /// Runs seven parsers in sequence.
    zip7, a => va: A, b => vb: B, c => vc: C, d => vd: D, e => ve: E, f => vf: F, g => vg: G
);

/// Tries each alternative in order from the same position.
#[must_use]
pub fn choice<A: 'static>(alternatives: Vec<Parser<A>>) -> Parser<A> {
    Parser::new(move |input| alternatives.iter().find_map(|p| p.parse(input)))
}

/// Tries `a`, then `b`.
#[must_use]
pub fn either<A: 'static>(a: Parser<A>, b: Parser<A>) -> Parser<A> {
    a.or(b)
}

/// Tries three alternatives in order.
#[must_use]
pub fn either3<A: 'static>(a: Parser<A>, b: Parser<A>, c: Parser<A>) -> Parser<A> {
    choice(vec![a, b, c])
}

/// Tries four alternatives in order.
#[must_use]
pub fn either4<A: 'static>(a: Parser<A>, b: Parser<A>, c: Parser<A>, d: Parser<A>) -> Parser<A> {
    choice(vec![a, b, c, d])
}

/// Tries five alternatives in order.
#[must_use]
pub fn either5<A: 'static>(
    a: Parser<A>,
    b: Parser<A>,
    c: Parser<A>,
    d: Parser<A>,
    e: Parser<A>,
) -> Parser<A> {
    choice(vec![a, b, c, d, e])
}

/// Tries six alternatives in order.
#[must_use]
pub fn either6<A: 'static>(
    a: Parser<A>,
    b: Parser<A>,
    c: Parser<A>,
    d: Parser<A>,
    e: Parser<A>,
    f: Parser<A>,
) -> Parser<A> {
    choice(vec![a, b, c, d, e, f])
}

/// Zero or more repetitions. Always succeeds.
///
/// An element that succeeds without consuming input ends the repetition.
#[must_use]
pub fn any<A: 'static>(element: Parser<A>) -> Parser<Vec<A>> {
    Parser::new(move |input| {
        let mut values = Vec::new();
        let mut cursor = input;
        while let Some((value, rest)) = element.parse(cursor) {
            if rest.position() == cursor.position() {
                break;
            }
            values.push(value);
            cursor = rest;
        }
        Some((values, cursor))
    })
}

/// One or more repetitions.
#[must_use]
pub fn one_or_more<A: 'static>(element: Parser<A>) -> Parser<Vec<A>> {
    any(element).filter(|values| !values.is_empty())
}

/// Elements separated by `separator`, followed by `terminator`.
///
/// A separator that is not followed by another element is left
/// unconsumed. Fails only if `terminator` does not match after the last
/// element.
#[must_use]
pub fn many<A, S, T>(element: Parser<A>, separator: Parser<S>, terminator: Parser<T>) -> Parser<Vec<A>>
where
    A: 'static,
    S: 'static,
    T: 'static,
{
    Parser::new(move |input| {
        let mut values = Vec::new();
        let mut committed = input;
        let mut cursor = input;
        while let Some((value, rest)) = element.parse(cursor) {
            values.push(value);
            committed = rest;
            match separator.parse(rest) {
                Some((_, after_separator)) => cursor = after_separator,
                None => break,
            }
        }
        let (_, rest) = terminator.parse(committed)?;
        Some((values, rest))
    })
}

/// Scans forward until `parser` matches.
///
/// Yields the skipped text (excluding the match) and the match itself.
/// Fails if `parser` never matches, including at the end of input.
#[must_use]
pub fn skip_until<A: 'static>(parser: Parser<A>) -> Parser<(String, A)> {
    Parser::new(move |input| {
        let mut cursor = input;
        loop {
            if let Some((value, rest)) = parser.parse(cursor) {
                return Some(((input.text_until(cursor), value), rest));
            }
            if cursor.is_at_end() {
                return None;
            }
            cursor = cursor.advance(1);
        }
    })
}

/// Consumes everything that is left. Always succeeds.
#[must_use]
pub fn remainder() -> Parser<String> {
    Parser::new(|input| {
        let rest = input.remainder();
        Some((rest, input.at(input.len())))
    })
}

/// Succeeds only at the end of input.
#[must_use]
pub fn end() -> Parser<()> {
    Parser::new(|input| input.is_at_end().then_some(((), input)))
}

/// Always fails.
#[must_use]
pub fn never<A: 'static>() -> Parser<A> {
    Parser::new(|_| None)
}

/// Always succeeds without consuming anything.
#[must_use]
pub fn nothing() -> Parser<()> {
    Parser::new(|input| Some(((), input)))
}
