//! Memoized parse results.
//!
//! A [`Parseable`] keeps the raw input next to the result of parsing it,
//! tagged with the parser's name and version and the result model's
//! version. The result is recomputed only when one of those tags no longer
//! matches the parser being applied:
//!
//! ```text
//! Parseable { input, result: None }
//!        │ parse_if_needed(&parser)
//!        ▼
//! Parseable { input, result: Some(ParserResult { value, parser_name, version, model_version }) }
//!        │ parser version bumped
//!        ▼
//! parse_if_needed(&parser) re-runs the grammar
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A type produced by a domain parser.
pub trait DomainModel {
    /// Bump when the model changes in a way that requires recomputing
    /// stored results.
    const VERSION: &'static str;
}

/// A parser turning some input into a domain model.
pub trait DomainParser {
    /// What the parser reads.
    type Input;
    /// What the parser produces.
    type Output: DomainModel;

    /// Name recorded with every result.
    fn name(&self) -> &'static str;

    /// Bump when a grammar change alters the output for the same input.
    fn version(&self) -> &'static str;

    /// Parses the input, or returns `None` if nothing was recognized.
    fn parse(&self, input: &Self::Input) -> Option<Self::Output>;
}

/// A cached parse result with the tags it was computed under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserResult<R> {
    /// The parsed value, `None` if the parser recognized nothing.
    pub value: Option<R>,
    /// Name of the parser that produced the value.
    #[serde(default)]
    pub parser_name: String,
    /// Version of that parser.
    pub version: String,
    /// Version of the model type.
    #[serde(default)]
    pub model_version: String,
}

impl<R: DomainModel> ParserResult<R> {
    /// Returns true if this result was not produced by `parser` at its
    /// current version.
    #[must_use]
    pub fn is_stale<P: DomainParser<Output = R>>(&self, parser: &P) -> bool {
        self.version != parser.version()
            || self.model_version != R::VERSION
            || self.parser_name != parser.name()
    }
}

/// Raw input with a lazily computed, versioned parse result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parseable<I, R> {
    input: I,
    result: Option<ParserResult<R>>,
}

impl<I, R> Parseable<I, R> {
    /// Wraps an input that has not been parsed yet.
    #[must_use]
    pub const fn new(input: I) -> Self {
        Self {
            input,
            result: None,
        }
    }

    /// Wraps an input together with a previously computed result.
    #[must_use]
    pub const fn with_result(input: I, result: ParserResult<R>) -> Self {
        Self {
            input,
            result: Some(result),
        }
    }

    /// The raw input.
    #[must_use]
    pub const fn input(&self) -> &I {
        &self.input
    }

    /// The cached result, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&ParserResult<R>> {
        self.result.as_ref()
    }

    /// The cached value, if parsing ran and recognized something.
    #[must_use]
    pub fn value(&self) -> Option<&R> {
        self.result.as_ref().and_then(|result| result.value.as_ref())
    }

    /// Drops the cached result.
    pub fn invalidate(&mut self) {
        self.result = None;
    }

    /// Consumes the wrapper, returning the input.
    #[must_use]
    pub fn into_input(self) -> I {
        self.input
    }
}

impl<I: PartialEq, R> Parseable<I, R> {
    /// Replaces the input. The cached result is dropped only if the input
    /// actually changed.
    pub fn set_input(&mut self, input: I) {
        if self.input != input {
            self.input = input;
            self.result = None;
        }
    }
}

impl<I, R: DomainModel> Parseable<I, R> {
    /// Returns true if `parser` would re-run on this value.
    #[must_use]
    pub fn is_stale<P: DomainParser<Input = I, Output = R>>(&self, parser: &P) -> bool {
        self.result
            .as_ref()
            .is_none_or(|result| result.is_stale(parser))
    }

    /// Parses the input unless a result from this parser, at its current
    /// version and the current model version, is already cached.
    ///
    /// Returns true if the grammar ran.
    pub fn parse_if_needed<P: DomainParser<Input = I, Output = R>>(&mut self, parser: &P) -> bool {
        if !self.is_stale(parser) {
            return false;
        }

        let value = parser.parse(&self.input);
        debug!(
            parser = parser.name(),
            version = parser.version(),
            recognized = value.is_some(),
            "parsed input"
        );
        self.result = Some(ParserResult {
            value,
            parser_name: parser.name().to_string(),
            version: parser.version().to_string(),
            model_version: R::VERSION.to_string(),
        });
        true
    }
}

/// Brings every value up to date with `parser`, returning how many were
/// re-parsed.
pub fn parse_all<I, R, P>(values: &mut [Parseable<I, R>], parser: &P) -> usize
where
    R: DomainModel,
    P: DomainParser<Input = I, Output = R>,
{
    values
        .iter_mut()
        .map(|value| value.parse_if_needed(parser))
        .filter(|&ran| ran)
        .count()
}
