//! Domain parsers for creature features and actions.
//!
//! Each parser is built once from a [`GrammarConfig`] and reports a name
//! and version tag, so stored [`Parseable`] values can tell when they were
//! computed by an older grammar.

use bestiary_foundation::{Error, Result};
use bestiary_grammar::{
    ACTION_GRAMMAR_VERSION, ActionGrammar, FEATURE_GRAMMAR_VERSION, GrammarConfig,
    ParsedCreatureAction, ParsedCreatureFeature, parse_feature,
};
use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::parseable::{DomainModel, DomainParser, Parseable};

/// A named trait of a creature, e.g. "Keen Smell" or "Spellcasting".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureFeature {
    /// The feature's name, possibly with a usage limit in parentheses.
    pub name: String,
    /// The feature's prose.
    pub description: String,
}

impl CreatureFeature {
    /// Creates a feature.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A named action, reaction, or legendary action of a creature.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureAction {
    /// The action's name, possibly with a usage limit in parentheses.
    pub name: String,
    /// The action's prose.
    pub description: String,
}

impl CreatureAction {
    /// Creates an action.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl DomainModel for ParsedCreatureFeature {
    const VERSION: &'static str = "1";
}

impl DomainModel for ParsedCreatureAction {
    const VERSION: &'static str = "1";
}

/// A feature with its memoized parse.
pub type ParseableCreatureFeature = Parseable<CreatureFeature, ParsedCreatureFeature>;

/// An action with its memoized parse.
pub type ParseableCreatureAction = Parseable<CreatureAction, ParsedCreatureAction>;

/// Parses creature features.
#[derive(Clone, Debug, Default)]
pub struct FeatureParser {
    config: GrammarConfig,
}

impl FeatureParser {
    /// Name recorded with feature results.
    pub const NAME: &'static str = "CreatureFeatureDomainParser";

    /// Creates a parser for the given configuration.
    #[must_use]
    pub fn new(config: &GrammarConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl DomainParser for FeatureParser {
    type Input = CreatureFeature;
    type Output = ParsedCreatureFeature;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn version(&self) -> &'static str {
        FEATURE_GRAMMAR_VERSION
    }

    fn parse(&self, input: &CreatureFeature) -> Option<ParsedCreatureFeature> {
        let parsed = parse_feature(&input.name, &input.description, &self.config);
        (!parsed.is_empty()).then_some(parsed)
    }
}

/// Parses creature actions.
#[derive(Clone, Debug, Default)]
pub struct ActionParser {
    grammar: ActionGrammar,
}

impl ActionParser {
    /// Name recorded with action results.
    pub const NAME: &'static str = "CreatureActionDomainParser";

    /// Creates a parser for the given configuration.
    #[must_use]
    pub fn new(config: &GrammarConfig) -> Self {
        Self {
            grammar: ActionGrammar::new(config),
        }
    }
}

impl DomainParser for ActionParser {
    type Input = CreatureAction;
    type Output = ParsedCreatureAction;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn version(&self) -> &'static str {
        ACTION_GRAMMAR_VERSION
    }

    fn parse(&self, input: &CreatureAction) -> Option<ParsedCreatureAction> {
        self.grammar
            .parse_creature_action(&input.name, &input.description)
    }
}

/// The feature and action parsers for one configuration.
#[derive(Clone, Debug, Default)]
pub struct DomainParsers {
    /// Parser for features.
    pub feature: FeatureParser,
    /// Parser for actions, reactions, and legendary actions.
    pub action: ActionParser,
}

impl DomainParsers {
    /// Builds both parsers from one configuration.
    #[must_use]
    pub fn new(config: &GrammarConfig) -> Self {
        Self {
            feature: FeatureParser::new(config),
            action: ActionParser::new(config),
        }
    }

    /// The current version of every parser, keyed by parser name.
    #[must_use]
    pub fn versions(&self) -> OrdMap<String, String> {
        OrdMap::new()
            .update(self.feature.name().to_string(), self.feature.version().to_string())
            .update(self.action.name().to_string(), self.action.version().to_string())
    }

    /// The current version of the named parser.
    ///
    /// # Errors
    ///
    /// Returns an error if no parser has that name.
    pub fn version_of(&self, name: &str) -> Result<&'static str> {
        if name == self.feature.name() {
            Ok(self.feature.version())
        } else if name == self.action.name() {
            Ok(self.action.version())
        } else {
            Err(Error::internal(format!("unknown domain parser: {name}")))
        }
    }

    /// Names of the parsers whose version differs from the one recorded
    /// at the last run. Stored values need a pass if this is non-empty.
    #[must_use]
    pub fn outdated(&self, last_run: &OrdMap<String, String>) -> Vec<&'static str> {
        [self.feature.name(), self.action.name()]
            .into_iter()
            .filter(|name| {
                let current = self.version_of(name).ok();
                last_run.get(*name).map(String::as_str) != current
            })
            .collect()
    }
}
