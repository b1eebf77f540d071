//! The parseable parts of a creature's stat block.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parseable::parse_all;
use crate::parsers::{DomainParsers, ParseableCreatureAction, ParseableCreatureFeature};

/// Legendary actions and the prose introducing them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legendary {
    /// Introduction, e.g. "The dragon can take 3 legendary actions, ...".
    pub description: Option<String>,
    /// The legendary actions.
    pub actions: Vec<ParseableCreatureAction>,
}

/// Features and actions of a creature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    /// Traits, in stat block order.
    pub features: Vec<ParseableCreatureFeature>,
    /// Actions, in stat block order.
    pub actions: Vec<ParseableCreatureAction>,
    /// Reactions, in stat block order.
    pub reactions: Vec<ParseableCreatureAction>,
    /// Legendary actions, if the creature has any.
    pub legendary: Option<Legendary>,
}

impl StatBlock {
    /// Creates an empty stat block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings every feature and action up to date with `parsers`.
    ///
    /// Returns how many entries were re-parsed.
    pub fn parse_if_needed(&mut self, parsers: &DomainParsers) -> usize {
        let mut count = parse_all(&mut self.features, &parsers.feature);
        count += parse_all(&mut self.actions, &parsers.action);
        count += parse_all(&mut self.reactions, &parsers.action);
        if let Some(legendary) = &mut self.legendary {
            count += parse_all(&mut legendary.actions, &parsers.action);
        }
        debug!(reparsed = count, "visited stat block");
        count
    }
}
