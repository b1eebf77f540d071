//! Vocabulary registries for words the grammars look up at parse time.
//!
//! Stores condition names (with their misspellings and synonyms) and the
//! catalog of spell and item names recognized as cross-references in
//! plain prose. Both are handed to the grammars through
//! [`GrammarConfig`](crate::GrammarConfig) rather than living in globals.

use std::collections::HashMap;

use bestiary_combinator::{Cursor, Parser, choice, keyword, never};
use bestiary_foundation::{CreatureCondition, ItemKind, ItemReference, Located};

/// Word -> condition lookup, including aliases.
#[derive(Clone, Debug, Default)]
pub struct ConditionVocabulary {
    /// Canonical or alias word -> condition
    words: HashMap<String, CreatureCondition>,
}

impl ConditionVocabulary {
    /// Creates a new empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical condition names plus the misspellings found in
    /// published stat blocks.
    #[must_use]
    pub fn standard() -> Self {
        let mut vocabulary = Self::new();
        for condition in CreatureCondition::ALL {
            vocabulary.register(condition.name(), condition);
        }
        vocabulary.register("poisioned", CreatureCondition::Poisoned);
        vocabulary.register("unconcious", CreatureCondition::Unconscious);
        vocabulary.register("fatigued", CreatureCondition::Exhaustion);
        vocabulary.register("paralysed", CreatureCondition::Paralyzed);
        vocabulary
    }

    /// Registers a word for a condition. Words are case-folded.
    pub fn register(&mut self, word: &str, condition: CreatureCondition) {
        self.words.insert(word.to_lowercase(), condition);
    }

    /// Looks up a condition by word.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<CreatureCondition> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Number of registered words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Known spell and item names recognized in plain description prose.
#[derive(Clone, Debug, Default)]
pub struct ReferenceCatalog {
    /// Case-folded name -> kind
    entries: HashMap<String, ItemKind>,
}

impl ReferenceCatalog {
    /// Creates a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a name. Names are case-folded.
    pub fn register(&mut self, name: &str, kind: ItemKind) {
        let name = name.trim().to_lowercase();
        if !name.is_empty() {
            self.entries.insert(name, kind);
        }
    }

    /// Adds a name, builder style.
    #[must_use]
    pub fn with(mut self, name: &str, kind: ItemKind) -> Self {
        self.register(name, kind);
        self
    }

    /// Looks up a name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ItemKind> {
        self.entries.get(&name.to_lowercase()).copied()
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no names are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A parser matching any registered name as a whole phrase.
    ///
    /// Longer names are tried first so `cure wounds` wins over `cure`.
    #[must_use]
    pub fn reference(&self) -> Parser<ItemReference> {
        if self.entries.is_empty() {
            return never();
        }
        let mut names: Vec<(&String, &ItemKind)> = self.entries.iter().collect();
        names.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()).then(a.0.cmp(b.0)));
        choice(
            names
                .into_iter()
                .map(|(name, kind)| {
                    let kind = *kind;
                    keyword(name).map(move |text| ItemReference::new(text, Some(kind)))
                })
                .collect(),
        )
    }

    /// Every registered name mentioned in the case-folded `text`.
    #[must_use]
    pub fn find_in(&self, text: &[char]) -> Vec<Located<ItemReference>> {
        if self.entries.is_empty() {
            return Vec::new();
        }
        self.reference().matches_in(Cursor::new(text))
    }
}
