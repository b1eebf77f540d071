//! Configuration shared by the feature and action grammars.

use std::sync::Arc;

use crate::vocabulary::{ConditionVocabulary, ReferenceCatalog};

/// Configuration for the prose grammars.
///
/// Controls which words count as conditions, which names are recognized
/// as cross-references, and whether inline dice are annotated.
#[derive(Clone, Debug)]
pub struct GrammarConfig {
    /// Condition words, including misspellings.
    pub vocabulary: Arc<ConditionVocabulary>,

    /// Spell and item names recognized in plain prose.
    pub references: Arc<ReferenceCatalog>,

    /// Emit dice-expression annotations for inline rolls and modifiers.
    pub annotate_dice: bool,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            vocabulary: Arc::new(ConditionVocabulary::standard()),
            references: Arc::new(ReferenceCatalog::new()),
            annotate_dice: true,
        }
    }
}

impl GrammarConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the condition vocabulary.
    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: ConditionVocabulary) -> Self {
        self.vocabulary = Arc::new(vocabulary);
        self
    }

    /// Builder method to set the reference catalog.
    #[must_use]
    pub fn with_references(mut self, references: ReferenceCatalog) -> Self {
        self.references = Arc::new(references);
        self
    }

    /// Builder method to enable/disable dice annotations.
    #[must_use]
    pub fn with_dice_annotations(mut self, annotate: bool) -> Self {
        self.annotate_dice = annotate;
        self
    }
}
