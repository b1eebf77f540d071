//! Integration tests for Layer 2: Grammar
//!
//! Published stat block text run through the action, feature, and
//! auxiliary grammars.

mod features;
mod properties;
