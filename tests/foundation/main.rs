//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Span, DiceExpression, LimitedUse, rules vocabulary, Error.

mod vocabulary;
