//! Business logic: pattern evaluation, persistence, and snippet generation.

pub mod catalog;
pub mod evaluator;
pub mod pattern_store;
pub mod snippets;
