//! Domain models and DTOs.

pub mod evaluation;
pub mod saved_pattern;
