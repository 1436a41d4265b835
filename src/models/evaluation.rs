//! Evaluation request and result DTOs.

use serde::{Deserialize, Serialize};

/// Request body for a single evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub pattern: String,
    #[serde(default)]
    pub flags: String,
    #[serde(default)]
    pub subject: String,
}

/// One located occurrence of the pattern within the subject text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEntry {
    /// The entire matched substring.
    pub text: String,
    /// Byte offset of the match start within the subject.
    pub index: usize,
    /// Captured subgroups in declaration order; `None` marks a
    /// non-participating optional group, distinct from an empty capture.
    pub groups: Vec<Option<String>>,
}

/// Outcome of one evaluation run.
///
/// `valid == false` always carries an error message and no matches;
/// `valid == true` carries a (possibly empty) match list and no message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationResult {
    pub valid: bool,
    pub matches: Vec<MatchEntry>,
    pub error_message: Option<String>,
}

impl EvaluationResult {
    pub fn ok(matches: Vec<MatchEntry>) -> Self {
        Self {
            valid: true,
            matches,
            error_message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            matches: Vec::new(),
            error_message: Some(message.into()),
        }
    }
}
