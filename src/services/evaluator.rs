//! Pattern evaluation against a subject text.
//!
//! Thin wrapper over the `regex` crate: parses the flag string into named
//! options at the boundary, compiles the pattern, and collects matches with
//! their byte offsets and capture groups. Pure function of its inputs, no
//! side effects. No backtracking or wall-clock budget is applied.

use regex::{Regex, RegexBuilder};

use crate::models::evaluation::{EvaluationResult, MatchEntry};

/// Named evaluation modes parsed from a flag string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalFlags {
    /// Collect every non-overlapping match instead of only the first.
    pub global: bool,
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
}

impl EvalFlags {
    /// Parse a flag string: `g`, `i`, `m`, `s`, each at most meaningful once.
    /// Unrecognized characters are rejected with a human-readable message.
    pub fn parse(flags: &str) -> Result<Self, String> {
        let mut parsed = Self::default();
        for c in flags.chars() {
            match c {
                'g' => parsed.global = true,
                'i' => parsed.case_insensitive = true,
                'm' => parsed.multi_line = true,
                's' => parsed.dot_matches_new_line = true,
                other => return Err(format!("unknown flag '{other}'")),
            }
        }
        Ok(parsed)
    }
}

/// Evaluate `pattern` with `flags` against `subject`.
///
/// An empty pattern short-circuits to a valid, empty result without touching
/// the engine. A flag or compile error comes back as `valid = false` with the
/// engine's diagnostic; it is never raised to the caller.
pub fn evaluate(pattern: &str, flags: &str, subject: &str) -> EvaluationResult {
    if pattern.is_empty() {
        return EvaluationResult::ok(Vec::new());
    }

    let flags = match EvalFlags::parse(flags) {
        Ok(f) => f,
        Err(message) => return EvaluationResult::invalid(message),
    };

    let regex = match RegexBuilder::new(pattern)
        .case_insensitive(flags.case_insensitive)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_matches_new_line)
        .build()
    {
        Ok(r) => r,
        Err(e) => return EvaluationResult::invalid(e.to_string()),
    };

    EvaluationResult::ok(collect_matches(&regex, subject, flags.global))
}

fn collect_matches(regex: &Regex, subject: &str, global: bool) -> Vec<MatchEntry> {
    let mut matches = Vec::new();
    let mut pos = 0;
    while pos <= subject.len() {
        let Some(caps) = regex.captures_at(subject, pos) else {
            break;
        };
        let Some(full) = caps.get(0) else {
            break;
        };
        matches.push(MatchEntry {
            text: full.as_str().to_string(),
            index: full.start(),
            groups: caps
                .iter()
                .skip(1)
                .map(|g| g.map(|m| m.as_str().to_string()))
                .collect(),
        });
        if !global {
            break;
        }
        if full.end() > full.start() {
            pos = full.end();
        } else {
            // Zero-width match: advance one code point past the match so
            // patterns that can match the empty string still terminate.
            match subject[full.end()..].chars().next() {
                Some(c) => pos = full.end() + c.len_utf8(),
                None => break,
            }
        }
    }
    matches
}
