//! Usage snippet generation for other languages.
//!
//! Pure string formatting: the pattern and flag set are translated into an
//! equivalent construction in each target language. Generated snippets are
//! not validated against the target language's toolchain.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::evaluator::EvalFlags;

/// Target languages the generator knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetLanguage {
    Javascript,
    Python,
    Java,
    Csharp,
    Php,
    Go,
    Rust,
}

/// Request body for snippet generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetRequest {
    pub language: SnippetLanguage,
    pub pattern: String,
    #[serde(default)]
    pub flags: String,
}

/// A rendered snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    pub language: SnippetLanguage,
    pub code: String,
}

/// Render a usage snippet for `language`. The flag string is validated the
/// same way the evaluator validates it.
pub fn generate(language: SnippetLanguage, pattern: &str, flags: &str) -> Result<Snippet, AppError> {
    let parsed = EvalFlags::parse(flags).map_err(AppError::Validation)?;
    let code = match language {
        SnippetLanguage::Javascript => javascript(pattern, flags),
        SnippetLanguage::Python => python(pattern, parsed),
        SnippetLanguage::Java => java(pattern, parsed),
        SnippetLanguage::Csharp => csharp(pattern, parsed),
        SnippetLanguage::Php => php(pattern, flags),
        SnippetLanguage::Go => go(pattern),
        SnippetLanguage::Rust => rust(pattern, parsed),
    };
    Ok(Snippet { language, code })
}

/// Escape a pattern for embedding in a double-quoted string literal.
fn quote_escape(pattern: &str) -> String {
    pattern.replace('\\', "\\\\").replace('"', "\\\"")
}

fn javascript(pattern: &str, flags: &str) -> String {
    format!(
        r#"// JavaScript
const regex = /{pattern}/{flags};
const text = "your test string here";

// Test if pattern matches
const isMatch = regex.test(text);

// Get all matches
const matches = text.match(regex);

// Replace matches
const replaced = text.replace(regex, 'replacement');"#
    )
}

fn python(pattern: &str, flags: EvalFlags) -> String {
    let mut options = String::new();
    if flags.case_insensitive {
        options.push_str("re.IGNORECASE | ");
    }
    if flags.multi_line {
        options.push_str("re.MULTILINE | ");
    }
    if flags.dot_matches_new_line {
        options.push_str("re.DOTALL | ");
    }
    options.push('0');

    format!(
        r#"# Python
import re

pattern = r"{pattern}"
text = "your test string here"
flags = {options}

# Test if pattern matches
is_match = re.search(pattern, text, flags) is not None

# Get all matches
matches = re.findall(pattern, text, flags)

# Replace matches
replaced = re.sub(pattern, "replacement", text, flags=flags)"#
    )
}

fn java(pattern: &str, flags: EvalFlags) -> String {
    let escaped = quote_escape(pattern);
    let mut options = String::new();
    if flags.case_insensitive {
        options.push_str("Pattern.CASE_INSENSITIVE | ");
    }
    if flags.multi_line {
        options.push_str("Pattern.MULTILINE | ");
    }
    if flags.dot_matches_new_line {
        options.push_str("Pattern.DOTALL | ");
    }
    options.push('0');

    format!(
        r#"// Java
import java.util.regex.Pattern;
import java.util.regex.Matcher;

String pattern = "{escaped}";
String text = "your test string here";
int flags = {options};

Pattern regex = Pattern.compile(pattern, flags);
Matcher matcher = regex.matcher(text);

// Test if pattern matches
boolean isMatch = matcher.find();

// Replace matches
String replaced = matcher.replaceAll("replacement");"#
    )
}

fn csharp(pattern: &str, flags: EvalFlags) -> String {
    // C# verbatim strings only need doubled quotes, backslashes stay as-is.
    let escaped = pattern.replace('"', "\"\"");
    let mut options = String::new();
    if flags.case_insensitive {
        options.push_str("RegexOptions.IgnoreCase | ");
    }
    if flags.multi_line {
        options.push_str("RegexOptions.Multiline | ");
    }
    if flags.dot_matches_new_line {
        options.push_str("RegexOptions.Singleline | ");
    }
    options.push_str("RegexOptions.None");

    format!(
        r#"// C#
using System.Text.RegularExpressions;

string pattern = @"{escaped}";
string text = "your test string here";
RegexOptions options = {options};

Regex regex = new Regex(pattern, options);

// Test if pattern matches
bool isMatch = regex.IsMatch(text);

// Get all matches
MatchCollection matches = regex.Matches(text);

// Replace matches
string replaced = regex.Replace(text, "replacement");"#
    )
}

fn php(pattern: &str, flags: &str) -> String {
    // PCRE has no separate global flag; preg_match_all covers it.
    let inline_flags: String = flags.chars().filter(|c| *c != 'g').collect();
    format!(
        r#"<?php
// PHP
$pattern = '/{pattern}/{inline_flags}';
$text = 'your test string here';

// Test if pattern matches
$isMatch = preg_match($pattern, $text);

// Get all matches
preg_match_all($pattern, $text, $matches);

// Replace matches
$replaced = preg_replace($pattern, 'replacement', $text);
?>"#
    )
}

fn go(pattern: &str) -> String {
    format!(
        r#"// Go
package main

import (
    "regexp"
)

func main() {{
    pattern := `{pattern}`
    text := "your test string here"

    regex := regexp.MustCompile(pattern)

    // Test if pattern matches
    isMatch := regex.MatchString(text)

    // Get all matches
    matches := regex.FindAllString(text, -1)

    // Replace matches
    replaced := regex.ReplaceAllString(text, "replacement")
}}"#
    )
}

fn rust(pattern: &str, flags: EvalFlags) -> String {
    let escaped = quote_escape(pattern);
    let mut builder = String::new();
    if flags.case_insensitive {
        builder.push_str("\n    .case_insensitive(true)");
    }
    if flags.multi_line {
        builder.push_str("\n    .multi_line(true)");
    }
    if flags.dot_matches_new_line {
        builder.push_str("\n    .dot_matches_new_line(true)");
    }

    format!(
        r#"// Rust
use regex::RegexBuilder;

let regex = RegexBuilder::new("{escaped}"){builder}
    .build()
    .expect("invalid pattern");
let text = "your test string here";

// Test if pattern matches
let is_match = regex.is_match(text);

// Get all matches
let matches: Vec<&str> = regex.find_iter(text).map(|m| m.as_str()).collect();

// Replace matches
let replaced = regex.replace_all(text, "replacement");"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn javascript_embeds_pattern_and_flags_inline() {
        let snippet = generate(SnippetLanguage::Javascript, r"\d+", "gi").unwrap();
        assert!(snippet.code.contains(r"/\d+/gi"));
    }

    #[test]
    fn python_translates_flags() {
        let snippet = generate(SnippetLanguage::Python, "a+", "ims").unwrap();
        assert!(snippet
            .code
            .contains("re.IGNORECASE | re.MULTILINE | re.DOTALL | 0"));
    }

    #[test]
    fn python_without_flags_uses_zero() {
        let snippet = generate(SnippetLanguage::Python, "a+", "").unwrap();
        assert!(snippet.code.contains("flags = 0"));
    }

    #[test]
    fn java_escapes_backslashes() {
        let snippet = generate(SnippetLanguage::Java, r"\d+", "").unwrap();
        assert!(snippet.code.contains(r#"String pattern = "\\d+";"#));
    }

    #[test]
    fn csharp_keeps_verbatim_backslashes() {
        let snippet = generate(SnippetLanguage::Csharp, r"\d+", "i").unwrap();
        assert!(snippet.code.contains(r#"string pattern = @"\d+";"#));
        assert!(snippet.code.contains("RegexOptions.IgnoreCase"));
    }

    #[test]
    fn php_drops_global_from_inline_flags() {
        let snippet = generate(SnippetLanguage::Php, "a+", "gi").unwrap();
        assert!(snippet.code.contains("'/a+/i'"));
    }

    #[test]
    fn rust_builder_reflects_flags() {
        let snippet = generate(SnippetLanguage::Rust, "a+", "is").unwrap();
        assert!(snippet.code.contains(".case_insensitive(true)"));
        assert!(snippet.code.contains(".dot_matches_new_line(true)"));
        assert!(!snippet.code.contains(".multi_line(true)"));
    }

    #[test]
    fn bad_flags_are_a_validation_error() {
        let err = generate(SnippetLanguage::Go, "a+", "z").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn language_deserializes_lowercase() {
        let req: SnippetRequest =
            serde_json::from_str(r#"{"language": "csharp", "pattern": "a"}"#).unwrap();
        assert_eq!(req.language, SnippetLanguage::Csharp);
    }
}
