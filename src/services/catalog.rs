//! Built-in catalog of popular patterns.
//!
//! Static data surfaced by the sidebar; every entry must compile with the
//! evaluator's engine, so lookaround-based classics are not included.

use serde::Serialize;

/// One catalog entry, ready to load into the tester.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub pattern: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

/// All built-in patterns, in display order.
pub fn entries() -> &'static [CatalogEntry] {
    &[
        CatalogEntry {
            name: "Email Address",
            pattern: r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
            description: "Validates email addresses",
            example: "user@example.com",
        },
        CatalogEntry {
            name: "Phone Number (US)",
            pattern: r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$",
            description: "Matches US phone numbers",
            example: "(555) 123-4567",
        },
        CatalogEntry {
            name: "URL",
            pattern: r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
            description: "Validates HTTP/HTTPS URLs",
            example: "https://www.example.com/path?query=1",
        },
        CatalogEntry {
            name: "IPv4 Address",
            pattern: r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
            description: "Validates IPv4 addresses",
            example: "192.168.0.1",
        },
        CatalogEntry {
            name: "Date (YYYY-MM-DD)",
            pattern: r"^\d{4}-\d{2}-\d{2}$",
            description: "ISO date format",
            example: "2024-06-10",
        },
        CatalogEntry {
            name: "HTML Tag",
            pattern: r"</?[a-z][a-z0-9]*[^<>]*>",
            description: "Matches HTML tags",
            example: r#"<div class="box">text</div>"#,
        },
        CatalogEntry {
            name: "Hex Color",
            pattern: r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$",
            description: "Matches 3- or 6-digit hex color codes",
            example: "#ff8800",
        },
        CatalogEntry {
            name: "UUID",
            pattern: r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$",
            description: "Matches lowercase UUIDs",
            example: "550e8400-e29b-41d4-a716-446655440000",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::evaluator;

    #[test]
    fn catalog_is_not_empty() {
        assert!(!entries().is_empty());
    }

    #[test]
    fn every_entry_compiles_and_matches_its_example() {
        for entry in entries() {
            let result = evaluator::evaluate(entry.pattern, "g", entry.example);
            assert!(
                result.valid,
                "{} failed to compile: {:?}",
                entry.name, result.error_message
            );
            assert!(
                !result.matches.is_empty(),
                "{} does not match its own example",
                entry.name
            );
        }
    }

    #[test]
    fn entry_names_are_unique() {
        let mut names: Vec<_> = entries().iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), entries().len());
    }
}
