use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use wordcount_core::LabelKey;

const BUILTIN_TRANSLATIONS: &str = include_str!("../locales/translations.json");
const FALLBACK_LANGUAGE: &str = "en";
const COUNT_PLACEHOLDER: &str = "{{count}}";

/// Turns a label key and count into display text.
///
/// Implementations must be deterministic for a given key and count.
pub trait Translator {
    fn translate(&self, key: LabelKey, count: u64) -> String;
}

impl<F> Translator for F
where
    F: Fn(LabelKey, u64) -> String,
{
    fn translate(&self, key: LabelKey, count: u64) -> String {
        self(key, count)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("translation table is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("translation table has no '{0}' entry")]
    MissingLanguage(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct Messages {
    #[serde(rename = "words.count.total")]
    total: String,
    #[serde(rename = "words.count.selected")]
    selected: String,
}

/// Message table for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    language: String,
    messages: Messages,
}

impl Catalog {
    /// Picks the first of `languages` (e.g. `["fr-CA", "en-US"]`) the built-in
    /// table supports, falling back to English.
    pub fn for_languages(languages: &[&str]) -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_TRANSLATIONS, languages)
    }

    pub fn english() -> Result<Self, CatalogError> {
        Self::for_languages(&[FALLBACK_LANGUAGE])
    }

    pub fn from_json(json: &str, languages: &[&str]) -> Result<Self, CatalogError> {
        let mut table: BTreeMap<String, Messages> = serde_json::from_str(json)?;
        let language = primary_languages(languages)
            .into_iter()
            .find(|lang| table.contains_key(lang))
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());
        let messages = table
            .remove(&language)
            .ok_or_else(|| CatalogError::MissingLanguage(language.clone()))?;
        Ok(Self { language, messages })
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Translator for Catalog {
    fn translate(&self, key: LabelKey, count: u64) -> String {
        let template = match key {
            LabelKey::Total => &self.messages.total,
            LabelKey::Selected => &self.messages.selected,
        };
        template.replace(COUNT_PLACEHOLDER, &format_count(count, &self.language))
    }
}

/// Primary language codes in preference order, region suffixes removed and
/// duplicates dropped: `["en-US", "fr", "en-GB"]` becomes `["en", "fr"]`.
pub fn primary_languages(languages: &[&str]) -> Vec<String> {
    let mut primaries: Vec<String> = Vec::with_capacity(languages.len());
    for language in languages {
        let primary = language
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if !primary.is_empty() && !primaries.contains(&primary) {
            primaries.push(primary);
        }
    }
    primaries
}

/// Formats `count` with the digit grouping used by `language`.
pub fn format_count(count: u64, language: &str) -> String {
    let separator = match language {
        "fr" => '\u{202f}',
        "de" | "es" | "it" | "nl" | "pt" => '.',
        _ => ',',
    };
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{format_count, primary_languages};

    #[test]
    fn grouping_follows_language() {
        assert_eq!(format_count(0, "en"), "0");
        assert_eq!(format_count(999, "en"), "999");
        assert_eq!(format_count(1_234, "en"), "1,234");
        assert_eq!(format_count(1_234_567, "en"), "1,234,567");
        assert_eq!(format_count(12_345, "fr"), "12\u{202f}345");
        assert_eq!(format_count(100_000, "xx"), "100,000");
    }

    #[test]
    fn languages_lose_region_and_duplicates() {
        assert_eq!(
            primary_languages(&["en-US", "fr", "en-GB", "pt_BR", ""]),
            ["en", "fr", "pt"]
        );
    }
}
