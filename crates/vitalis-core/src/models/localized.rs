// ABOUTME: Display text that is either a plain string or a per-locale map
// ABOUTME: LocalizedText tagged union with locale resolution and English fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Locale used when the requested one has no translation
pub const FALLBACK_LOCALE: &str = "en";

/// Name or label text stored either as a bare string or keyed by locale
///
/// Catalog records written by older clients store a bare string; newer ones store
/// `{"en": "...", "fr": "..."}`. Both shapes deserialize into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    /// Same text for every locale
    Plain(String),
    /// Locale code to translated text
    Localized(BTreeMap<String, String>),
}

impl LocalizedText {
    /// Build a single-locale text
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Resolve the text for `locale`
    ///
    /// Lookup order is the exact locale, its language prefix (`pt` for `pt-BR`),
    /// English, then the first stored translation. An empty map resolves to `""`.
    #[must_use]
    pub fn resolve(&self, locale: &str) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Localized(map) => {
                let language = locale.split(['-', '_']).next().unwrap_or(locale);
                map.get(locale)
                    .or_else(|| map.get(language))
                    .or_else(|| map.get(FALLBACK_LOCALE))
                    .or_else(|| map.values().next())
                    .map_or("", String::as_str)
            }
        }
    }
}

impl Default for LocalizedText {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_ignores_locale() {
        let text = LocalizedText::plain("Push-ups");
        assert_eq!(text.resolve("de"), "Push-ups");
    }

    #[test]
    fn test_localized_falls_back_to_english() {
        let text: LocalizedText =
            serde_json::from_str(r#"{"en": "Squat", "fr": "Accroupissement"}"#).unwrap();

        assert_eq!(text.resolve("fr-CA"), "Accroupissement");
        assert_eq!(text.resolve("ja"), "Squat");
    }

    #[test]
    fn test_bare_string_deserializes_as_plain() {
        let text: LocalizedText = serde_json::from_str(r#""Plank""#).unwrap();
        assert_eq!(text, LocalizedText::plain("Plank"));
    }
}
