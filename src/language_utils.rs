/*!
 * Interface language utilities.
 *
 * The three supported interface languages and the lookup-table translation of
 * UI strings. A missing key falls back to the key itself so the UI never
 * renders an empty label.
 */

use isolang::Language;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::demo_data::{EN_STRINGS, KO_STRINGS, ZH_STRINGS};
use crate::errors::ConfigError;

/// Supported interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceLanguage {
    /// Simplified Chinese
    #[default]
    Zh,
    /// Korean
    Ko,
    /// English
    En,
}

impl InterfaceLanguage {
    /// All supported languages in selector order
    pub const ALL: [InterfaceLanguage; 3] = [Self::Zh, Self::Ko, Self::En];

    // @returns: ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    /// Parse an interface language code, ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> Result<Self, ConfigError> {
        match code.trim().to_lowercase().as_str() {
            "zh" => Ok(Self::Zh),
            "ko" => Ok(Self::Ko),
            "en" => Ok(Self::En),
            _ => Err(ConfigError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Native name of the language, as shown in the language selector
    pub fn native_name(&self) -> &'static str {
        Language::from_639_1(self.code())
            .and_then(|lang| lang.to_autonym())
            .unwrap_or(self.code())
    }

    /// English name of the language
    pub fn english_name(&self) -> &'static str {
        Language::from_639_1(self.code())
            .map(|lang| lang.to_name())
            .unwrap_or(self.code())
    }
}

impl fmt::Display for InterfaceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for InterfaceLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

// @const: UI string tables keyed by language
static UI_STRINGS: Lazy<HashMap<InterfaceLanguage, HashMap<&'static str, &'static str>>> = Lazy::new(|| {
    let mut tables = HashMap::new();
    tables.insert(InterfaceLanguage::Zh, ZH_STRINGS.iter().copied().collect());
    tables.insert(InterfaceLanguage::Ko, KO_STRINGS.iter().copied().collect());
    tables.insert(InterfaceLanguage::En, EN_STRINGS.iter().copied().collect());
    tables
});

/// Look up a UI string, falling back to the key itself when it is absent
pub fn ui_text<'a>(language: InterfaceLanguage, key: &'a str) -> &'a str {
    UI_STRINGS
        .get(&language)
        .and_then(|table| table.get(key).copied())
        .unwrap_or(key)
}
