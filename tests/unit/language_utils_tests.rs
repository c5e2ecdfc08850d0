/*!
 * Tests for interface language utilities
 */

use anyhow::Result;
use std::str::FromStr;

use ianzimu::errors::ConfigError;
use ianzimu::language_utils::{InterfaceLanguage, ui_text};

#[test]
fn test_from_code_withMixedCase_shouldParse() -> Result<()> {
    assert_eq!(InterfaceLanguage::from_code(" KO ")?, InterfaceLanguage::Ko);
    assert_eq!(InterfaceLanguage::from_str("en")?, InterfaceLanguage::En);
    assert_eq!(
        InterfaceLanguage::from_code("ja"),
        Err(ConfigError::UnsupportedLanguage("ja".to_string()))
    );
    Ok(())
}

#[test]
fn test_language_names_withEachLanguage_shouldResolve() {
    for language in InterfaceLanguage::ALL {
        assert!(!language.native_name().is_empty());
    }
    assert_eq!(InterfaceLanguage::En.english_name(), "English");
    assert_eq!(InterfaceLanguage::Ko.english_name(), "Korean");
}

#[test]
fn test_ui_text_withKnownKey_shouldBeTranslated() {
    assert_ne!(ui_text(InterfaceLanguage::Zh, "title"), ui_text(InterfaceLanguage::En, "title"));
    assert!(!ui_text(InterfaceLanguage::Ko, "export_subs").is_empty());
}
