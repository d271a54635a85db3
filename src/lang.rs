//! Target language management.
//!
//! The translation service selects its target language by two-letter code.
//! This module holds the set of codes the pipeline accepts, along with
//! normalization from the full language names used in corpus filenames.
use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::error::Error;

lazy_static! {

    /// Holds langs that the translation boundary accepts.
    pub static ref LANG: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert("en");
        m.insert("nl");
        m.insert("fr");
        m.insert("es");
        m.insert("de");
        m.insert("it");
        m.insert("pt");
        m.insert("ro");
        m.insert("pl");
        m.insert("ru");
        m.insert("tr");
        m.insert("ar");
        m.insert("zh");
        m.insert("ja");

        m
    };
}

/// Normalize a user-provided language into a two-letter code.
///
/// Accepts either a code (`nl`) or a full name (`Dutch`), the latter
/// matching the naming convention of the source corpus files.
pub fn normalize(lang: &str) -> Result<&'static str, Error> {
    let code = match lang.to_lowercase().as_str() {
        "english" => "en",
        "dutch" => "nl",
        "french" => "fr",
        "spanish" => "es",
        "german" => "de",
        "italian" => "it",
        "portuguese" => "pt",
        "romanian" => "ro",
        "polish" => "pl",
        "russian" => "ru",
        "turkish" => "tr",
        "arabic" => "ar",
        "chinese" => "zh",
        "japanese" => "ja",
        other => match LANG.get(other) {
            Some(code) => *code,
            None => return Err(Error::UnknownLang(lang.to_string())),
        },
    };

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize("Dutch").unwrap(), "nl");
        assert_eq!(normalize("english").unwrap(), "en");
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize("es").unwrap(), "es");
    }

    #[test]
    fn test_normalize_unknown() {
        assert!(normalize("klingon").is_err());
    }
}
