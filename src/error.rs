//! Error enum
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Request(reqwest::Error),
    UrlParse(url::ParseError),
    UnknownLang(String),
    UnknownPolarity(String),
    /// sentence counts differ between a source document and its translation.
    Alignment {
        review_id: String,
        source_sentences: usize,
        translated_sentences: usize,
    },
    /// translation retries exhausted for a given sentence.
    Translation(String),
    Custom(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownLang(lang) => write!(f, "unknown language: {lang}"),
            Error::UnknownPolarity(polarity) => write!(f, "unknown polarity label: {polarity}"),
            Error::Alignment {
                review_id,
                source_sentences,
                translated_sentences,
            } => write!(
                f,
                "sentence count mismatch in review {review_id}: {source_sentences} source, {translated_sentences} translated"
            ),
            Error::Translation(msg) => write!(f, "translation failure: {msg}"),
            Error::Custom(msg) => write!(f, "{msg}"),
            other => write!(f, "{other:?}"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Request(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::UrlParse(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
