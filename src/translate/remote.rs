//! HTTP translation client.
//!
//! Speaks the LibreTranslate-style JSON API: POST `{q, source, target}`
//! to the endpoint, read `{translatedText}` back. The request is the
//! only blocking I/O of the whole pipeline and the only place a
//! timeout/retry boundary lives.
use std::thread;
use std::time::Duration;

use log::{debug, warn};
use rand::Rng;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

use super::Translate;
use crate::error::Error;
use crate::lang;

const DEFAULT_MAX_RETRIES: usize = 3;
const BACKOFF_BASE_MS: u64 = 500;
const BACKOFF_JITTER_MS: u64 = 250;
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

pub struct RemoteTranslator {
    client: Client,
    endpoint: Url,
    source: String,
    target: &'static str,
    max_retries: usize,
}

impl RemoteTranslator {
    /// Build a translator against `endpoint` targeting `target`
    /// (two-letter code or full language name).
    pub fn new(endpoint: &str, target: &str) -> Result<Self, Error> {
        let endpoint = Url::parse(endpoint)?;
        let target = lang::normalize(target)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            source: "auto".to_string(),
            target,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    pub fn with_source(mut self, source: &str) -> Result<Self, Error> {
        self.source = lang::normalize(source)?.to_string();
        Ok(self)
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn request(&self, text: &str) -> Result<String, Error> {
        let body = TranslateRequest {
            q: text,
            source: &self.source,
            target: self.target,
            format: "text",
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()?
            .error_for_status()?;

        let parsed: TranslateResponse = response.json()?;
        Ok(parsed.translated_text)
    }
}

impl Translate for RemoteTranslator {
    /// Fire the request, retrying transient failures with jittered
    /// exponential backoff. Exhausting the retries is fatal for the
    /// sentence being translated, not for the batch.
    fn translate(&self, text: &str) -> Result<String, Error> {
        let mut rng = rand::thread_rng();

        let attempts = self.max_retries.max(1);
        for attempt in 0..attempts {
            match self.request(text) {
                Ok(translation) => {
                    debug!("translated {} chars", text.chars().count());
                    return Ok(translation);
                }
                Err(e) => {
                    warn!("translation attempt {}/{} failed: {:?}", attempt + 1, attempts, e);
                    if attempt + 1 < attempts {
                        let backoff = (BACKOFF_BASE_MS << attempt.min(6))
                            + rng.gen_range(0..BACKOFF_JITTER_MS);
                        thread::sleep(Duration::from_millis(backoff));
                    }
                }
            }
        }

        Err(Error::Translation(format!(
            "giving up after {} attempts",
            attempts
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_language() {
        assert!(RemoteTranslator::new("http://localhost:5000/translate", "Dutch").is_ok());
        assert!(RemoteTranslator::new("http://localhost:5000/translate", "klingon").is_err());
        assert!(RemoteTranslator::new("not a url", "nl").is_err());
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{"translatedText":"Het eten was geweldig"}"#;
        let parsed: TranslateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.translated_text, "Het eten was geweldig");
    }
}
