//! Corpus data model.
//!
//! A corpus is an ordered collection of [Review]s, each holding
//! [Sentence]s, each holding zero or more [Opinion]s (aspect spans).
//!
//! Opinion offsets are **character**-indexed into the owning sentence's
//! current text, never byte-indexed. Every stage that mutates a sentence's
//! text is responsible for rewriting the offsets of affected opinions in
//! the same step, so that `text[start..end] == target` holds for every
//! resolved opinion at every point of the pipeline.
use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

/// Sentinel used by the persisted format for opinions without an
/// anchored target.
pub const NULL_TARGET: &str = "NULL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

impl TryFrom<&str> for Polarity {
    type Error = Error;

    fn try_from(label: &str) -> Result<Self, Error> {
        match label {
            "positive" => Ok(Polarity::Positive),
            "negative" => Ok(Polarity::Negative),
            "neutral" => Ok(Polarity::Neutral),
            other => Err(Error::UnknownPolarity(other.to_string())),
        }
    }
}

/// Anchoring state of an opinion span.
///
/// `Null` is a legitimate terminal state (capacity overflow, delimiter
/// loss in translation, unanchored source opinion), not an error.
/// Opinions are never removed by the pipeline, only nulled, so record
/// counts stay stable across stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStatus {
    Pending,
    Resolved,
    Null,
}

/// An aspect opinion: a labeled character range plus a target string.
///
/// `category` and `polarity` are passthrough attributes, untouched by the
/// marking/recovery machinery.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(try_from = "OpinionSer", into = "OpinionSer")]
pub struct Opinion {
    target: String,
    category: String,
    polarity: Polarity,
    start: usize,
    end: usize,
    status: SpanStatus,
}

/// Serializable version of [Opinion].
///
/// Offsets are persisted as the `from`/`to` string attributes of the
/// source corpus format; the unanchored state maps to `target == "NULL"`.
#[derive(Debug, Serialize, Deserialize, Clone)]
struct OpinionSer {
    target: String,
    category: String,
    polarity: String,
    from: String,
    to: String,
}

impl TryFrom<OpinionSer> for Opinion {
    type Error = Error;

    fn try_from(o: OpinionSer) -> Result<Self, Error> {
        let polarity = Polarity::try_from(o.polarity.as_str())?;
        let start = o
            .from
            .parse::<usize>()
            .map_err(|e| Error::Custom(format!("invalid 'from' offset {:?}: {}", o.from, e)))?;
        let end = o
            .to
            .parse::<usize>()
            .map_err(|e| Error::Custom(format!("invalid 'to' offset {:?}: {}", o.to, e)))?;

        let status = if o.target == NULL_TARGET {
            SpanStatus::Null
        } else {
            SpanStatus::Pending
        };

        Ok(Opinion {
            target: o.target,
            category: o.category,
            polarity,
            start,
            end,
            status,
        })
    }
}

impl From<Opinion> for OpinionSer {
    fn from(o: Opinion) -> Self {
        let target = match o.status {
            SpanStatus::Null => NULL_TARGET.to_string(),
            _ => o.target,
        };
        Self {
            target,
            category: o.category,
            polarity: o.polarity.as_str().to_string(),
            from: o.start.to_string(),
            to: o.end.to_string(),
        }
    }
}

impl Opinion {
    /// A new anchored opinion, pending resolution.
    pub fn new(
        target: impl Into<String>,
        category: impl Into<String>,
        polarity: Polarity,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            target: target.into(),
            category: category.into(),
            polarity,
            start,
            end,
            status: SpanStatus::Pending,
        }
    }

    /// A new opinion without an anchored target.
    pub fn unanchored(category: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            target: NULL_TARGET.to_string(),
            category: category.into(),
            polarity,
            start: 0,
            end: 0,
            status: SpanStatus::Null,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// `(start, end)` character offsets, end exclusive.
    pub fn extent(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    pub fn status(&self) -> SpanStatus {
        self.status
    }

    pub fn is_null(&self) -> bool {
        self.status == SpanStatus::Null
    }

    /// Anchor the opinion at a new extent.
    pub fn resolve(&mut self, start: usize, end: usize) {
        self.start = start;
        self.end = end;
        self.status = SpanStatus::Resolved;
    }

    /// Anchor the opinion at a new extent with a new target string.
    pub fn resolve_with(&mut self, start: usize, end: usize, target: impl Into<String>) {
        self.target = target.into();
        self.resolve(start, end);
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
    }

    /// Degrade the opinion to the unanchored state.
    pub fn nullify(&mut self) {
        self.status = SpanStatus::Null;
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Sentence {
    id: String,
    text: String,
    opinions: Vec<Opinion>,
}

impl Sentence {
    pub fn new(id: impl Into<String>, text: impl Into<String>, opinions: Vec<Opinion>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            opinions,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn opinions(&self) -> &[Opinion] {
        &self.opinions
    }

    pub fn opinions_mut(&mut self) -> &mut Vec<Opinion> {
        &mut self.opinions
    }

    /// Slice the text by character offsets, end exclusive. `None` on an
    /// inverted range.
    pub fn slice(&self, start: usize, end: usize) -> Option<&str> {
        crate::marking::text::slice(&self.text, start, end)
    }

    /// Whether the sentence consists solely of numeric characters
    /// (or is empty). Such sentences carry no aspects and bypass
    /// marking and translation entirely.
    pub fn is_numeric_only(&self) -> bool {
        self.text.is_empty() || self.text.chars().all(char::is_numeric)
    }

    /// Promote anchored opinions whose extent matches the current text
    /// back to `Resolved`.
    ///
    /// The persisted format carries no status attribute, so opinions read
    /// from an already-marked or already-translated corpus come back as
    /// `Pending`; this recovers the resolution state from the offset-text
    /// correspondence itself.
    pub fn revalidate(&mut self) {
        let text = self.text.clone();
        for opinion in &mut self.opinions {
            if opinion.status == SpanStatus::Pending
                && crate::marking::text::slice(&text, opinion.start, opinion.end)
                    == Some(opinion.target.as_str())
            {
                opinion.status = SpanStatus::Resolved;
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Review {
    id: String,
    sentences: Vec<Sentence>,
}

impl Review {
    pub fn new(id: impl Into<String>, sentences: Vec<Sentence>) -> Self {
        Self {
            id: id.into(),
            sentences,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentences_mut(&mut self) -> &mut Vec<Sentence> {
        &mut self.sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen_opinion() -> Opinion {
        Opinion::new("food", "FOOD#QUALITY", Polarity::Positive, 4, 8)
    }

    #[test]
    fn test_serialize_roundtrip() {
        let opinion = gen_opinion();
        let serialized = serde_json::to_string(&opinion).unwrap();
        println!("{}", serialized);

        let back: Opinion = serde_json::from_str(&serialized).unwrap();
        assert_eq!(opinion, back);
    }

    #[test]
    fn test_offsets_persisted_as_strings() {
        let opinion = gen_opinion();
        let value = serde_json::to_value(&opinion).unwrap();
        assert_eq!(value["from"], "4");
        assert_eq!(value["to"], "8");
    }

    #[test]
    fn test_null_sentinel() {
        let opinion = Opinion::unanchored("SERVICE#GENERAL", Polarity::Negative);
        let serialized = serde_json::to_string(&opinion).unwrap();

        let back: Opinion = serde_json::from_str(&serialized).unwrap();
        assert!(back.is_null());
        assert_eq!(back.target(), NULL_TARGET);
    }

    #[test]
    fn test_unknown_polarity_is_fatal() {
        let raw = r#"{"target":"food","category":"FOOD#QUALITY","polarity":"mixed","from":"4","to":"8"}"#;
        let parsed = serde_json::from_str::<Opinion>(raw);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_numeric_only() {
        let numeric = Sentence::new("1", "12345", vec![]);
        let empty = Sentence::new("2", "", vec![]);
        let text = Sentence::new("3", "great food", vec![]);

        assert!(numeric.is_numeric_only());
        assert!(empty.is_numeric_only());
        assert!(!text.is_numeric_only());
    }

    #[test]
    fn test_revalidate() {
        let mut sentence = Sentence::new("1", "The food was great", vec![gen_opinion()]);
        assert_eq!(sentence.opinions()[0].status(), SpanStatus::Pending);

        sentence.revalidate();
        assert_eq!(sentence.opinions()[0].status(), SpanStatus::Resolved);
    }
}
