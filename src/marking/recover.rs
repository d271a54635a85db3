//! Span recovery after translation.
//!
//! The translation boundary gives no guarantee about delimiter
//! survival: a pair may come back intact, moved, mangled or gone. This
//! stage scans the translated text for each group's pair and either
//! re-anchors the group between the surviving delimiters or degrades it
//! to null. A pair relocated into an unexpected spot can re-anchor a
//! group onto the wrong words; that span is still well-formed and is
//! accepted as-is.
use itertools::Itertools;
use log::debug;

use super::alphabet::Alphabet;
use super::groups;
use super::text;
use crate::corpus::Sentence;

pub struct Recoverer {
    alphabet: Alphabet,
}

impl Recoverer {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Re-anchor the marked sentence's groups inside `translation`,
    /// which becomes the sentence's new text.
    ///
    /// Groups are processed in increasing symbol order. For each one,
    /// the enclosed substring of the translated text becomes the new
    /// target and the interior offsets (delimiters excluded) the new
    /// extent; a group whose pair did not survive is nulled, siblings
    /// included. Already-null groups stay null.
    pub fn recover(&self, mut sentence: Sentence, translation: String) -> Sentence {
        let groups = groups::rediscover(&sentence, &self.alphabet)
            .into_iter()
            .sorted_by_key(|g| g.symbol.unwrap_or(usize::MAX));

        for group in groups {
            let pair = group.symbol.and_then(|s| self.alphabet.get(s));
            let interior = pair.and_then(|p| p.interior(&translation));

            match interior {
                Some((start, end)) => {
                    // slice cannot fail here: interior() returned an
                    // ordered in-bounds range
                    let target = text::slice(&translation, start, end)
                        .unwrap_or_default()
                        .to_string();
                    for member in group.members().collect::<Vec<_>>() {
                        sentence.opinions_mut()[member].resolve_with(start, end, target.clone());
                    }
                }
                None => {
                    debug!(
                        "sentence {}: delimiter pair {:?} lost in translation",
                        sentence.id(),
                        group.symbol
                    );
                    for member in group.members().collect::<Vec<_>>() {
                        sentence.opinions_mut()[member].nullify();
                    }
                }
            }
        }

        sentence.set_text(translation);
        sentence
    }
}

impl Default for Recoverer {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}
