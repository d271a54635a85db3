//! Cross-lingual aspect code-switching.
//!
//! Given a marked source sentence and its recovered translation, every
//! aspect whose delimiter pair survives on both sides is swapped
//! between the two texts: the source keeps its frame with the
//! translated aspect inside, and vice versa. The result is two new
//! sentences per pair, the cross-lingual augmentation variants.
//!
//! Swapping mutates both texts, so span offsets are thrown away and
//! re-derived from the delimiters once all symbols are processed.
use log::debug;

use super::alphabet::Alphabet;
use super::groups::{self, SpanGroup};
use super::text;
use crate::corpus::{Review, Sentence};
use crate::error::Error;

pub struct CodeSwitcher {
    alphabet: Alphabet,
}

impl CodeSwitcher {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Swap aligned aspects between one source sentence and its
    /// translated counterpart.
    ///
    /// Returns `(source with translated aspects, translation with
    /// source aspects)`.
    pub fn switch(&self, source: Sentence, translated: Sentence) -> (Sentence, Sentence) {
        let mut source = source;
        let mut translated = translated;

        // capture group/symbol tables before any text mutation
        let source_groups = groups::rediscover(&source, &self.alphabet);
        let translated_groups = groups::rediscover(&translated, &self.alphabet);

        let mut source_text = source.text().to_string();
        let mut translated_text = translated.text().to_string();

        for (_, pair) in self.alphabet.iter() {
            let source_interior = pair.interior(&source_text);
            let translated_interior = pair.interior(&translated_text);
            let (src_range, tgt_range) = match (source_interior, translated_interior) {
                (Some(s), Some(t)) => (s, t),
                _ => continue,
            };

            let source_aspect = match text::slice(&source_text, src_range.0, src_range.1) {
                Some(aspect) if !aspect.is_empty() => aspect.to_string(),
                _ => continue,
            };
            let target_aspect = match text::slice(&translated_text, tgt_range.0, tgt_range.1) {
                Some(aspect) if !aspect.is_empty() => aspect.to_string(),
                _ => continue,
            };

            source_text = text::replace_first(&source_text, &source_aspect, &target_aspect);
            relabel(&mut source, &source_aspect, &target_aspect);

            translated_text = text::replace_first(&translated_text, &target_aspect, &source_aspect);
            relabel(&mut translated, &target_aspect, &source_aspect);
        }

        source.set_text(source_text);
        translated.set_text(translated_text);

        rederive(&mut source, &source_groups, &self.alphabet);
        rederive(&mut translated, &translated_groups, &self.alphabet);

        (source, translated)
    }

    /// Code-switch two whole documents, sentence by aligned sentence.
    ///
    /// Alignment is by corpus position only; a sentence-count mismatch
    /// in any review pair aborts the batch.
    pub fn switch_documents(
        &self,
        source: Vec<Review>,
        translated: Vec<Review>,
    ) -> Result<(Vec<Review>, Vec<Review>), Error> {
        if source.len() != translated.len() {
            return Err(Error::Custom(format!(
                "review count mismatch: {} source, {} translated",
                source.len(),
                translated.len()
            )));
        }

        let mut switched_source = Vec::with_capacity(source.len());
        let mut switched_translated = Vec::with_capacity(translated.len());

        for (source_review, translated_review) in source.into_iter().zip(translated) {
            if source_review.sentences().len() != translated_review.sentences().len() {
                return Err(Error::Alignment {
                    review_id: source_review.id().to_string(),
                    source_sentences: source_review.sentences().len(),
                    translated_sentences: translated_review.sentences().len(),
                });
            }

            let review_id = source_review.id().to_string();
            let translated_id = translated_review.id().to_string();
            let mut source_sentences = Vec::with_capacity(source_review.sentences().len());
            let mut translated_sentences = Vec::with_capacity(translated_review.sentences().len());
            for (s, t) in source_review
                .sentences()
                .iter()
                .zip(translated_review.sentences())
            {
                let (s2, t2) = self.switch(s.clone(), t.clone());
                source_sentences.push(s2);
                translated_sentences.push(t2);
            }

            switched_source.push(Review::new(review_id, source_sentences));
            switched_translated.push(Review::new(translated_id, translated_sentences));
        }

        Ok((switched_source, switched_translated))
    }
}

impl Default for CodeSwitcher {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}

/// Rewrite targets equal to `from` on every anchored opinion.
fn relabel(sentence: &mut Sentence, from: &str, to: &str) {
    for opinion in sentence.opinions_mut() {
        if !opinion.is_null() && opinion.target() == from {
            opinion.set_target(to);
        }
    }
}

/// Re-locate every group's delimiters in the mutated text and rewrite
/// member offsets from scratch. Siblings inherit the primary's outcome,
/// never searched independently.
fn rederive(sentence: &mut Sentence, groups: &[SpanGroup], alphabet: &Alphabet) {
    let sentence_text = sentence.text().to_string();
    for group in groups {
        let pair = match group.symbol.and_then(|s| alphabet.get(s)) {
            Some(pair) => pair,
            None => {
                // offsets can't be trusted once the text has been edited
                for member in group.members().collect::<Vec<_>>() {
                    sentence.opinions_mut()[member].nullify();
                }
                continue;
            }
        };

        match pair.interior(&sentence_text) {
            Some((start, end)) => {
                for member in group.members().collect::<Vec<_>>() {
                    sentence.opinions_mut()[member].resolve(start, end);
                }
            }
            None => {
                debug!(
                    "sentence {}: pair {:?} gone after aspect swap",
                    sentence.id(),
                    group.symbol
                );
                for member in group.members().collect::<Vec<_>>() {
                    sentence.opinions_mut()[member].nullify();
                }
            }
        }
    }
}
