//! Corpus augmentation pipeline.
//!
//! End-to-end run over one corpus file:
//! 1. opinions without an anchored target are dropped,
//! 1. every aspect extent is marked with a delimiter pair,
//! 1. each sentence goes through the translation service and its spans
//!    are recovered from the surviving delimiters,
//! 1. aligned sentence pairs get their aspects code-switched,
//! 1. delimiters are stripped and the four corpus variants are merged
//!    into the final augmented corpus.
//!
//! Sentences are independent: the translation/recovery stage fans out
//! over worker threads, and results are collected back in corpus order
//! so document-level alignment survives parallel execution. Per-sentence
//! failures degrade spans to null and never abort the batch.
use std::path::{Path, PathBuf};

use log::{error, info};
use rayon::prelude::*;

use crate::corpus::{self, Review, Sentence, SpanStatus};
use crate::error::Error;
use crate::io::{read_corpus, write_corpus};
use crate::lang;
use crate::marking::{Alphabet, CodeSwitcher, Marker, Recoverer, Stripper, Transform};
use crate::pipelines::pipeline::Pipeline;
use crate::translate::Translate;

pub struct Augment<T>
where
    T: Translate + Sync,
{
    src: PathBuf,
    dst: PathBuf,
    target_lang: &'static str,
    translator: T,
    alphabet: Alphabet,
}

impl<T> Augment<T>
where
    T: Translate + Sync,
{
    pub fn new(src: PathBuf, dst: PathBuf, target_lang: &str, translator: T) -> Result<Self, Error> {
        Ok(Self {
            src,
            dst,
            target_lang: lang::normalize(target_lang)?,
            translator,
            alphabet: Alphabet::default(),
        })
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    fn output_path(&self, stem: &str) -> PathBuf {
        self.dst.join(format!("{}.jsonl", stem))
    }

    /// Mark every sentence of the corpus. Numeric-only and empty
    /// sentences are passed through untouched.
    pub fn mark(&self, reviews: Vec<Review>) -> Vec<Review> {
        let marker = Marker::new(self.alphabet.clone());
        map_sentences(reviews, |sentence| {
            if sentence.is_numeric_only() {
                sentence
            } else {
                marker.transform_own(sentence)
            }
        })
    }

    /// Translate and recover one sentence, degrading its spans on
    /// unrecoverable translation failure.
    fn translate_sentence(&self, recoverer: &Recoverer, sentence: &Sentence) -> Sentence {
        if sentence.is_numeric_only() {
            return sentence.clone();
        }

        match self.translator.translate(sentence.text()) {
            Ok(translation) => recoverer.recover(sentence.clone(), translation),
            Err(e) => {
                error!("sentence {}: {:?}", sentence.id(), e);
                let mut degraded = sentence.clone();
                for opinion in degraded.opinions_mut() {
                    opinion.nullify();
                }
                degraded
            }
        }
    }

    /// Translation stage, parallel across the sentences of each review.
    /// Results are written back by sentence index, not completion order.
    pub fn translate(&self, marked: &[Review]) -> Vec<Review> {
        let recoverer = Recoverer::new(self.alphabet.clone());
        marked
            .iter()
            .map(|review| {
                let sentences: Vec<Sentence> = review
                    .sentences()
                    .par_iter()
                    .map(|sentence| self.translate_sentence(&recoverer, sentence))
                    .collect();
                Review::new(review.id(), sentences)
            })
            .collect()
    }

    pub fn strip(&self, reviews: Vec<Review>) -> Vec<Review> {
        let stripper = Stripper::new();
        map_sentences(reviews, |sentence| stripper.transform_own(sentence))
    }
}

impl<T> Pipeline<()> for Augment<T>
where
    T: Translate + Sync,
{
    fn run(&self) -> Result<(), Error> {
        info!("reading corpus from {:?}", self.src);
        let mut reviews = read_corpus(&self.src)?;
        corpus::drop_unanchored(&mut reviews);

        info!("marking {} reviews", reviews.len());
        let marked = self.mark(reviews);
        write_corpus(&self.output_path("marked"), &marked)?;

        info!("translating to {}", self.target_lang);
        let translated = self.translate(&marked);
        let lost = count_spans(&translated, SpanStatus::Null);
        let kept = count_spans(&translated, SpanStatus::Resolved);
        info!("recovered {} spans, lost {}", kept, lost);
        write_corpus(
            &self.output_path(&format!("translated_{}", self.target_lang)),
            &translated,
        )?;

        info!("code-switching aspects");
        let switcher = CodeSwitcher::new(self.alphabet.clone());
        let (switched_source, switched_translated) =
            switcher.switch_documents(marked.clone(), translated.clone())?;
        write_corpus(
            &self.output_path(&format!("acs_source_to_{}", self.target_lang)),
            &switched_source,
        )?;
        write_corpus(
            &self.output_path(&format!("acs_{}_to_source", self.target_lang)),
            &switched_translated,
        )?;

        info!("stripping delimiters and merging variants");
        let augmented = corpus::merge(vec![
            self.strip(marked),
            self.strip(translated),
            self.strip(switched_source),
            self.strip(switched_translated),
        ]);
        write_corpus(
            &self.output_path(&format!("augmented_{}", self.target_lang)),
            &augmented,
        )?;

        info!("augmentation done, output in {:?}", self.dst);
        Ok(())
    }
}

/// Apply `f` to every sentence of every review.
pub fn map_sentences<F>(reviews: Vec<Review>, f: F) -> Vec<Review>
where
    F: Fn(Sentence) -> Sentence,
{
    reviews
        .into_iter()
        .map(|review| {
            let id = review.id().to_string();
            let sentences = review
                .sentences()
                .iter()
                .cloned()
                .map(&f)
                .collect::<Vec<Sentence>>();
            Review::new(id, sentences)
        })
        .collect()
}

fn count_spans(reviews: &[Review], status: SpanStatus) -> usize {
    reviews
        .iter()
        .flat_map(|r| r.sentences())
        .flat_map(|s| s.opinions())
        .filter(|o| o.status() == status)
        .count()
}

/// Re-read an intermediate corpus (marked, translated or switched) and
/// recover the resolution state that the persisted format does not
/// carry.
pub fn load_intermediate(src: &Path) -> Result<Vec<Review>, Error> {
    let mut reviews = read_corpus(src)?;
    for review in &mut reviews {
        for sentence in review.sentences_mut() {
            sentence.revalidate();
        }
    }
    Ok(reviews)
}
