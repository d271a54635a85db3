//! Span marking.
//!
//! Surrounds each distinct aspect extent with its delimiter pair before
//! the sentence goes out to translation. Insertions run in ascending
//! start order under a running shift of two characters per marked
//! group, so offsets of not-yet-processed groups stay interpretable
//! against the original coordinates.
use log::warn;

use super::alphabet::Alphabet;
use super::groups;
use super::text;
use super::transform::Transform;
use crate::corpus::Sentence;

pub struct Marker {
    alphabet: Alphabet,
}

impl Marker {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}

impl Transform for Marker {
    /// Mark every symbol-bearing group of the sentence.
    ///
    /// A group at `(start, end)` marked under shift `s` ends up resolved
    /// at `(start + s + 1, end + s + 1)`, the extent strictly between
    /// its delimiters. Groups without a symbol stay null and advance
    /// neither the shift nor the symbol counter.
    fn transform_own(&self, mut sentence: Sentence) -> Sentence {
        let groups = groups::allocate(&mut sentence, &self.alphabet);

        let mut text = sentence.text().to_string();
        let mut shift = 0;
        for group in &groups {
            let pair = match group.symbol.and_then(|s| self.alphabet.get(s)) {
                Some(pair) => pair,
                None => continue,
            };

            let (start, end) = sentence.opinions()[group.primary].extent();
            let target = sentence.opinions()[group.primary].target();
            if text::slice(&text, start + shift, end + shift) != Some(target) {
                warn!(
                    "sentence {}: target {:?} does not match text at {}..{}",
                    sentence.id(),
                    target,
                    start,
                    end
                );
            }

            text = text::insert_pair(&text, start + shift, end + shift, pair.open, pair.close);

            for member in group.members().collect::<Vec<_>>() {
                sentence.opinions_mut()[member].resolve(start + shift + 1, end + shift + 1);
            }
            shift += 2;
        }

        sentence.set_text(text);
        sentence
    }
}
