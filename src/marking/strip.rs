//! Delimiter removal.
//!
//! Inverse of the marking step: removes the delimiter pair around every
//! resolved group and renumbers offsets under a running negative shift,
//! two characters per removed pair. Marking followed by stripping (with
//! no translation in between) restores every span exactly.
use itertools::Itertools;
use log::warn;

use super::transform::Transform;
use crate::corpus::{Sentence, SpanStatus};

pub struct Stripper;

impl Stripper {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Stripper {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for Stripper {
    /// Remove delimiters positionally, one resolved group at a time in
    /// ascending start order.
    ///
    /// The k-th processed group sits at interior `(start, end)` with its
    /// open delimiter directly before it and its close delimiter
    /// directly after; in the partially-stripped text those are at
    /// `start - 1 - 2k` and `end - 2k`. The group ends up at
    /// `(start - 1 - 2k, end - 1 - 2k)`, siblings included. Null
    /// opinions are untouched.
    fn transform_own(&self, mut sentence: Sentence) -> Sentence {
        let ordered_extents: Vec<(usize, usize)> = sentence
            .opinions()
            .iter()
            .filter(|o| o.status() == SpanStatus::Resolved)
            .map(|o| o.extent())
            .unique()
            .sorted()
            .collect();

        let mut chars: Vec<char> = sentence.text().chars().collect();
        let mut removed_pairs = 0;
        for (start, end) in ordered_extents {
            let shift = 2 * removed_pairs;
            // in the partially-stripped text, the open delimiter sits at
            // start - 1 - shift and the close delimiter at end - shift
            let open_at = start.checked_sub(1 + shift);
            let close_at = end.checked_sub(shift);
            let (open_at, close_at) = match (open_at, close_at) {
                (Some(open), Some(close)) if open < close && close < chars.len() => (open, close),
                _ => {
                    warn!(
                        "sentence {}: cannot strip pair around {}..{}",
                        sentence.id(),
                        start,
                        end
                    );
                    continue;
                }
            };

            // higher index first so the open position stays valid
            chars.remove(close_at);
            chars.remove(open_at);

            for opinion in sentence.opinions_mut() {
                if opinion.status() == SpanStatus::Resolved && opinion.extent() == (start, end) {
                    opinion.resolve(start - 1 - shift, end - 1 - shift);
                }
            }
            removed_pairs += 1;
        }

        sentence.set_text(chars.into_iter().collect());
        sentence
    }
}
