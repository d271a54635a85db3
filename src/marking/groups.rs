//! Span grouping and symbol allocation.
//!
//! Several opinions may label the identical character extent (one
//! target carrying multiple polarity labels, for instance). Such
//! opinions form a group: the first one in ascending-start order is the
//! group's primary, the rest are siblings. Only the primary is ever
//! located in text; siblings inherit whatever the primary resolves to.
use itertools::Itertools;
use log::warn;

use super::alphabet::Alphabet;
use crate::corpus::{Sentence, SpanStatus};

/// A set of opinions sharing one extent, plus the delimiter pair index
/// assigned to it. `primary` and `siblings` index into the owning
/// sentence's opinion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanGroup {
    pub primary: usize,
    pub siblings: Vec<usize>,
    pub symbol: Option<usize>,
}

impl SpanGroup {
    /// Primary followed by every sibling.
    pub fn members(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(self.primary).chain(self.siblings.iter().copied())
    }
}

/// Group anchored opinions by extent and assign each group the next
/// free delimiter pair, in ascending start order (stable on record
/// order for equal starts).
///
/// Groups past the alphabet's capacity get no symbol and are nulled on
/// the spot; they keep their slot in the returned list so siblings of
/// later stages stay accounted for.
pub fn allocate(sentence: &mut Sentence, alphabet: &Alphabet) -> Vec<SpanGroup> {
    let mut groups = collect_groups(sentence, |o| o.status() != SpanStatus::Null);

    let mut next_symbol = 0;
    for group in &mut groups {
        if next_symbol < alphabet.len() {
            group.symbol = Some(next_symbol);
            next_symbol += 1;
        } else {
            for member in group.members().collect::<Vec<_>>() {
                sentence.opinions_mut()[member].nullify();
            }
        }
    }

    groups
}

/// Recompute the groups of an already-marked sentence, reading each
/// group's symbol off the delimiter character sitting directly before
/// its extent.
///
/// This works on any sentence whose resolved offsets point between
/// delimiters (marked, recovered or code-switched), regardless of the
/// order translation left the delimiters in.
pub fn rediscover(sentence: &Sentence, alphabet: &Alphabet) -> Vec<SpanGroup> {
    let mut groups = collect_groups(sentence, |o| o.status() == SpanStatus::Resolved);

    for group in &mut groups {
        let start = sentence.opinions()[group.primary].start();
        group.symbol = symbol_before(sentence.text(), start, alphabet);
        if group.symbol.is_none() {
            warn!(
                "sentence {}: no delimiter found before offset {}",
                sentence.id(),
                start
            );
        }
    }

    groups
}

/// Delimiter pair index of the open character directly before `start`.
fn symbol_before(text: &str, start: usize, alphabet: &Alphabet) -> Option<usize> {
    let open_at = start.checked_sub(1)?;
    let open = text.chars().nth(open_at)?;
    alphabet.position_of_open(open)
}

fn collect_groups<F>(sentence: &Sentence, keep: F) -> Vec<SpanGroup>
where
    F: Fn(&crate::corpus::Opinion) -> bool,
{
    let ordered = sentence
        .opinions()
        .iter()
        .enumerate()
        .filter(|(_, o)| keep(o))
        .sorted_by_key(|(idx, o)| (o.start(), *idx));

    let mut groups: Vec<SpanGroup> = Vec::new();
    let mut extents: Vec<(usize, usize)> = Vec::new();
    for (idx, opinion) in ordered {
        match extents.iter().position(|&e| e == opinion.extent()) {
            Some(found) => groups[found].siblings.push(idx),
            None => {
                extents.push(opinion.extent());
                groups.push(SpanGroup {
                    primary: idx,
                    siblings: Vec::new(),
                    symbol: None,
                });
            }
        }
    }

    groups
}
