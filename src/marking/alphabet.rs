//! Delimiter alphabet.
//!
//! Marking surrounds each distinct aspect extent of a sentence with one
//! pair of delimiter characters. The alphabet is the fixed, ordered set
//! of pairs available within a single sentence pass; it is passed into
//! every stage explicitly so that marking, recovery and code-switching
//! agree on symbol identity.
use super::text;

/// One open/close delimiter pair. Several pairs of the default alphabet
/// use the same character for both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolPair {
    pub open: char,
    pub close: char,
}

impl SymbolPair {
    pub fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    /// Character range strictly between this pair's delimiters in
    /// `text`, delimiters excluded.
    ///
    /// The open delimiter is its first occurrence. When open and close
    /// are the same character, the close delimiter is the next
    /// occurrence after the open one; otherwise it is the last
    /// occurrence in the text, which tolerates trailing punctuation and
    /// reordering introduced by translation. `None` when either
    /// delimiter is absent or the range is inverted.
    pub fn interior(&self, text: &str) -> Option<(usize, usize)> {
        let open_pos = text::find_char(text, self.open)?;
        let close_pos = if self.open == self.close {
            text::find_char_from(text, self.close, open_pos + 1)?
        } else {
            text::rfind_char(text, self.close)?
        };

        if close_pos <= open_pos {
            return None;
        }
        Some((open_pos + 1, close_pos))
    }
}

/// Ordered set of delimiter pairs available for one sentence pass.
///
/// Distinct extents beyond the alphabet's capacity get no pair and
/// degrade to null; that is a documented lossy policy, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<SymbolPair>);

impl Alphabet {
    pub fn new(pairs: Vec<SymbolPair>) -> Self {
        Self(pairs)
    }

    pub fn get(&self, index: usize) -> Option<SymbolPair> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the pair whose open delimiter is `c`.
    pub fn position_of_open(&self, c: char) -> Option<usize> {
        self.0.iter().position(|pair| pair.open == c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, SymbolPair)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self(vec![
            SymbolPair::new('[', ']'),
            SymbolPair::new('{', '}'),
            SymbolPair::new('<', '>'),
            SymbolPair::new('%', '%'),
            SymbolPair::new('^', '^'),
            SymbolPair::new('`', '`'),
            SymbolPair::new('~', '~'),
            SymbolPair::new('○', '○'),
            SymbolPair::new('†', '†'),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 9);
        assert_eq!(alphabet.get(0), Some(SymbolPair::new('[', ']')));
        assert!(alphabet.get(9).is_none());
    }

    #[test]
    fn test_interior_distinct_pair() {
        let pair = SymbolPair::new('[', ']');
        assert_eq!(pair.interior("The [food] was great"), Some((5, 9)));
        // rightmost close tolerates a relocated close delimiter
        assert_eq!(pair.interior("The [food] was] great"), Some((5, 14)));
        assert_eq!(pair.interior("no delimiters here"), None);
    }

    #[test]
    fn test_interior_identical_pair() {
        let pair = SymbolPair::new('%', '%');
        // close is the next occurrence, never the same position
        assert_eq!(pair.interior("a %b% c %d%"), Some((3, 4)));
        assert_eq!(pair.interior("only %one"), None);
    }

    #[test]
    fn test_interior_inverted() {
        let pair = SymbolPair::new('[', ']');
        assert_eq!(pair.interior("] oops ["), None);
    }

    #[test]
    fn test_position_of_open() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.position_of_open('{'), Some(1));
        assert_eq!(alphabet.position_of_open('○'), Some(7));
        assert_eq!(alphabet.position_of_open('!'), None);
    }
}
