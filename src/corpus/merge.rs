//! Corpus merging.
//!
//! Joins several corpora into one by concatenating their review
//! sequences in order. Used to assemble the final augmented corpus out
//! of the source, translated and code-switched variants.
use super::types::Review;

pub fn merge<I>(parts: I) -> Vec<Review>
where
    I: IntoIterator<Item = Vec<Review>>,
{
    parts.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::merge;
    use crate::corpus::types::Review;

    #[test]
    fn test_merge_preserves_order() {
        let a = vec![Review::new("A1", vec![]), Review::new("A2", vec![])];
        let b = vec![Review::new("B1", vec![])];

        let merged = merge(vec![a, b]);

        let ids: Vec<&str> = merged.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["A1", "A2", "B1"]);
    }
}
