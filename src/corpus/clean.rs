//! Corpus cleaning.
//!
//! Augmentation assumes every remaining opinion is anchored to a
//! character range; opinions carrying the `NULL` target sentinel are
//! dropped up front.
use log::info;

use super::types::Review;

/// Remove unanchored opinions from the whole corpus.
///
/// Returns the number of opinions removed. This is the only place the
/// pipeline ever deletes an opinion record; every later stage degrades
/// to the null status instead.
pub fn drop_unanchored(reviews: &mut [Review]) -> usize {
    let mut removed = 0;
    for review in reviews.iter_mut() {
        for sentence in review.sentences_mut() {
            let before = sentence.opinions().len();
            sentence.opinions_mut().retain(|o| !o.is_null());
            removed += before - sentence.opinions().len();
        }
    }

    info!("removed {} opinions with target NULL", removed);
    removed
}

#[cfg(test)]
mod tests {
    use super::drop_unanchored;
    use crate::corpus::types::{Opinion, Polarity, Review, Sentence};

    #[test]
    fn test_drop_unanchored() {
        let opinions = vec![
            Opinion::new("food", "FOOD#QUALITY", Polarity::Positive, 4, 8),
            Opinion::unanchored("RESTAURANT#GENERAL", Polarity::Neutral),
        ];
        let mut reviews = vec![Review::new(
            "R1",
            vec![Sentence::new("R1:0", "The food was great", opinions)],
        )];

        let removed = drop_unanchored(&mut reviews);

        assert_eq!(removed, 1);
        assert_eq!(reviews[0].sentences()[0].opinions().len(), 1);
        assert_eq!(reviews[0].sentences()[0].opinions()[0].target(), "food");
    }
}
