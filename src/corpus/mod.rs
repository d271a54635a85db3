/*! Corpus data model and corpus-level operations.

Holds the in-memory representation of a span-labeled corpus, plus the
cleaning and merging steps that run before/after augmentation.

!*/
mod clean;
mod merge;
mod types;

pub use clean::drop_unanchored;
pub use merge::merge;
pub use types::{Opinion, Polarity, Review, Sentence, SpanStatus, NULL_TARGET};
