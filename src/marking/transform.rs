//! Transform trait.
use crate::corpus::Sentence;

/// A pipeline stage over one sentence.
///
/// Each stage consumes the sentence value and returns a new one; text
/// and opinion offsets are rewritten together, never observed
/// half-updated by another stage.
pub trait Transform {
    /// Takes ownership of [Sentence] and returns it.
    fn transform_own(&self, sentence: Sentence) -> Sentence;
}
