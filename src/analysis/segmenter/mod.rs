//! Word segmentation backends for unspaced Chinese text.
//!
//! Segmentation is modeled as an injected capability: the tokenizer asks a
//! [`Segmenter`] for segments and never cares which backend produced them.
//! [`NoopSegmenter`] satisfies the same contract with zero segments, so a
//! missing segmentation backend degrades keyword analysis to Latin-only
//! instead of failing.

/// Trait for segmenters that split unspaced text into word-like units.
pub trait Segmenter: Send + Sync {
    /// Segment the given text into a sequence of substrings.
    ///
    /// Segmentation is script-agnostic: the output may contain single
    /// characters, multi-character words, punctuation, or non-Chinese
    /// fragments, depending on what boundaries the backend finds.
    fn segment(&self, text: &str) -> Vec<String>;

    /// Get the name of this segmenter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual segmenter modules
pub mod jieba;
pub mod noop;

// Re-export all segmenters for convenient access
pub use jieba::JiebaSegmenter;
pub use noop::NoopSegmenter;
