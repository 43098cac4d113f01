//! Jieba-backed Chinese word segmentation.

use std::sync::LazyLock;

use jieba_rs::Jieba;
use log::debug;

use super::Segmenter;

// Loading the embedded dictionary is expensive; share one instance
// process-wide.
static JIEBA: LazyLock<Jieba> = LazyLock::new(|| {
    debug!("initializing jieba segmenter");
    Jieba::new()
});

/// A segmenter backed by the jieba dictionary/HMM model.
///
/// # Examples
///
/// ```
/// use pagelens::analysis::segmenter::{JiebaSegmenter, Segmenter};
///
/// let segmenter = JiebaSegmenter::new();
/// let segments = segmenter.segment("我们今天去公园");
/// assert!(!segments.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct JiebaSegmenter;

impl JiebaSegmenter {
    /// Create a new jieba segmenter.
    pub fn new() -> Self {
        JiebaSegmenter
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        JIEBA
            .cut(text, true)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_rejoin_to_input() {
        let segmenter = JiebaSegmenter::new();
        let text = "我们今天的计划是学习分词";
        let segments = segmenter.segment(text);

        assert_eq!(segments.concat(), text);
    }

    #[test]
    fn test_dictionary_words_surface() {
        let segmenter = JiebaSegmenter::new();
        let segments = segmenter.segment("我们今天去公园");

        assert!(segments.iter().any(|s| s == "今天"));
    }

    #[test]
    fn test_mixed_text_passes_through_latin() {
        let segmenter = JiebaSegmenter::new();
        let segments = segmenter.segment("hello 世界");

        // Non-Chinese fragments come back as segments too; the stop filter
        // is responsible for dropping them.
        assert!(segments.iter().any(|s| s.contains("hello")));
    }

    #[test]
    fn test_segmenter_name() {
        assert_eq!(JiebaSegmenter::new().name(), "jieba");
    }
}
