//! No-op segmenter for the degraded, Latin-only analysis path.

use super::Segmenter;

/// A segmenter that produces no segments.
///
/// Stands in when no segmentation backend is available; Chinese keyword
/// extraction yields nothing and the rest of the pipeline is unaffected.
///
/// # Examples
///
/// ```
/// use pagelens::analysis::segmenter::{NoopSegmenter, Segmenter};
///
/// let segmenter = NoopSegmenter::new();
/// assert!(segmenter.segment("貓和狗").is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct NoopSegmenter;

impl NoopSegmenter {
    /// Create a new no-op segmenter.
    pub fn new() -> Self {
        NoopSegmenter
    }
}

impl Segmenter for NoopSegmenter {
    fn segment(&self, _text: &str) -> Vec<String> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_yields_nothing() {
        let segmenter = NoopSegmenter::new();
        assert!(segmenter.segment("貓和狗都是動物的朋友。").is_empty());
        assert!(segmenter.segment("").is_empty());
    }

    #[test]
    fn test_segmenter_name() {
        assert_eq!(NoopSegmenter::new().name(), "noop");
    }
}
