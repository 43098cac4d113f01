//! Keyword extraction pipeline.
//!
//! [`KeywordAnalyzer`] wires the pieces together:
//!
//! ```text
//! Canonical Text → MixedTokenizer → StopWordFilter → FrequencyRanker
//! ```
//!
//! Each invocation is single-threaded and single-pass; the token stream and
//! frequency table live only for the duration of the call.
//!
//! # Examples
//!
//! ```
//! use pagelens::analysis::analyzer::KeywordAnalyzer;
//!
//! let analyzer = KeywordAnalyzer::new().unwrap();
//! let keywords = analyzer.extract_keywords("The cat and the cat sat", 5);
//!
//! assert_eq!(keywords[0].word, "cat");
//! assert_eq!(keywords[0].count, 2);
//! // "the" and "and" are stop words; "sat" survives.
//! assert!(keywords.iter().all(|e| e.word != "the"));
//! ```

use std::sync::Arc;

use log::debug;

use crate::analysis::ranker::{FrequencyRanker, RankedEntry};
use crate::analysis::segmenter::{JiebaSegmenter, Segmenter};
use crate::analysis::token_filter::{StopWordFilter, TokenFilter};
use crate::analysis::tokenizer::MixedTokenizer;
use crate::error::Result;

/// The tokenize → filter → rank pipeline over canonical text.
pub struct KeywordAnalyzer {
    tokenizer: MixedTokenizer,
    filter: StopWordFilter,
    ranker: FrequencyRanker,
}

impl KeywordAnalyzer {
    /// Create an analyzer with the jieba segmenter and default stop sets.
    pub fn new() -> Result<Self> {
        Self::with_segmenter(Arc::new(JiebaSegmenter::new()))
    }

    /// Create an analyzer with a custom segmentation backend.
    ///
    /// Passing [`NoopSegmenter`](crate::analysis::segmenter::NoopSegmenter)
    /// degrades keyword extraction to Latin-only.
    pub fn with_segmenter(segmenter: Arc<dyn Segmenter>) -> Result<Self> {
        Ok(KeywordAnalyzer {
            tokenizer: MixedTokenizer::new(segmenter)?,
            filter: StopWordFilter::new(),
            ranker: FrequencyRanker::new(),
        })
    }

    /// Replace the stop word filter.
    pub fn with_stop_filter(mut self, filter: StopWordFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Extract the top `top_n` keywords from canonical text.
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<RankedEntry> {
        let tokens = self.tokenizer.tokenize(text);
        let filtered = self.filter.filter(tokens);
        let ranked = self.ranker.rank(filtered, top_n);
        debug!(
            "extracted {} keywords via {} segmenter",
            ranked.len(),
            self.tokenizer.segmenter().name()
        );
        ranked
    }
}
