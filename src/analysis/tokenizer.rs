//! Mixed-script tokenization of canonical text.
//!
//! [`MixedTokenizer`] runs two extraction passes over one canonical string:
//! a regex pass for Latin words and a segmentation pass (through the injected
//! [`Segmenter`]) for Chinese. All Latin tokens are emitted first, then all
//! segmentation outputs, each group in order of appearance. The emission
//! order only affects ranking tie-breaks, not set membership.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use pagelens::analysis::segmenter::NoopSegmenter;
//! use pagelens::analysis::token::Token;
//! use pagelens::analysis::tokenizer::MixedTokenizer;
//!
//! let tokenizer = MixedTokenizer::new(Arc::new(NoopSegmenter::new())).unwrap();
//! let tokens: Vec<Token> = tokenizer.tokenize("The Cat sat").collect();
//!
//! // "The" and "Cat" are lower-cased; "sat" qualifies too (>=3 letters).
//! assert_eq!(tokens, vec![
//!     Token::latin("the"),
//!     Token::latin("cat"),
//!     Token::latin("sat"),
//! ]);
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::analysis::segmenter::Segmenter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{PageLensError, Result};

/// Tokenizer for mixed Chinese/English canonical text.
pub struct MixedTokenizer {
    latin_word: Regex,
    segmenter: Arc<dyn Segmenter>,
}

impl MixedTokenizer {
    /// Create a new tokenizer with the given segmentation backend.
    pub fn new(segmenter: Arc<dyn Segmenter>) -> Result<Self> {
        // Keyword tokens require at least three letters; shorter words still
        // count toward the english_words statistic in the normalizer.
        let latin_word = Regex::new(r"\b[a-z]{3,}\b")
            .map_err(|e| PageLensError::analysis(format!("invalid latin word pattern: {e}")))?;

        Ok(MixedTokenizer {
            latin_word,
            segmenter,
        })
    }

    /// Tokenize canonical text into a finite, single-pass token stream.
    ///
    /// Latin extraction works on a case-folded copy; segmentation sees the
    /// original-case text.
    pub fn tokenize(&self, text: &str) -> TokenStream {
        let lowered = text.to_lowercase();
        let latin: Vec<Token> = self
            .latin_word
            .find_iter(&lowered)
            .map(|m| Token::latin(m.as_str()))
            .collect();

        let chinese: Vec<Token> = self
            .segmenter
            .segment(text)
            .into_iter()
            .map(Token::chinese)
            .collect();

        Box::new(latin.into_iter().chain(chinese))
    }

    /// Get the segmenter used by this tokenizer.
    pub fn segmenter(&self) -> &Arc<dyn Segmenter> {
        &self.segmenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::segmenter::NoopSegmenter;

    /// Test segmenter returning a fixed segment list.
    struct FixedSegmenter(Vec<&'static str>);

    impl Segmenter for FixedSegmenter {
        fn segment(&self, _text: &str) -> Vec<String> {
            self.0.iter().map(|s| s.to_string()).collect()
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_latin_minimum_length() {
        let tokenizer = MixedTokenizer::new(Arc::new(NoopSegmenter::new())).unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("a an ant walked by").collect();

        assert_eq!(tokens, vec![Token::latin("ant"), Token::latin("walked")]);
    }

    #[test]
    fn test_latin_lowercased() {
        let tokenizer = MixedTokenizer::new(Arc::new(NoopSegmenter::new())).unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("Rust RUST rust").collect();

        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| t.text() == "rust"));
    }

    #[test]
    fn test_latin_before_chinese_ordering() {
        let segmenter = Arc::new(FixedSegmenter(vec!["貓", "和", "狗"]));
        let tokenizer = MixedTokenizer::new(segmenter).unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("cat 貓和狗 dog").collect();

        assert_eq!(
            tokens,
            vec![
                Token::latin("cat"),
                Token::latin("dog"),
                Token::chinese("貓"),
                Token::chinese("和"),
                Token::chinese("狗"),
            ]
        );
    }

    #[test]
    fn test_segmentation_output_passes_through() {
        // Segmentation is script-agnostic; punctuation and fragments come
        // through untouched for the filter to deal with.
        let segmenter = Arc::new(FixedSegmenter(vec!["動物", "。", "abc"]));
        let tokenizer = MixedTokenizer::new(segmenter).unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("動物。abc").collect();

        assert!(tokens.contains(&Token::chinese("。")));
        assert!(tokens.contains(&Token::chinese("abc")));
    }

    #[test]
    fn test_noop_segmenter_degrades_to_latin_only() {
        let tokenizer = MixedTokenizer::new(Arc::new(NoopSegmenter::new())).unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("cat 貓和狗").collect();

        assert_eq!(tokens, vec![Token::latin("cat")]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = MixedTokenizer::new(Arc::new(NoopSegmenter::new())).unwrap();
        assert_eq!(tokenizer.tokenize("").count(), 0);
    }
}
