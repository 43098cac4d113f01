//! Stop word filter implementation.
//!
//! Removes common function words that don't contribute to keyword ranking.
//! Carries two fixed lists, one per script: English articles/pronouns and
//! Chinese particles. Chinese segments additionally have to be made up
//! entirely of CJK ideographs; a segment containing any Latin letter, digit,
//! or punctuation is dropped whole, never partially kept.
//!
//! # Examples
//!
//! ```
//! use pagelens::analysis::token::Token;
//! use pagelens::analysis::token_filter::TokenFilter;
//! use pagelens::analysis::token_filter::stop::StopWordFilter;
//!
//! let filter = StopWordFilter::new();
//! let tokens = vec![
//!     Token::latin("the"),
//!     Token::latin("quick"),
//!     Token::chinese("的"),
//!     Token::chinese("朋友"),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(result, vec![Token::latin("quick"), Token::chinese("朋友")]);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream, is_cjk_ideograph};
use crate::analysis::token_filter::TokenFilter;

/// Default English stop words list.
///
/// Common English function words filtered out of keyword ranking.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "her", "was", "one", "our",
    "out", "this", "that", "with", "from", "have", "has", "had", "will", "more",
];

/// Default Chinese stop words list.
///
/// Common particles, conjunctions, and pronouns.
const DEFAULT_CHINESE_STOP_WORDS: &[&str] = &[
    "的",
    "了",
    "和",
    "是",
    "在",
    "也",
    "有",
    "與",
    "將",
    "及",
    "或",
    "就",
    "都",
    "而",
    "著",
    "以",
    "對",
    "由",
    "及其",
    "等",
    "中",
    "之一",
    "並",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Default Chinese stop words as a HashSet.
pub static DEFAULT_CHINESE_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_CHINESE_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words and non-ideograph Chinese fragments.
///
/// Latin tokens survive when their lower-cased text is outside the English
/// stop set. Chinese segments survive when they are non-empty after trimming,
/// outside the Chinese stop set, and consist entirely of CJK ideographs.
/// Everything else is discarded silently; an all-filtered input yields an
/// empty stream.
#[derive(Clone, Debug)]
pub struct StopWordFilter {
    /// English stop words, matched against Latin token text
    english: Arc<HashSet<String>>,
    /// Chinese stop words, matched against trimmed segment text
    chinese: Arc<HashSet<String>>,
}

impl StopWordFilter {
    /// Create a new stop word filter with the default stop word sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagelens::analysis::token_filter::stop::StopWordFilter;
    ///
    /// let filter = StopWordFilter::new();
    /// assert!(filter.is_english_stop_word("the"));
    /// assert!(filter.is_chinese_stop_word("的"));
    /// assert!(!filter.is_english_stop_word("keyword"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(
            DEFAULT_ENGLISH_STOP_WORDS_SET.clone(),
            DEFAULT_CHINESE_STOP_WORDS_SET.clone(),
        )
    }

    /// Create a new stop word filter with custom stop word sets.
    pub fn with_stop_words(english: HashSet<String>, chinese: HashSet<String>) -> Self {
        StopWordFilter {
            english: Arc::new(english),
            chinese: Arc::new(chinese),
        }
    }

    /// Create a new stop word filter from word lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagelens::analysis::token_filter::stop::StopWordFilter;
    ///
    /// let filter = StopWordFilter::from_words(vec!["foo", "bar"], vec!["之"]);
    /// assert!(filter.is_english_stop_word("foo"));
    /// assert!(filter.is_chinese_stop_word("之"));
    /// ```
    pub fn from_words<I, J, S, T>(english: I, chinese: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self::with_stop_words(
            english.into_iter().map(|s| s.into()).collect(),
            chinese.into_iter().map(|s| s.into()).collect(),
        )
    }

    /// Check if a word is in the English stop set.
    pub fn is_english_stop_word(&self, word: &str) -> bool {
        self.english.contains(word)
    }

    /// Check if a word is in the Chinese stop set.
    pub fn is_chinese_stop_word(&self, word: &str) -> bool {
        self.chinese.contains(word)
    }

    fn keep(&self, token: &Token) -> bool {
        match token {
            Token::Latin(text) => !self.english.contains(text),
            Token::Chinese(text) => {
                let trimmed = text.trim();
                !trimmed.is_empty()
                    && !self.chinese.contains(trimmed)
                    && trimmed.chars().all(is_cjk_ideograph)
            }
        }
    }
}

impl Default for StopWordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for StopWordFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered: Vec<Token> = tokens.filter(|token| self.keep(token)).collect();
        Box::new(filtered.into_iter())
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(filter: &StopWordFilter, tokens: Vec<Token>) -> Vec<Token> {
        filter.filter(Box::new(tokens.into_iter())).collect()
    }

    #[test]
    fn test_english_stop_words_removed() {
        let filter = StopWordFilter::new();
        let tokens = vec![
            Token::latin("the"),
            Token::latin("cat"),
            Token::latin("and"),
            Token::latin("dog"),
        ];

        let result = run(&filter, tokens);

        assert_eq!(result, vec![Token::latin("cat"), Token::latin("dog")]);
    }

    #[test]
    fn test_chinese_stop_words_removed() {
        let filter = StopWordFilter::new();
        let tokens = vec![
            Token::chinese("貓"),
            Token::chinese("和"),
            Token::chinese("動物"),
            Token::chinese("的"),
            Token::chinese("朋友"),
        ];

        let result = run(&filter, tokens);

        assert_eq!(
            result,
            vec![
                Token::chinese("貓"),
                Token::chinese("動物"),
                Token::chinese("朋友"),
            ]
        );
    }

    #[test]
    fn test_non_ideograph_segments_dropped_whole() {
        let filter = StopWordFilter::new();
        let tokens = vec![
            Token::chinese("。"),
            Token::chinese("abc"),
            Token::chinese("貓abc"),
            Token::chinese("123"),
            Token::chinese(" "),
            Token::chinese(""),
            Token::chinese("朋友"),
        ];

        let result = run(&filter, tokens);

        assert_eq!(result, vec![Token::chinese("朋友")]);
    }

    #[test]
    fn test_filtering_is_subset() {
        let filter = StopWordFilter::new();
        let tokens = vec![
            Token::latin("the"),
            Token::latin("keyword"),
            Token::chinese("的"),
            Token::chinese("關鍵"),
        ];

        let result = run(&filter, tokens.clone());

        assert!(result.iter().all(|t| tokens.contains(t)));
    }

    #[test]
    fn test_all_filtered_yields_empty() {
        let filter = StopWordFilter::new();
        let tokens = vec![
            Token::latin("the"),
            Token::latin("and"),
            Token::latin("for"),
        ];

        assert!(run(&filter, tokens).is_empty());
    }

    #[test]
    fn test_custom_word_lists() {
        let filter = StopWordFilter::from_words(vec!["custom"], Vec::<String>::new());
        let tokens = vec![Token::latin("custom"), Token::latin("kept")];

        let result = run(&filter, tokens);

        assert_eq!(result, vec![Token::latin("kept")]);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopWordFilter::new().name(), "stop");
    }
}
