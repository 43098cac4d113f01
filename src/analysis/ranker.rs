//! Frequency counting and top-N ranking of filtered tokens.
//!
//! Counting preserves first-seen order, so a stable sort by descending count
//! gives the deterministic tie-break: equal counts rank in order of first
//! occurrence in the filtered stream.
//!
//! # Examples
//!
//! ```
//! use pagelens::analysis::ranker::FrequencyRanker;
//! use pagelens::analysis::token::Token;
//!
//! let ranker = FrequencyRanker::new();
//! let tokens = vec![
//!     Token::latin("dog"),
//!     Token::latin("cat"),
//!     Token::latin("dog"),
//! ];
//!
//! let ranked = ranker.rank(Box::new(tokens.into_iter()), 10);
//!
//! assert_eq!(ranked[0].word, "dog");
//! assert_eq!(ranked[0].count, 2);
//! assert_eq!(ranked[1].word, "cat");
//! assert_eq!(ranked[1].count, 1);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;

/// Default number of keywords to report.
pub const DEFAULT_TOP_N: usize = 10;

/// A ranked keyword with its occurrence count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Token surface string.
    pub word: String,
    /// Occurrence count across the filtered stream.
    pub count: u64,
}

/// Ranks tokens by frequency with a first-seen tie-break.
#[derive(Clone, Debug, Default)]
pub struct FrequencyRanker;

impl FrequencyRanker {
    /// Create a new frequency ranker.
    pub fn new() -> Self {
        FrequencyRanker
    }

    /// Count token occurrences and return the top `top_n` entries.
    ///
    /// Output is sorted non-increasing by count; equal counts keep the order
    /// in which the words first appeared. `top_n == 0` yields an empty
    /// result, as does an empty stream; neither is an error.
    pub fn rank(&self, tokens: TokenStream, top_n: usize) -> Vec<RankedEntry> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<RankedEntry> = Vec::new();

        for token in tokens {
            let text = token.into_text();
            match index.get(&text) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(text.clone(), entries.len());
                    entries.push(RankedEntry {
                        word: text,
                        count: 1,
                    });
                }
            }
        }

        // Stable sort keeps first-seen order within equal counts.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(top_n);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn stream(words: &[&str]) -> TokenStream {
        let tokens: Vec<Token> = words.iter().map(|&w| Token::latin(w)).collect();
        Box::new(tokens.into_iter())
    }

    #[test]
    fn test_rank_by_frequency() {
        let ranker = FrequencyRanker::new();
        let ranked = ranker.rank(stream(&["b", "a", "b", "c", "b", "a"]), 10);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0], RankedEntry { word: "b".to_string(), count: 3 });
        assert_eq!(ranked[1], RankedEntry { word: "a".to_string(), count: 2 });
        assert_eq!(ranked[2], RankedEntry { word: "c".to_string(), count: 1 });
    }

    #[test]
    fn test_tie_break_is_first_seen_order() {
        let ranker = FrequencyRanker::new();
        let ranked = ranker.rank(stream(&["zebra", "apple", "mango"]), 10);

        let words: Vec<&str> = ranked.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_counts_non_increasing() {
        let ranker = FrequencyRanker::new();
        let ranked = ranker.rank(stream(&["a", "b", "b", "c", "c", "c"]), 10);

        assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_truncation() {
        let ranker = FrequencyRanker::new();
        let ranked = ranker.rank(stream(&["a", "b", "c", "d"]), 2);

        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_fewer_distinct_than_top_n() {
        let ranker = FrequencyRanker::new();
        let ranked = ranker.rank(stream(&["a", "a"]), 10);

        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_top_n_zero_yields_empty() {
        let ranker = FrequencyRanker::new();
        let ranked = ranker.rank(stream(&["a", "b"]), 0);

        assert!(ranked.is_empty());
    }

    #[test]
    fn test_empty_stream() {
        let ranker = FrequencyRanker::new();
        assert!(ranker.rank(stream(&[]), 10).is_empty());
    }

    #[test]
    fn test_chinese_and_latin_share_one_namespace() {
        let ranker = FrequencyRanker::new();
        let tokens = vec![
            Token::latin("cat"),
            Token::chinese("貓"),
            Token::chinese("貓"),
        ];
        let ranked = ranker.rank(Box::new(tokens.into_iter()), 10);

        assert_eq!(ranked[0], RankedEntry { word: "貓".to_string(), count: 2 });
        assert_eq!(ranked[1], RankedEntry { word: "cat".to_string(), count: 1 });
    }
}
