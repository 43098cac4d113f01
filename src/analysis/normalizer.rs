//! Whitespace normalization and character-class statistics.
//!
//! The normalizer collapses raw extracted text into a canonical single-spaced
//! string and computes the word-count statistics reported alongside keywords.
//!
//! # Examples
//!
//! ```
//! use pagelens::analysis::normalizer::normalize;
//!
//! let normalized = normalize("  Hello   world\n你好  ");
//! assert_eq!(normalized.canonical, "Hello world 你好");
//! assert_eq!(normalized.stats.english_words, 2);
//! assert_eq!(normalized.stats.chinese_chars, 2);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::token::is_cjk_ideograph;

// Any-length ASCII letter runs at word boundaries. This is a looser rule than
// the >=3-letter keyword tokens; the statistic counts every word.
static ENGLISH_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("static pattern"));

/// Character-class statistics over canonical text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Characters in the CJK Unified Ideographs range.
    pub chinese_chars: usize,
    /// Maximal runs of ASCII letters, any length.
    pub english_words: usize,
    /// Canonical text length in characters, not bytes.
    pub total_chars: usize,
}

/// The result of normalizing raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    /// Whitespace-collapsed, trimmed text.
    pub canonical: String,
    /// Statistics computed over the canonical text.
    pub stats: TextStats,
}

/// Normalize raw text into canonical form and compute its statistics.
///
/// Whitespace runs collapse to single spaces and leading/trailing whitespace
/// is trimmed. Total over arbitrary input: empty (or all-whitespace) text
/// yields an empty canonical string and all-zero stats.
pub fn normalize(raw: &str) -> Normalized {
    let canonical = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    let stats = TextStats {
        chinese_chars: canonical.chars().filter(|&c| is_cjk_ideograph(c)).count(),
        english_words: ENGLISH_WORD.find_iter(&canonical).count(),
        total_chars: canonical.chars().count(),
    };

    Normalized { canonical, stats }
}
