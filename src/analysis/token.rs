//! Token types for text analysis.
//!
//! This module defines the core data structures for representing text tokens,
//! which are the fundamental units that flow through the analysis pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A tagged token, either a Latin word or a Chinese segment
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! Latin and Chinese tokens share one namespace keyed by surface string; their
//! alphabets cannot collide, so downstream counting is alphabet-agnostic.
//!
//! # Examples
//!
//! ```
//! use pagelens::analysis::token::Token;
//!
//! let token = Token::latin("hello");
//! assert_eq!(token.text(), "hello");
//! assert!(token.is_latin());
//!
//! let token = Token::chinese("動物");
//! assert_eq!(token.text(), "動物");
//! assert!(token.is_chinese());
//! ```

use std::fmt;

/// A token represents a single unit of text after tokenization.
///
/// A `Latin` token holds a lower-cased run of ASCII letters; a `Chinese`
/// token holds one segmentation output unit in its original form, which may
/// span multiple characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// A lower-cased Latin word.
    Latin(String),
    /// A single Chinese segmentation unit.
    Chinese(String),
}

impl Token {
    /// Create a new Latin token.
    pub fn latin<S: Into<String>>(text: S) -> Self {
        Token::Latin(text.into())
    }

    /// Create a new Chinese token.
    pub fn chinese<S: Into<String>>(text: S) -> Self {
        Token::Chinese(text.into())
    }

    /// Get the surface text of the token.
    pub fn text(&self) -> &str {
        match self {
            Token::Latin(text) | Token::Chinese(text) => text,
        }
    }

    /// Consume the token and return its surface text.
    pub fn into_text(self) -> String {
        match self {
            Token::Latin(text) | Token::Chinese(text) => text,
        }
    }

    /// Check whether this is a Latin token.
    pub fn is_latin(&self) -> bool {
        matches!(self, Token::Latin(_))
    }

    /// Check whether this is a Chinese token.
    pub fn is_chinese(&self) -> bool {
        matches!(self, Token::Chinese(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Check whether a character is a CJK Unified Ideograph (U+4E00..=U+9FFF).
pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}
