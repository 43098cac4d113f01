//! Text analysis module for PageLens.
//!
//! This module provides the core text analysis pipeline: whitespace
//! normalization, mixed-script tokenization, stop word filtering, and
//! frequency ranking.

pub mod analyzer;
pub mod normalizer;
pub mod ranker;
pub mod segmenter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
