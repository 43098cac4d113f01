//! # PageLens
//!
//! A web page content analyzer for mixed Chinese/English text.
//!
//! ## Features
//!
//! - Whitespace normalization with character-class statistics
//! - Script-aware tokenization (Latin words + jieba Chinese segmentation)
//! - Stop word filtering for both scripts
//! - Deterministic keyword frequency ranking
//! - Link and image inventory over fetched pages

pub mod analysis;
pub mod cli;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod report;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
