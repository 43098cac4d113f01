//! Page report assembly.
//!
//! [`PageReport`] is the display payload: analysis output (word-count stats,
//! ranked keywords) combined with the extractor's title/link/image inventory.

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::TextStats;
use crate::analysis::ranker::RankedEntry;
use crate::extract::LinkStats;

/// The complete analysis result for one page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageReport {
    /// The analyzed URL.
    pub url: String,
    /// The page title, when the document has one.
    pub title: Option<String>,
    /// Character-class statistics over the canonical body text.
    pub stats: TextStats,
    /// Ranked keywords, highest count first.
    pub keywords: Vec<RankedEntry>,
    /// Link counts classified against the page's host.
    pub links: LinkStats,
    /// Number of `<img>` elements.
    pub images: usize,
}
