//! HTML stripping and inventory extraction.
//!
//! [`ExtractedPage`] wraps a parsed document and answers the questions the
//! report needs: the title, the body text with `<script>`/`<style>` subtrees
//! excluded, link counts classified against the page's own host, and the
//! image count.

use std::sync::LazyLock;

use log::debug;
use scraper::{Html, Node, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("static selector"));

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));

static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("static selector"));

/// Link counts over all `<a href>` elements of a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    /// All anchors carrying an href attribute.
    pub total: usize,
    /// Anchors resolving to the page's own host.
    pub internal: usize,
    /// Anchors resolving to a different host.
    pub external: usize,
}

/// A parsed HTML document ready for inventory extraction.
pub struct ExtractedPage {
    document: Html,
}

impl ExtractedPage {
    /// Parse an HTML string.
    pub fn parse(html: &str) -> Self {
        ExtractedPage {
            document: Html::parse_document(html),
        }
    }

    /// The trimmed `<title>` text, if the document has one.
    pub fn title(&self) -> Option<String> {
        self.document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty())
    }

    /// All text content with `<script>` and `<style>` subtrees excluded.
    ///
    /// Text nodes are joined with spaces; the result is raw text for the
    /// normalizer, not canonical text.
    pub fn body_text(&self) -> String {
        let mut chunks: Vec<String> = Vec::new();
        let mut stack = vec![self.document.tree.root()];

        while let Some(node) = stack.pop() {
            match node.value() {
                Node::Text(text) => chunks.push(text.text.to_string()),
                Node::Element(element) if matches!(element.name(), "script" | "style") => continue,
                _ => {}
            }
            // Reverse so popping visits children in document order.
            let children: Vec<_> = node.children().collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }

        chunks.join(" ")
    }

    /// Count links, classifying each against the base URL's host.
    ///
    /// Relative hrefs resolve against the base and therefore count as
    /// internal; hrefs that resolve to no host (`mailto:`, fragments on
    /// hostless schemes) count toward `total` only.
    pub fn link_stats(&self, base: &Url) -> LinkStats {
        let base_host = base.host_str();
        let mut stats = LinkStats::default();

        for element in self.document.select(&LINK_SELECTOR) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            stats.total += 1;

            let Ok(resolved) = base.join(href) else {
                continue;
            };
            match resolved.host_str() {
                Some(host) if Some(host) == base_host => stats.internal += 1,
                Some(_) => stats.external += 1,
                None => {}
            }
        }

        debug!(
            "counted {} links ({} internal, {} external)",
            stats.total, stats.internal, stats.external
        );
        stats
    }

    /// Count `<img>` elements.
    pub fn image_count(&self) -> usize {
        self.document.select(&IMAGE_SELECTOR).count()
    }
}
