//! Command implementation for the PageLens CLI.

use log::info;
use url::Url;

use crate::analysis::analyzer::KeywordAnalyzer;
use crate::analysis::normalizer::normalize;
use crate::cli::args::PageLensArgs;
use crate::cli::output::output_report;
use crate::error::{PageLensError, Result};
use crate::extract::ExtractedPage;
use crate::fetch::fetch_page;
use crate::report::PageReport;

/// Execute the analyze command.
pub fn execute_command(args: PageLensArgs) -> Result<()> {
    let url = args.resolve_url();

    if args.verbosity() > 0 {
        println!("Analyzing: {url}");
        println!();
    }

    let report = analyze_url(&url, args.top)?;
    output_report(&report, &args)
}

/// Fetch, extract, and analyze a single page.
pub fn analyze_url(url: &str, top_n: usize) -> Result<PageReport> {
    let base = Url::parse(url).map_err(|e| PageLensError::parse(format!("invalid URL {url}: {e}")))?;

    let html = fetch_page(url)?;
    let page = ExtractedPage::parse(&html);

    let normalized = normalize(&page.body_text());
    info!(
        "canonical text: {} chars, {} chinese, {} english words",
        normalized.stats.total_chars, normalized.stats.chinese_chars, normalized.stats.english_words
    );

    let analyzer = KeywordAnalyzer::new()?;
    let keywords = analyzer.extract_keywords(&normalized.canonical, top_n);

    Ok(PageReport {
        url: url.to_string(),
        title: page.title(),
        stats: normalized.stats,
        keywords,
        links: page.link_stats(&base),
        images: page.image_count(),
    })
}
