//! Output formatting for the PageLens CLI.

use crate::cli::args::{OutputFormat, PageLensArgs};
use crate::error::Result;
use crate::report::PageReport;

/// Output a report in the format selected on the command line.
pub fn output_report(report: &PageReport, args: &PageLensArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(report),
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output in human-readable format.
fn output_human(report: &PageReport) -> Result<()> {
    let title = report.title.as_deref().unwrap_or("(no title)");
    println!("Title: {title}");
    println!("{}", "=".repeat(60));

    println!();
    println!("Word counts:");
    println!("  Chinese characters: {}", report.stats.chinese_chars);
    println!("  English words:      {}", report.stats.english_words);
    println!("  Total characters:   {}", report.stats.total_chars);

    println!();
    if report.keywords.is_empty() {
        println!("No keywords found.");
    } else {
        println!("Top {} keywords:", report.keywords.len());
        for (i, entry) in report.keywords.iter().enumerate() {
            println!("  {:2}. {:15} ({} times)", i + 1, entry.word, entry.count);
        }
    }

    println!();
    println!("Links:");
    println!("  Total:    {}", report.links.total);
    println!("  Internal: {}", report.links.internal);
    println!("  External: {}", report.links.external);

    println!();
    println!("Images: {}", report.images);

    Ok(())
}

/// Output in JSON format.
fn output_json(report: &PageReport, args: &PageLensArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };

    println!("{json}");
    Ok(())
}
