//! Command line argument parsing for the PageLens CLI using clap.

use clap::{Parser, ValueEnum};

use crate::analysis::ranker::DEFAULT_TOP_N;

/// URL analyzed when neither an argument nor TARGET_URL is given.
pub const DEFAULT_URL: &str = "https://www.python.org";

/// PageLens - a web page content analyzer
#[derive(Parser, Debug, Clone)]
#[command(name = "pagelens")]
#[command(about = "Fetch a web page and report text, keyword, link, and image statistics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PageLensArgs {
    /// URL to analyze (falls back to TARGET_URL, then the built-in default)
    #[arg(value_name = "URL", env = "TARGET_URL")]
    pub url: Option<String>,

    /// Number of keywords to report
    #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl PageLensArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Resolve the URL to analyze.
    ///
    /// Precedence is argument > TARGET_URL > default (clap's env fallback
    /// covers the first two). A URL without a scheme gets `https://`
    /// prefixed.
    pub fn resolve_url(&self) -> String {
        let url = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_URL);

        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{url}")
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone)]
pub enum OutputFormat {
    /// Human-readable report
    Human,
    /// JSON output
    Json,
}
