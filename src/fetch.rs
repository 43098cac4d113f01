//! Blocking HTTP fetch of the page under analysis.
//!
//! The fetch stage is the only blocking I/O boundary; everything downstream
//! works on the returned HTML string.

use std::time::Duration;

use log::{debug, info};

use crate::error::{PageLensError, Result};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch a page and return its body as text.
///
/// Non-2xx responses are reported as [`PageLensError::Fetch`]; there is no
/// retry logic.
pub fn fetch_page(url: &str) -> Result<String> {
    info!("fetching {url}");

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| PageLensError::fetch(format!("failed to build HTTP client: {e}")))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| PageLensError::fetch(format!("request to {url} failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(PageLensError::fetch(format!(
            "{url} returned HTTP {status}"
        )));
    }

    let body = response
        .text()
        .map_err(|e| PageLensError::fetch(format!("failed to read response body: {e}")))?;

    debug!("fetched {} bytes from {url}", body.len());
    Ok(body)
}
