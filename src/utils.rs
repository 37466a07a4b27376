//! Utility helpers for the feed page
use crate::error::FeedError;
use url::Url;

/// Build the reader endpoint for the current page.
///
/// `segment` is resolved as a relative reference against `href` (so a page
/// at `/cam/` yields `/cam/whep` while `/cam` yields `/whep`), then the raw
/// page `search` string is appended unchanged.
pub fn whep_endpoint(href: &str, segment: &str, search: &str) -> Result<String, FeedError> {
    let base = Url::parse(href).map_err(|e| FeedError::InvalidPageUrl(format!("{href}: {e}")))?;
    let endpoint = base
        .join(segment)
        .map_err(|e| FeedError::InvalidPageUrl(format!("{href}: {e}")))?;
    Ok(format!("{endpoint}{search}"))
}
