//! Upstream document fetch.
//!
//! One GET with a realistic browser user-agent, `en-US` language
//! preference, caching disabled, and a bounded timeout. No retries: a
//! failed fetch is reported once, and retry policy belongs to the caller.

use std::time::Duration;

use reqwest::header;

use crate::encoding;
use crate::error::{Error, Result};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetch `url` and return its body as UTF-8 text.
///
/// A non-2xx status maps to [`Error::Upstream`]; transport failures map to
/// [`Error::Network`]. The body is transcoded from its declared charset.
pub async fn fetch_document(url: &str) -> Result<String> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

    tracing::debug!(url, "fetching upstream document");
    let response = client
        .get(url)
        .header(header::USER_AGENT, USER_AGENT)
        .header(header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
        .header(header::CACHE_CONTROL, "no-store")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url, status = status.as_u16(), "upstream returned non-success");
        return Err(Error::Upstream(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    tracing::debug!(url, bytes = bytes.len(), "upstream document fetched");
    Ok(encoding::transcode_to_utf8(&bytes))
}
