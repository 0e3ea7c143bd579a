use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use super::ResolveError;

/// Column width for rendered page text; wide so sentences stay on one line
const RENDER_WIDTH: usize = 200;

pub fn parse_page_url(raw: &str) -> Result<url::Url, ResolveError> {
    let invalid = |reason: String| ResolveError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let url = url::Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

/// Fetch a page and reduce it to readable text
pub async fn fetch_page_text(http: &Client, raw_url: &str) -> Result<String, ResolveError> {
    let url = parse_page_url(raw_url)?;
    tracing::info!(url = %url, "Fetching page");

    let response = http.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ResolveError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let is_html = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_none_or(|ct| ct.contains("html"));

    let body = response.text().await?;
    let text = if is_html {
        html_to_text(&body)
    } else {
        body
    };

    tracing::debug!(url = %url, chars = text.len(), "Fetched page text");
    Ok(text)
}

pub fn html_to_text(html: &str) -> String {
    html2text::from_read(html.as_bytes(), RENDER_WIDTH)
}
