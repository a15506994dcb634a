pub(crate) mod locale;
pub(crate) mod schedule;
pub(crate) mod standings;
pub(crate) mod stats;
pub(crate) mod teams;
pub(crate) mod transfers;

pub(crate) use ::scraper::Html;
use ::scraper::{ElementRef, Selector};
use itertools::Itertools;
use tracing::debug;

use crate::error::{MplError, Result};

pub(crate) const BASE_URL: &str = "https://id-mpl.com";

/// Fetch a URL and return the response body as text.
///
/// Transport failures and non-success statuses are returned as errors; there is no retry.
pub(crate) async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| MplError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(MplError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| MplError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}

/// Fetch a URL and parse the response body as an HTML document.
pub(crate) async fn get_document(client: &reqwest::Client, url: &str) -> Result<Html> {
    let body = fetch_page(client, url).await?;
    Ok(Html::parse_document(&body))
}

/// Extract trimmed text content from the first element matching `selector`
/// inside `element`. Returns an empty string if nothing matches.
pub(crate) fn select_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|e| element_text(&e))
        .unwrap_or_default()
}

/// All text below `element`, with runs of whitespace collapsed to single spaces.
pub(crate) fn element_text(element: &ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Only the text nodes that are direct children of `element`.
pub(crate) fn own_text(element: &ElementRef) -> String {
    let text: String = element
        .children()
        .filter_map(|node| node.value().as_text().map(|t| &**t))
        .collect();
    collapse_whitespace(&text)
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}

pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// The `attr` value of the first element matching `selector` inside `element`.
pub(crate) fn select_attr(element: &ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    element
        .select(selector)
        .filter_map(|e| e.value().attr(attr))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

/// Image source of the first matching element, normalized to an absolute URL.
pub(crate) fn select_img(element: &ElementRef, selector: &Selector) -> Option<String> {
    select_attr(element, selector, "src").map(|src| normalize_img_url(&src))
}

/// Normalize a potentially relative image URL to an absolute id-mpl.com URL.
pub(crate) fn normalize_img_url(src: &str) -> String {
    if src.starts_with("//") {
        format!("https:{src}")
    } else if src.starts_with('/') {
        format!("{BASE_URL}{src}")
    } else {
        src.to_string()
    }
}

/// Whether the inline `style` of `element` contains `declaration`, ignoring spaces.
pub(crate) fn has_inline_style(element: &ElementRef, declaration: &str) -> bool {
    let wanted = declaration
        .split_whitespace()
        .collect::<String>()
        .to_ascii_lowercase();
    element
        .value()
        .attr("style")
        .map(|style| {
            style
                .split_whitespace()
                .collect::<String>()
                .to_ascii_lowercase()
                .contains(&wanted)
        })
        .unwrap_or(false)
}

/// Whether the raw `class` attribute of `element` contains `needle`.
pub(crate) fn class_contains(element: &ElementRef, needle: &str) -> bool {
    element
        .value()
        .attr("class")
        .map(|c| c.contains(needle))
        .unwrap_or(false)
}

/// Parse a counter such as `"12,345"` or `"12.345"`. Anything unparsable is 0.
pub(crate) fn parse_count(text: &str) -> u64 {
    text.chars()
        .filter(|c| !matches!(c, ',' | '.') && !c.is_whitespace())
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

pub(crate) fn parse_u32(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

pub(crate) fn parse_i32(text: &str) -> i32 {
    text.trim().parse().unwrap_or(0)
}

/// Parse a decimal that may use a comma as separator. Anything unparsable is 0.0.
pub(crate) fn parse_f32(text: &str) -> f32 {
    text.trim().replace(',', ".").parse().unwrap_or(0.0)
}

/// Parse a percentage like `"55.50%"` into `55.5`. Anything unparsable is 0.0.
pub(crate) fn parse_pct(text: &str) -> f32 {
    parse_f32(text.trim().trim_end_matches('%'))
}
