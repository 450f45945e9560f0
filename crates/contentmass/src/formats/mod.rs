// ABOUTME: Output format converters for the selected content root.
// ABOUTME: Handles conversion to HTML, Markdown, and plain text formats.

//! Output format conversion module.
//!
//! The winning element is serialized as outer HTML, then optionally converted
//! to Markdown (via `htmd`) or plain text.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

use crate::options::ContentType;

static BR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?\s*>").unwrap());
static BLANK_LINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static NEWLINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());
static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());

/// Preprocess HTML before conversion: replace <br> tags with newlines.
fn preprocess_br_tags(html: &str) -> String {
    BR_RE.replace_all(html, "\n").to_string()
}

/// Convert HTML to Markdown using htmd.
///
/// Skips script and style tags and collapses runs of blank lines to one blank
/// line. On conversion error, returns the input unchanged.
pub fn html_to_markdown(html: &str) -> String {
    let preprocessed = preprocess_br_tags(html);

    let converter = htmd::HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style", "noscript"])
        .build();

    let md = converter
        .convert(&preprocessed)
        .unwrap_or_else(|_| preprocessed.clone());

    BLANK_LINES_RE.replace_all(&md, "\n\n").to_string()
}

/// Convert HTML to plain text by extracting text nodes.
///
/// Treats <br> as newline, collapses horizontal whitespace and blank lines,
/// and trims the result.
pub fn html_to_text(html: &str) -> String {
    let preprocessed = preprocess_br_tags(html);

    let fragment = Html::parse_fragment(&preprocessed);
    let raw_text: String = fragment.root_element().text().collect::<Vec<_>>().join(" ");

    let normalized = SPACES_RE.replace_all(&raw_text, " ");
    let collapsed = NEWLINES_RE.replace_all(&normalized, "\n");

    collapsed
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Concatenation of every descendant text node, untouched.
pub fn whole_text(element: &ElementRef) -> String {
    element.text().collect()
}

/// Number of whitespace-separated words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Render an element in the requested format.
pub fn render(element: &ElementRef, content_type: ContentType) -> String {
    let html = element.html();
    match content_type {
        ContentType::Html => html,
        ContentType::Markdown => html_to_markdown(&html),
        ContentType::Text => html_to_text(&html),
    }
}
