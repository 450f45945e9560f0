// ABOUTME: ContentResult struct describing the selected content root of a document.
// ABOUTME: Serializable for JSON output; ScoredNode lists the ranked score table.

use scraper::ElementRef;
use serde::{Deserialize, Serialize};

use crate::options::ContentType;

/// The extracted main content of one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentResult {
    /// Where the document came from (URL, path, or "-" for stdin), when known.
    pub source: Option<String>,
    pub content_type: ContentType,
    /// The content root rendered in `content_type`.
    pub content: String,
    /// Raw descendant text of the content root.
    pub text: String,
    pub tag: String,
    pub id: Option<String>,
    pub class: Option<String>,
    pub score: f64,
    pub word_count: usize,
}

impl ContentResult {
    /// A short "tag#id.class" label for logs and diagnostics.
    pub fn label(&self) -> String {
        format_label(&self.tag, self.id.as_deref(), self.class.as_deref())
    }
}

/// One row of a ranked score table dump.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredNode {
    pub label: String,
    pub depth: usize,
    pub score: f64,
}

fn format_label(tag: &str, id: Option<&str>, class: Option<&str>) -> String {
    let mut label = tag.to_string();
    if let Some(id) = id.filter(|id| !id.is_empty()) {
        label.push('#');
        label.push_str(id);
    }
    for c in class.unwrap_or("").split_whitespace() {
        label.push('.');
        label.push_str(c);
    }
    label
}

/// Label of an element in the same "tag#id.class" form.
pub fn element_label(element: &ElementRef) -> String {
    let el = element.value();
    format_label(el.name(), el.attr("id"), el.attr("class"))
}
