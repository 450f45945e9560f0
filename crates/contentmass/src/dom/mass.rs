// ABOUTME: Static knowledge base of mass tags and signed token weights.
// ABOUTME: Answers whether a node is structural chrome and how much a tag/class/id token weighs.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::node::Element;
use std::collections::{HashMap, HashSet};

/// Tag names and class tokens that denote repetitive structural content
/// (list items, table cells, breadcrumbs). These never earn local score.
static MASS_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "li",
        "i",
        "td",
        "tr",
        "th",
        "it",
        "breadcrumb",
        "bread",
        "crumb",
    ]
    .into_iter()
    .collect()
});

/// Signed weights for tag names and semantic tokens.
static WEIGHTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("p", 1.0),
        ("br", 0.01),
        ("img", 1.0),
        ("picture", 1.0),
        ("a", -2.0),
        ("video", 1.0),
        ("content", 3.0),
        ("article", 3.0),
        ("main", 2.0),
        (TEXT_TOKEN, 2.0),
        ("code", 3.0),
        ("pre", 3.0),
        ("comment", -5.0),
    ]
    .into_iter()
    .collect()
});

static CLASS_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]").unwrap());

/// Weight Table key awarded to every scored text run.
pub const TEXT_TOKEN: &str = "text";

/// Tag-name sentinel used for text nodes.
pub const TEXT_NODE_NAME: &str = "#text";

/// Split a class attribute into lower-cased tokens on hyphens and whitespace.
///
/// Empty tokens are yielded as-is; they never match either table.
pub fn class_tokens(class: &str) -> Vec<String> {
    let lower = class.to_lowercase();
    CLASS_SPLIT_RE.split(&lower).map(str::to_string).collect()
}

/// Whether a bare tag name is in the mass tag set.
pub fn is_mass_tag(name: &str) -> bool {
    MASS_TAGS.contains(name.to_lowercase().as_str())
}

/// Whether an element is structural chrome, by tag name or by any class token.
pub fn is_massive(element: &Element) -> bool {
    if is_mass_tag(element.name()) {
        return true;
    }

    let class = element.attr("class").unwrap_or("");
    class_tokens(class)
        .iter()
        .any(|token| MASS_TAGS.contains(token.as_str()))
}

/// Weight of a tag name, class token, or id value; 0.0 when unknown.
pub fn weight_of(token: &str) -> f64 {
    WEIGHTS
        .get(token.to_lowercase().as_str())
        .copied()
        .unwrap_or(0.0)
}
