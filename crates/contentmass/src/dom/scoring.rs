// ABOUTME: Mass scoring pass that assigns every node a weighted score and propagates it upward.
// ABOUTME: Scores tags, class/id tokens, text runs and large images; feeds parents and grandparents.

use ego_tree::{NodeId, NodeRef};
use scraper::node::Element;
use scraper::{ElementRef, Html, Node};
use std::collections::HashMap;

use super::mass::{class_tokens, is_mass_tag, is_massive, weight_of, TEXT_NODE_NAME, TEXT_TOKEN};
use crate::options::ScoringConfig;

/// Accumulated score of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub value: f64,
    /// Only element entries are candidates for the content root.
    pub is_element: bool,
}

/// Node-identity keyed scores for a single scoring pass.
///
/// Keys are `NodeId`s, so structurally identical subtrees never share an
/// entry. Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    entries: Vec<(NodeId, Score)>,
    index: HashMap<NodeId, usize>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score of `node`, created at zero on first access.
    pub fn entry(&mut self, node: NodeRef<'_, Node>) -> &mut f64 {
        let id = node.id();
        let pos = match self.index.get(&id) {
            Some(&pos) => pos,
            None => {
                self.entries.push((
                    id,
                    Score {
                        value: 0.0,
                        is_element: node.value().is_element(),
                    },
                ));
                self.index.insert(id, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].1.value
    }

    pub fn get(&self, id: NodeId) -> Option<f64> {
        self.index.get(&id).map(|&pos| self.entries[pos].1.value)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Score)> + '_ {
        self.entries.iter().copied()
    }
}

/// Score of a text run: the text node's tag weight, the base text weight,
/// one point per full bucket, plus one so that even short runs count.
pub fn text_score(text: &str, config: &ScoringConfig) -> f64 {
    let chars = text.chars().count();
    let buckets = chars / config.text_bucket.max(1);
    weight_of(TEXT_NODE_NAME) + weight_of(TEXT_TOKEN) + buckets as f64 + 1.0
}

/// Digits of a dimension attribute ("120px" -> 120). None when nothing parses.
fn parse_dimension(raw: Option<&str>) -> Option<u64> {
    let digits: String = raw?.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Bonus for an image whose width and/or height exceed the threshold.
pub fn image_bonus(element: &Element, config: &ScoringConfig) -> f64 {
    ["width", "height"]
        .iter()
        .filter_map(|attr| parse_dimension(element.attr(attr)))
        .filter(|&px| px > config.image_min_dimension)
        .map(|_| config.image_bonus)
        .sum()
}

/// Weights carried by the element's class tokens, id and tag name.
fn attribute_weight(element: &Element) -> f64 {
    let class_weight: f64 = class_tokens(element.attr("class").unwrap_or(""))
        .iter()
        .map(|token| weight_of(token))
        .sum();

    class_weight + weight_of(element.attr("id").unwrap_or("")) + weight_of(element.name())
}

/// Add decayed shares of `amount` to the parent and grandparent of `node`.
fn propagate(node: NodeRef<'_, Node>, amount: f64, config: &ScoringConfig, table: &mut ScoreTable) {
    if let Some(parent) = node.parent() {
        *table.entry(parent) += amount * config.parent_factor;
        if let Some(grandparent) = parent.parent() {
            *table.entry(grandparent) += amount * config.grandparent_factor;
        }
    }
}

/// Score one element and push its share upward. Runs atomically per element.
fn score_element(element: ElementRef<'_>, config: &ScoringConfig, table: &mut ScoreTable) {
    let node = *element;
    let el = element.value();
    table.entry(node);

    if is_massive(el) {
        log::trace!("skip massive <{}> {:?}", el.name(), element.id());
        return;
    }

    *table.entry(node) += attribute_weight(el);

    for child in node.children() {
        if let Node::Text(text) = child.value() {
            if config.skip_blank_text && text.trim().is_empty() {
                continue;
            }
            let score = text_score(text, config);
            *table.entry(child) += score;
            propagate(child, score, config, table);
        }
    }

    if !node.has_children() && el.name() == "img" {
        *table.entry(node) += image_bonus(el, config);
    }

    let own = table.get(node.id()).unwrap_or(0.0);
    log::trace!("<{}> {:?} scored {}", el.name(), element.id(), own);

    if !is_mass_tag(el.name()) {
        propagate(node, own, config, table);
    }
}

/// Score every element reachable from the document root, in document order.
pub fn score_tree(doc: &Html, config: &ScoringConfig) -> ScoreTable {
    let mut table = ScoreTable::new();
    for node in doc.tree.root().descendants() {
        if let Some(element) = ElementRef::wrap(node) {
            score_element(element, config, &mut table);
        }
    }
    log::debug!("scored {} nodes", table.len());
    table
}
