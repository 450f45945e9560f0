// ABOUTME: Picks the content root from a finished score table.
// ABOUTME: Highest-scoring element wins; a zero maximum means no content was found.

use ego_tree::NodeId;
use scraper::{ElementRef, Html};

use super::scoring::ScoreTable;

/// Id of the highest-scoring element, or None when nothing scored above zero.
///
/// The running maximum starts at zero, so negative scores never win. Ties
/// keep the earliest entry; elements enter the table in document order, so
/// the outermost/first of several equal candidates wins.
pub fn select_content(table: &ScoreTable) -> Option<NodeId> {
    let mut best: Option<NodeId> = None;
    let mut top_score = 0.0f64;

    for (id, score) in table.iter().filter(|(_, s)| s.is_element) {
        if score.value > top_score {
            top_score = score.value;
            best = Some(id);
        }
    }

    best
}

/// Resolve the winning id back into an element of `doc`.
pub fn select_content_element<'a>(doc: &'a Html, table: &ScoreTable) -> Option<ElementRef<'a>> {
    let id = select_content(table)?;
    doc.tree.get(id).and_then(ElementRef::wrap)
}
