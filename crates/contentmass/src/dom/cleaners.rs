// ABOUTME: Pre-scoring cleaner that drops non-content subtrees from a parsed document.
// ABOUTME: Removes scripts, styles, frames, head and page chrome (header/footer/nav) before scoring.

use ego_tree::NodeId;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// Tags whose whole subtree never carries article content.
pub const NON_CONTENT_TAGS: &[&str] = &[
    "script", "noscript", "style", "iframe", "footer", "foot", "head", "header", "nav",
];

static NON_CONTENT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(&NON_CONTENT_TAGS.join(",")).unwrap());

/// Detach every non-content subtree from the document tree.
///
/// Detached nodes stay in the arena but are unreachable from the root, so any
/// walk that starts at `doc.tree.root()` never sees them. Returns the number of
/// subtrees removed.
pub fn clean(doc: &mut Html) -> usize {
    let ids: Vec<NodeId> = doc.select(&NON_CONTENT_SELECTOR).map(|el| el.id()).collect();

    let root = doc.tree.root().id();
    let mut removed = 0;
    for id in ids {
        // Nested matches already left the tree with their ancestor.
        let attached = doc
            .tree
            .get(id)
            .is_some_and(|node| node.ancestors().any(|a| a.id() == root));
        if !attached {
            continue;
        }
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
            removed += 1;
        }
    }

    log::debug!("cleaner detached {} non-content subtrees", removed);
    removed
}
