// ABOUTME: DOM-level pieces of the content extraction pipeline.
// ABOUTME: Cleaner, mass classifier, scoring pass and content root selection over scraper's tree.

//! DOM utilities for locating the main content of a document.
//!
//! The pipeline runs [`cleaners::clean`], then [`scoring::score_tree`], then
//! [`select::select_content`]. Nodes are addressed by `ego_tree::NodeId`.

pub mod cleaners;
pub mod mass;
pub mod scoring;
pub mod select;
