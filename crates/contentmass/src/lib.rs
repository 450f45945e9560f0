// ABOUTME: Main library entry point for the contentmass main-content extractor.
// ABOUTME: Re-exports the public API: Extractor, ExtractorBuilder, ContentResult, ExtractError, Options.

//! contentmass - locate the main content region of an HTML document.
//!
//! Every element of a cleaned document gets a "mass" score from its tag, its
//! class/id tokens, its text runs and image sizes. A decayed share of each
//! score flows to the parent and grandparent, and the highest-scoring element
//! is the content root.
//!
//! # Example
//!
//! ```
//! use contentmass::get_content;
//!
//! let html = r#"<html><body>
//!     <nav><a href="/">Home</a></nav>
//!     <div class="content"><p>The article body lives here, long enough to matter.</p></div>
//! </body></html>"#;
//!
//! let text = get_content(html).unwrap();
//! assert!(text.contains("article body"));
//! ```

pub mod dom;
pub mod error;
pub mod extractor;
pub mod formats;
pub mod options;
pub mod resource;
pub mod result;

pub use crate::dom::scoring::{score_tree, ScoreTable};
pub use crate::dom::select::select_content;
pub use crate::error::{ErrorCode, ExtractError};
pub use crate::extractor::{get_content, get_content_element, Extractor};
pub use crate::options::{ContentType, ExtractorBuilder, Options, ScoringConfig};
pub use crate::result::{ContentResult, ScoredNode};
