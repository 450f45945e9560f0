// ABOUTME: Extractor runs the clean -> score -> select pipeline over parsed documents.
// ABOUTME: Exposes get_content / get_content_element plus a rendered, serializable extract().

use scraper::{ElementRef, Html};

use crate::dom::cleaners::clean;
use crate::dom::scoring::{score_tree, ScoreTable};
use crate::dom::select::select_content_element;
use crate::error::ExtractError;
use crate::formats::{render, whole_text, word_count};
use crate::options::{ExtractorBuilder, Options};
use crate::resource;
use crate::result::{element_label, ContentResult, ScoredNode};

/// Finds the main content of HTML documents.
///
/// An `Extractor` holds configuration only. Every call builds its own
/// `ScoreTable`, so one extractor can serve many documents and threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    opts: Options,
}

impl Extractor {
    /// Create a new ExtractorBuilder.
    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::new()
    }

    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Clean the document in place and score what remains.
    pub fn score(&self, doc: &mut Html) -> ScoreTable {
        clean(doc);
        score_tree(doc, &self.opts.scoring)
    }

    /// The content root of `doc`, or None when nothing scored above zero.
    ///
    /// The document is cleaned in place first.
    pub fn get_content_element<'a>(&self, doc: &'a mut Html) -> Option<ElementRef<'a>> {
        let table = self.score(doc);
        let doc: &'a Html = doc;
        let element = select_content_element(doc, &table);
        match element {
            Some(ref el) => log::debug!(
                "content root {} scored {}",
                element_label(el),
                table.get(el.id()).unwrap_or(0.0)
            ),
            None => log::debug!("no content found"),
        }
        element
    }

    /// Full descendant text of the content root.
    pub fn get_content(&self, doc: &mut Html) -> Option<String> {
        self.get_content_element(doc).map(|el| whole_text(&el))
    }

    /// Parse `html`, select its content root and render it in the configured format.
    pub fn extract(&self, html: &str) -> Option<ContentResult> {
        let mut doc = Html::parse_document(html);
        let table = self.score(&mut doc);
        let element = match select_content_element(&doc, &table) {
            Some(el) => el,
            None => {
                log::debug!("no content found");
                return None;
            }
        };

        let text = whole_text(&element);
        let el = element.value();
        let result = ContentResult {
            source: None,
            content_type: self.opts.content_type,
            content: render(&element, self.opts.content_type),
            word_count: word_count(&text),
            text,
            tag: el.name().to_string(),
            id: el.attr("id").map(str::to_string),
            class: el.attr("class").map(str::to_string),
            score: table.get(element.id()).unwrap_or(0.0),
        };
        log::debug!("content root {} scored {}", result.label(), result.score);
        Some(result)
    }

    /// Load `target` (path, "-" for stdin, or http(s) URL) and extract it.
    ///
    /// Load failures are errors; a document without content is `Ok(None)`.
    pub fn extract_target(&self, target: &str) -> Result<Option<ContentResult>, ExtractError> {
        let res = resource::load(target, &self.opts)?;
        log::info!("loaded {} ({} bytes)", res.source, res.body.len());
        Ok(self.extract(&res.text()).map(|mut result| {
            result.source = Some(res.source.clone());
            result
        }))
    }

    /// Every scored element, highest first. Equal scores keep document order.
    pub fn score_details(&self, doc: &mut Html) -> Vec<ScoredNode> {
        let table = self.score(doc);
        let mut rows: Vec<ScoredNode> = table
            .iter()
            .filter(|(_, score)| score.is_element)
            .filter_map(|(id, score)| {
                let element = doc.tree.get(id).and_then(ElementRef::wrap)?;
                Some(ScoredNode {
                    label: element_label(&element),
                    depth: element.ancestors().count(),
                    score: score.value,
                })
            })
            .collect();
        rows.sort_by(|a, b| b.score.total_cmp(&a.score));
        rows
    }
}

/// Main content text of `html` using default options.
pub fn get_content(html: &str) -> Option<String> {
    let mut doc = Html::parse_document(html);
    Extractor::default().get_content(&mut doc)
}

/// Content root of `doc` using default options. Cleans `doc` in place.
pub fn get_content_element(doc: &mut Html) -> Option<ElementRef<'_>> {
    Extractor::default().get_content_element(doc)
}
