// ABOUTME: Configuration options for content extraction including ContentType, ScoringConfig, and Options.
// ABOUTME: ExtractorBuilder provides a fluent API for constructing Extractor instances with custom settings.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::extractor::Extractor;

/// The output format for extracted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Html,
    Markdown,
    Text,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContentType::Html => "html",
            ContentType::Markdown => "markdown",
            ContentType::Text => "text",
        };
        write!(f, "{}", s)
    }
}

impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => ContentType::Markdown,
            "text" | "txt" => ContentType::Text,
            _ => ContentType::Html,
        }
    }
}

/// Tunable constants of the mass scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Share of a node's score added to its parent.
    pub parent_factor: f64,
    /// Share of a node's score added to its grandparent.
    pub grandparent_factor: f64,
    /// Bonus per image dimension above `image_min_dimension`.
    pub image_bonus: f64,
    /// Pixel threshold an image dimension must exceed to earn the bonus.
    pub image_min_dimension: u64,
    /// Characters per text length bucket.
    pub text_bucket: usize,
    /// Leave whitespace-only text nodes unscored. Off by default.
    pub skip_blank_text: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            parent_factor: 1.4,
            grandparent_factor: 0.7,
            image_bonus: 3.0,
            image_min_dimension: 50,
            text_bucket: 50,
            skip_blank_text: false,
        }
    }
}

impl ScoringConfig {
    /// Parse a (possibly partial) JSON document; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        serde_json::from_str(json)
            .map_err(|e| ExtractError::config("<inline>", "parse config", Some(e.into())))
    }

    /// Load a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ExtractError> {
        let target = path.display().to_string();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ExtractError::config(&target, "read config", Some(e.into())))?;
        serde_json::from_str(&raw)
            .map_err(|e| ExtractError::config(&target, "parse config", Some(e.into())))
    }
}

/// Configuration options for the extractor.
#[derive(Debug, Clone)]
pub struct Options {
    pub content_type: ContentType,
    pub scoring: ScoringConfig,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            content_type: ContentType::Html,
            scoring: ScoringConfig::default(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("contentmass/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Builder for constructing Extractor instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ExtractorBuilder {
    opts: Options,
}

impl ExtractorBuilder {
    /// Create a new ExtractorBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the output format.
    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.opts.content_type = content_type;
        self
    }

    /// Replace the scoring constants.
    pub fn scoring(mut self, scoring: ScoringConfig) -> Self {
        self.opts.scoring = scoring;
        self
    }

    /// Set the fetch timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header used when fetching.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Build the Extractor with the configured options.
    pub fn build(self) -> Extractor {
        Extractor::new(self.opts)
    }
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
