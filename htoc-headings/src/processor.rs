//! The TOC processor: configuration plus the generation pipeline.
//!
//! [`TocProcessor::generate`] composes the passes — sanitize, extract,
//! linkify, inject anchors — over one immutable input string. All passes are
//! pure; the processor holds configuration only and can be reused across
//! documents.
use crate::{
  anchor::inject_anchors,
  extract::{MAX_LEVEL, extract},
  linkify::linkify,
  render::render_as_list,
  types::{ListStyle, TocResult},
};

/// Options for configuring TOC generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
  /// Heading level the scan starts at (1-6). Levels with no matches fall
  /// back one level at a time, so the default of 1 finds the shallowest
  /// usable level of any document.
  pub start_level: u8,

  /// Prefix for generated anchor identifiers
  /// (`{prefix}_{parent}_{depth}_{index}`).
  pub anchor_prefix: String,
}

impl TocOptions {
  /// Set the heading level extraction starts at. Values outside 1-6 are
  /// clamped.
  #[must_use]
  pub fn start_level(mut self, level: u8) -> Self {
    self.start_level = level.clamp(1, MAX_LEVEL);
    self
  }

  /// Set the anchor identifier prefix.
  #[must_use]
  pub fn anchor_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
    self.anchor_prefix = prefix.into();
    self
  }
}

impl Default for TocOptions {
  fn default() -> Self {
    Self {
      start_level:   1,
      anchor_prefix: "toc".to_string(),
    }
  }
}

/// Table-of-contents generator for blocks of HTML.
#[derive(Debug, Clone, Default)]
pub struct TocProcessor {
  options: TocOptions,
}

impl TocProcessor {
  /// Create a processor with the given options.
  #[must_use]
  pub const fn new(options: TocOptions) -> Self {
    Self { options }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &TocOptions {
    &self.options
  }

  /// Generate a table of contents for `html`.
  ///
  /// Returns the linkified heading forest, the input unchanged, and the
  /// input with a named anchor inserted immediately before each heading.
  /// Malformed or absent headings yield an empty forest, never an error.
  #[must_use]
  pub fn generate(&self, html: &str) -> TocResult {
    let toc = extract(self.options.start_level, html);
    let toc = linkify(toc, &self.options.anchor_prefix);
    let html_with_anchors =
      inject_anchors(html, &toc, &self.options.anchor_prefix);

    TocResult {
      toc,
      html: html.to_string(),
      html_with_anchors,
    }
  }

  /// Generate and render in one step: the TOC for `html` as a nested list.
  #[must_use]
  pub fn toc_as_list(
    &self,
    html: &str,
    use_links: bool,
    style: ListStyle,
  ) -> String {
    render_as_list(&self.generate(html).toc, use_links, style)
  }
}
