//! Host-facing content filter.
//!
//! A [`ContentFilter`] stands where a host's content-rendering pipeline
//! would hook in: feed each document through [`ContentFilter::filter`] and
//! the filter returns the annotated HTML while keeping that document's TOC
//! for the rest of the render cycle, so later template code can ask for the
//! rendered list or whether a TOC exists at all.
//!
//! The per-cycle TOC is an explicit field of this value rather than a
//! process-wide slot; a host that insists on implicit globals can hold a
//! `ContentFilter` in whatever cell its framework provides. Each `filter`
//! call overwrites the stored TOC (last call wins within a cycle).
use std::sync::LazyLock;

use log::error;
use regex::Regex;

use crate::{
  processor::TocProcessor,
  render::render_as_list,
  types::{HeadingNode, ListStyle},
  utils::never_matching_regex,
};

/// Matches the per-document disable marker. Whitespace around the brackets
/// is tolerated.
static DISABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?is)<!--\s*\[wptoc_disable\]\s*-->").unwrap_or_else(|e| {
    error!("Failed to compile DISABLE_RE regex: {e}");
    never_matching_regex()
  })
});

/// Content filter holding the enable toggle and the current cycle's TOC.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
  processor: TocProcessor,
  detached:  bool,
  current:   Option<Vec<HeadingNode>>,
}

impl ContentFilter {
  /// Create an attached filter around the given processor.
  #[must_use]
  pub const fn new(processor: TocProcessor) -> Self {
    Self {
      processor,
      detached: false,
      current: None,
    }
  }

  /// Process one document's content.
  ///
  /// Detached filters pass content through untouched. If the content
  /// carries a `<!-- [wptoc_disable] -->` marker, every marker occurrence
  /// is removed, no TOC is computed and any previously stored TOC is
  /// cleared — [`Self::has_toc`] reports `false` for the rest of the cycle.
  /// Otherwise the TOC is generated and stored, and the content is returned
  /// with anchors injected.
  pub fn filter(&mut self, content: &str) -> String {
    if self.detached {
      return content.to_string();
    }

    if DISABLE_RE.is_match(content) {
      self.current = None;
      return DISABLE_RE.replace_all(content, "").into_owned();
    }

    let result = self.processor.generate(content);
    self.current = Some(result.toc);
    result.html_with_anchors
  }

  /// Whether a TOC is currently stored for this cycle.
  #[must_use]
  pub const fn has_toc(&self) -> bool {
    self.current.is_some()
  }

  /// The stored heading forest, if any.
  #[must_use]
  pub fn toc(&self) -> Option<&[HeadingNode]> {
    self.current.as_deref()
  }

  /// Render the stored TOC as an ordered list, or an empty string when no
  /// TOC is stored.
  #[must_use]
  pub fn toc_as_olist(&self, use_links: bool) -> String {
    self.toc_as_list(use_links, ListStyle::Ordered)
  }

  /// Render the stored TOC as an unordered list, or an empty string when no
  /// TOC is stored.
  #[must_use]
  pub fn toc_as_ulist(&self, use_links: bool) -> String {
    self.toc_as_list(use_links, ListStyle::Unordered)
  }

  /// Render the stored TOC with the given list style.
  #[must_use]
  pub fn toc_as_list(&self, use_links: bool, style: ListStyle) -> String {
    self
      .current
      .as_deref()
      .map_or_else(String::new, |toc| render_as_list(toc, use_links, style))
  }

  /// Re-attach the filter to the content pipeline.
  pub fn attach(&mut self) {
    self.detached = false;
  }

  /// Detach the filter: subsequent [`Self::filter`] calls pass content
  /// through unchanged and leave the stored TOC alone.
  pub fn detach(&mut self) {
    self.detached = true;
  }

  /// Whether the filter is currently attached.
  #[must_use]
  pub const fn is_attached(&self) -> bool {
    !self.detached
  }
}
