//! Types for the htoc-headings public API.
use serde::{Deserialize, Serialize};

/// One recognized heading occurrence in a block of HTML.
///
/// A node spans the heading's opening tag through its matching closing tag,
/// inclusive, and owns every lower-level heading that falls between it and
/// the next same-level heading (or the end of the scanned text).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadingNode {
  /// The exact literal substring of the source HTML for this heading,
  /// opening tag through closing tag inclusive.
  pub original: String,

  /// `original` with comments removed and all markup tags stripped, i.e.
  /// the human-readable heading text.
  pub text_only: String,

  /// Byte offset of `original` within the scanned HTML (start of the
  /// opening tag).
  pub start: usize,

  /// Byte offset one past the end of the closing tag within the scanned
  /// HTML.
  pub end: usize,

  /// Nested lower-level headings located strictly between this heading and
  /// its next same-level sibling.
  pub children: Vec<HeadingNode>,

  /// Rendered hyperlink targeting this node's anchor. Present only after
  /// linkification.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub link: Option<String>,
}

/// Result of TOC generation over a block of HTML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TocResult {
  /// Extracted (and linkified) heading forest.
  pub toc: Vec<HeadingNode>,

  /// The input HTML, unchanged.
  pub html: String,

  /// The input HTML with a named anchor inserted immediately before each
  /// heading in `toc`.
  pub html_with_anchors: String,
}

/// Which list element wraps a rendered table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
  /// `<ol>` wrapping.
  Ordered,
  /// `<ul>` wrapping.
  Unordered,
}

impl ListStyle {
  /// Tag name for this list style, without angle brackets.
  #[must_use]
  pub const fn tag(self) -> &'static str {
    match self {
      Self::Ordered => "ol",
      Self::Unordered => "ul",
    }
  }
}
