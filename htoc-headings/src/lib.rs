//! # htoc-headings — heading trees and tables of contents for HTML blocks
//!
//! Turns flat, possibly malformed HTML into a hierarchical table of contents
//! derived from its `h1`-`h6` headings, and re-emits the HTML with navigable
//! anchors inserted before each heading. The TOC renders as nested
//! ordered/unordered lists whose entries link to those anchors.
//!
//! ## Quick Start
//!
//! ```rust
//! use htoc_headings::{ListStyle, TocOptions, TocProcessor, render_as_list};
//!
//! let processor = TocProcessor::new(TocOptions::default());
//! let result = processor.generate("<h1>Intro</h1><p>x</p><h2>Sub</h2>");
//!
//! assert_eq!(result.toc[0].text_only, "Intro");
//! assert!(result.html_with_anchors.starts_with("<a name=\"toc_0_0_0\"></a>"));
//!
//! let list = render_as_list(&result.toc, false, ListStyle::Ordered);
//! assert_eq!(list, "<ol><li>Intro<ol><li>Sub</li></ol></li></ol>");
//! ```
//!
//! ## Content contract
//!
//! - Headings between `<!-- [wptoc_notoc] -->` and `<!-- [/wptoc_notoc] -->`
//!   markers, or inside any HTML comment, are never extracted.
//! - `<!-- [wptoc_disable] -->` tells a [`ContentFilter`] to skip TOC
//!   generation for that document entirely (the marker is stripped from the
//!   output).
//! - Anchors are emitted as `<a name="..."></a>` immediately before each
//!   heading's literal text; anchor names and TOC link targets are derived
//!   from tree position by one shared function and are always identical for
//!   a given node.
//!
//! Input is treated as untrusted text throughout: headings are matched by
//! level-specific tag pairs and markup is stripped by pattern, never parsed
//! into a document object model. Anything malformed degrades to an empty
//! result rather than an error.

pub mod anchor;
pub mod extract;
pub mod filter;
pub mod linkify;
pub mod processor;
pub mod render;
pub mod sanitize;
pub mod types;
pub mod utils;

pub use crate::{
  anchor::inject_anchors,
  extract::extract,
  filter::ContentFilter,
  linkify::linkify,
  processor::{TocOptions, TocProcessor},
  render::render_as_list,
  types::{HeadingNode, ListStyle, TocResult},
};

/// Generate a table of contents for `html` with default options.
///
/// Convenience wrapper over [`TocProcessor::generate`].
///
/// ```rust
/// let result = htoc_headings::generate_toc("<h2>Only</h2>");
/// assert_eq!(result.toc.len(), 1);
/// ```
#[must_use]
pub fn generate_toc(html: &str) -> TocResult {
  TocProcessor::default().generate(html)
}
