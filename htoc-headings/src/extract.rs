//! Recursive heading-tree extraction.
//!
//! Scans flat HTML text for heading tags of a given level and nests the
//! lower-level headings found between same-level siblings as children. No
//! DOM is built: a heading match is purely a level-specific tag pair, with
//! each opening tag paired to the nearest following closing tag of that
//! level. Matching is case-insensitive, attributes on the opening tag are
//! permitted and ignored, and heading content may span lines.
use std::sync::LazyLock;

use log::error;
use regex::Regex;

use crate::{
  sanitize::{mask_for_extraction, strip_comments},
  types::HeadingNode,
  utils::{never_matching_regex, strip_tags},
};

/// Deepest heading level scanned (`<h6>`).
pub const MAX_LEVEL: u8 = 6;

/// One pattern per heading level, `<h1>` through `<h6>`.
static HEADING_RES: LazyLock<[Regex; 6]> = LazyLock::new(|| {
  std::array::from_fn(|i| {
    let level = i + 1;
    Regex::new(&format!(r"(?is)<h{level}[^>]*>(.*?)</h{level}>"))
      .unwrap_or_else(|e| {
        error!("Failed to compile heading regex for level {level}: {e}");
        never_matching_regex()
      })
  })
});

/// Extract the heading forest from `html`, scanning for `level` first.
///
/// Comments and exclude regions are masked out up front (offset-preserving,
/// see [`mask_for_extraction`]), so headings inside either never match and
/// the recursion needs no per-level re-sanitization: every chunk it scans is
/// a slice of the already-masked text.
///
/// If `level` yields no matches the scan falls back one level at a time
/// (h1 to h2, h2 to h3, ...) until something matches or `<h6>` comes up
/// empty, so a document using only h3/h4 headings still produces a tree
/// when extraction starts at level 1. Empty input yields an empty forest.
#[must_use]
pub fn extract(level: u8, html: &str) -> Vec<HeadingNode> {
  if html.is_empty() || level == 0 || level > MAX_LEVEL {
    return Vec::new();
  }
  let masked = mask_for_extraction(html);
  extract_at(level, &masked, html, 0)
}

/// Scan one chunk for headings at `level`, recursing for children.
///
/// `masked` and `source` are the same byte range of the document, the former
/// with comments and excluded regions blanked out. `base` is the chunk's
/// absolute offset; recorded spans are always document-absolute.
fn extract_at(
  level: u8,
  masked: &str,
  source: &str,
  base: usize,
) -> Vec<HeadingNode> {
  let re = &HEADING_RES[usize::from(level) - 1];
  let matches: Vec<(usize, usize, usize, usize)> = re
    .captures_iter(masked)
    .filter_map(|caps| {
      let whole = caps.get(0)?;
      let inner = caps.get(1)?;
      Some((whole.start(), whole.end(), inner.start(), inner.end()))
    })
    .collect();

  if matches.is_empty() {
    // No headings at this level; look one level deeper. This happens one
    // level per step so e.g. h1 -> h2 -> h3 degradation is visited in order.
    if level < MAX_LEVEL {
      return extract_at(level + 1, masked, source, base);
    }
    return Vec::new();
  }

  let mut out = Vec::with_capacity(matches.len());
  for (i, &(start, end, inner_start, inner_end)) in matches.iter().enumerate()
  {
    // The chunk owned by this heading runs from the end of its closing tag
    // to the start of the next same-level sibling, or to the end of text.
    let chunk_end = matches.get(i + 1).map_or(masked.len(), |next| next.0);

    let children = if level < MAX_LEVEL {
      extract_at(
        level + 1,
        &masked[end..chunk_end],
        &source[end..chunk_end],
        base + end,
      )
    } else {
      Vec::new()
    };

    out.push(HeadingNode {
      original: source[start..end].to_string(),
      text_only: strip_tags(&strip_comments(&source[inner_start..inner_end])),
      start: base + start,
      end: base + end,
      children,
      link: None,
    });
  }
  out
}
