//! Comment and exclude-region removal applied before any heading scan.
//!
//! Content between `<!-- [wptoc_notoc] -->` and `<!-- [/wptoc_notoc] -->`
//! markers (inclusive of both) is excluded from extraction, as is anything
//! inside an ordinary HTML comment. Exclude regions are handled first: the
//! markers are themselves comments, so general comment removal would
//! otherwise destroy them before they can delimit a region.
//!
//! Two forms are provided. The deleting form removes matched spans outright
//! and suits plain text cleanup. The masking form overwrites matched spans
//! with an equal number of spaces so every byte offset in the result still
//! indexes the caller's original HTML; extraction runs on masked text and
//! the spans it records stay valid for anchor insertion.
use std::sync::LazyLock;

use log::error;
use regex::Regex;

use crate::utils::never_matching_regex;

/// Matches an HTML comment block, non-greedy, possibly spanning lines.
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?is)<!--.*?-->").unwrap_or_else(|e| {
    error!("Failed to compile COMMENT_RE regex: {e}");
    never_matching_regex()
  })
});

/// Matches an exclude region, opening marker through closing marker
/// inclusive. Whitespace around the bracketed names is tolerated.
static NOTOC_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"(?is)<!--\s*\[wptoc_notoc\]\s*-->.*?<!--\s*\[/wptoc_notoc\]\s*-->",
  )
  .unwrap_or_else(|e| {
    error!("Failed to compile NOTOC_RE regex: {e}");
    never_matching_regex()
  })
});

/// Remove every HTML comment block from `text`.
#[must_use]
pub fn strip_comments(text: &str) -> String {
  COMMENT_RE.replace_all(text, "").into_owned()
}

/// Remove every exclude region (markers included) from `text`.
///
/// An opening marker with no matching closing marker is left in place; it
/// will be dropped by ordinary comment removal instead.
#[must_use]
pub fn strip_excluded_regions(text: &str) -> String {
  NOTOC_RE.replace_all(text, "").into_owned()
}

/// Blank out exclude regions and comments while preserving text length.
///
/// Every matched span is overwritten with spaces, so headings hidden inside
/// comments or excluded regions can never match while all surviving byte
/// offsets still point into the original HTML. Exclude regions are masked
/// before comments for the marker-survival reason noted above.
#[must_use]
pub fn mask_for_extraction(html: &str) -> String {
  let masked = mask_matches(html, &NOTOC_RE);
  mask_matches(&masked, &COMMENT_RE)
}

/// Replace each match of `re` in `text` with an equal-length run of spaces.
fn mask_matches(text: &str, re: &Regex) -> String {
  let mut out = String::with_capacity(text.len());
  let mut last = 0;
  for m in re.find_iter(text) {
    out.push_str(&text[last..m.start()]);
    out.push_str(&" ".repeat(m.len()));
    last = m.end();
  }
  out.push_str(&text[last..]);
  out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Fine in tests")]
mod tests {
  use super::*;

  #[test]
  fn strips_multiline_comments() {
    let html = "a<!-- one\ntwo -->b<!--three-->c";
    assert_eq!(strip_comments(html), "abc");
  }

  #[test]
  fn strips_exclude_region_inclusive_of_markers() {
    let html = "keep<!-- [wptoc_notoc] --><h1>hidden</h1><!-- [/wptoc_notoc] -->tail";
    assert_eq!(strip_excluded_regions(html), "keeptail");
  }

  #[test]
  fn tolerates_whitespace_around_markers() {
    let html = "a<!--[wptoc_notoc]-->x<!--   [/wptoc_notoc]   -->b";
    assert_eq!(strip_excluded_regions(html), "ab");
  }

  #[test]
  fn unclosed_region_falls_back_to_comment_removal() {
    let html = "a<!-- [wptoc_notoc] -->b";
    assert_eq!(strip_excluded_regions(html), html);
    assert_eq!(strip_comments(&strip_excluded_regions(html)), "ab");
  }

  #[test]
  fn masking_preserves_length_and_offsets() {
    let html = "x<!-- [wptoc_notoc] --><h2>no</h2><!-- [/wptoc_notoc] --><h2>yes</h2>";
    let masked = mask_for_extraction(html);
    assert_eq!(masked.len(), html.len());
    let at = masked.find("<h2>yes</h2>").unwrap();
    assert_eq!(&html[at..at + 12], "<h2>yes</h2>");
    assert!(!masked.contains("no"));
  }

  #[test]
  fn no_markers_is_a_no_op() {
    let html = "<p>nothing to do</p>";
    assert_eq!(strip_excluded_regions(html), html);
    assert_eq!(mask_for_extraction(html), html);
  }
}
