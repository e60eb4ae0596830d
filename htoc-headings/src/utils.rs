//! Small shared helpers: tag stripping and anchor identifier construction.
use std::sync::LazyLock;

use log::error;
use regex::Regex;

/// Matches any single markup tag, `<` through the next `>`.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"<[^>]*>").unwrap_or_else(|e| {
    error!("Failed to compile TAG_RE regex: {e}");
    never_matching_regex()
  })
});

/// Create a regex that never matches anything.
///
/// Used as a fallback pattern when a regex fails to compile. It will never
/// match any input, which is safer than a trivial pattern like `^$` that
/// would match empty strings.
pub fn never_matching_regex() -> Regex {
  #[allow(
    clippy::expect_used,
    reason = "this pattern is guaranteed to be valid"
  )]
  Regex::new(r"[^\s\S]").expect("regex pattern [^\\s\\S] should always compile")
}

/// Remove every markup tag (`<...>` span) from `text`.
///
/// This is deliberately simple pattern removal, not structural parsing: the
/// narrow contract is "remove `<...>` spans" and nothing more.
#[must_use]
pub fn strip_tags(text: &str) -> String {
  TAG_RE.replace_all(text, "").into_owned()
}

/// Build the positional anchor identifier for a node.
///
/// The identifier is fully determined by tree position: the parent's sibling
/// index, the nesting depth and the node's own sibling index. Both the
/// anchor-injection and linkification passes call this same function, which
/// is what guarantees the injected anchor name and the link target are
/// byte-identical for any given node.
#[must_use]
pub fn anchor_name(
  prefix: &str,
  parent_index: usize,
  depth: usize,
  child_index: usize,
) -> String {
  format!("{prefix}_{parent_index}_{depth}_{child_index}")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_nested_markup() {
    assert_eq!(strip_tags("<em>Hello</em> <b>World</b>"), "Hello World");
    assert_eq!(strip_tags("plain"), "plain");
    assert_eq!(strip_tags(""), "");
  }

  #[test]
  fn anchor_name_encodes_position() {
    assert_eq!(anchor_name("toc", 0, 0, 0), "toc_0_0_0");
    assert_eq!(anchor_name("toc", 2, 1, 3), "toc_2_1_3");
  }

  #[test]
  fn never_matching_regex_matches_nothing() {
    let re = never_matching_regex();
    assert!(!re.is_match(""));
    assert!(!re.is_match("anything at all"));
  }
}
