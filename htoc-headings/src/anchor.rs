//! Named-anchor injection in front of extracted headings.
//!
//! Walks the heading forest in the same order used at extraction time and
//! inserts a positional named anchor immediately before each heading's
//! occurrence in the HTML. Because every node carries the byte span it was
//! extracted from, insertion happens at known offsets rather than by
//! re-searching heading text, so repeated identical headings each get their
//! own anchor.
use log::debug;

use crate::{types::HeadingNode, utils::anchor_name};

/// Return `html` with `<a name="..."></a>` inserted before every heading in
/// `toc`.
///
/// Anchor identifiers encode the node's tree position, so the linkification
/// pass reproduces them without re-parsing. `html` is expected to be the
/// text the forest was extracted from; a node whose span does not fit the
/// given text is skipped (with a debug log) rather than treated as an
/// error.
#[must_use]
pub fn inject_anchors(
  html: &str,
  toc: &[HeadingNode],
  prefix: &str,
) -> String {
  let mut insertions = Vec::new();
  collect_insertions(toc, 0, 0, prefix, &mut insertions);

  // Insert back-to-front so earlier offsets stay valid.
  insertions.sort_by(|a, b| b.0.cmp(&a.0));

  let mut out = html.to_string();
  for (offset, name) in insertions {
    if offset > html.len() || !html.is_char_boundary(offset) {
      debug!("anchor {name} skipped: offset {offset} not in annotated html");
      continue;
    }
    out.insert_str(offset, &format!("<a name=\"{name}\"></a>"));
  }
  out
}

/// Gather `(offset, anchor name)` pairs in extraction order.
fn collect_insertions(
  nodes: &[HeadingNode],
  depth: usize,
  parent_index: usize,
  prefix: &str,
  out: &mut Vec<(usize, String)>,
) {
  for (child_index, node) in nodes.iter().enumerate() {
    out.push((
      node.start,
      anchor_name(prefix, parent_index, depth, child_index),
    ));
    collect_insertions(&node.children, depth + 1, child_index, prefix, out);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::extract::extract;

  #[test]
  fn anchors_land_directly_before_each_heading() {
    let html = "<h1>Intro</h1><p>x</p><h2>Sub</h2>";
    let toc = extract(1, html);
    let annotated = inject_anchors(html, &toc, "toc");
    assert_eq!(
      annotated,
      "<a name=\"toc_0_0_0\"></a><h1>Intro</h1><p>x</p><a \
       name=\"toc_0_1_0\"></a><h2>Sub</h2>"
    );
  }

  #[test]
  fn duplicate_headings_each_get_an_anchor() {
    let html = "<h1>Same</h1><h1>Same</h1>";
    let toc = extract(1, html);
    let annotated = inject_anchors(html, &toc, "toc");
    assert!(annotated.contains("<a name=\"toc_0_0_0\"></a><h1>Same</h1>"));
    assert!(annotated.contains("<a name=\"toc_0_0_1\"></a><h1>Same</h1>"));
  }

  #[test]
  fn out_of_range_span_is_skipped() {
    let toc = extract(1, "<p>some leading content here</p><h1>Late</h1>");
    let annotated = inject_anchors("<p>short</p>", &toc, "toc");
    assert_eq!(annotated, "<p>short</p>");
  }

  #[test]
  fn empty_forest_returns_html_unchanged() {
    assert_eq!(inject_anchors("<p>x</p>", &[], "toc"), "<p>x</p>");
  }
}
