//! Attaches a rendered hyperlink to every node in a heading forest.
//!
//! The link target is built from the same `(parent index, depth, child
//! index)` triple the anchor pass uses, via the same identifier function, so
//! for every node the injected anchor name and the link target are
//! byte-identical.
use crate::{types::HeadingNode, utils::anchor_name};

/// Walk `toc` and give each node a `link`: an anchor-reference tag whose
/// visible label and `title` attribute are the node's `text_only`.
///
/// Quotes (and other attribute-hostile characters) in the heading text are
/// escaped in the `title` attribute; the label is emitted as-is. Leaves
/// `original`, `text_only` and child ordering untouched.
#[must_use]
pub fn linkify(toc: Vec<HeadingNode>, prefix: &str) -> Vec<HeadingNode> {
  linkify_at(toc, 0, 0, prefix)
}

fn linkify_at(
  mut nodes: Vec<HeadingNode>,
  depth: usize,
  parent_index: usize,
  prefix: &str,
) -> Vec<HeadingNode> {
  for (child_index, node) in nodes.iter_mut().enumerate() {
    let name = anchor_name(prefix, parent_index, depth, child_index);
    let title =
      html_escape::encode_double_quoted_attribute(&node.text_only);
    node.link = Some(format!(
      "<a href=\"#{name}\" title=\"{title}\">{}</a>",
      node.text_only
    ));
    node.children = linkify_at(
      std::mem::take(&mut node.children),
      depth + 1,
      child_index,
      prefix,
    );
  }
  nodes
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Fine in tests")]
mod tests {
  use super::*;
  use crate::extract::extract;

  #[test]
  fn links_carry_label_and_title() {
    let toc = linkify(extract(1, "<h1>Intro</h1>"), "toc");
    assert_eq!(
      toc[0].link.as_deref(),
      Some("<a href=\"#toc_0_0_0\" title=\"Intro\">Intro</a>")
    );
  }

  #[test]
  fn quotes_in_heading_text_are_escaped_in_title() {
    let toc = linkify(extract(1, r#"<h1>The "Big" One</h1>"#), "toc");
    let link = toc[0].link.as_deref().unwrap();
    assert!(link.contains(r#"title="The &quot;Big&quot; One""#));
    assert!(link.ends_with(r#">The "Big" One</a>"#));
  }

  #[test]
  fn child_links_encode_parent_and_depth() {
    let toc =
      linkify(extract(1, "<h1>A</h1><h1>B</h1><h2>B1</h2>"), "toc");
    assert_eq!(
      toc[1].children[0].link.as_deref(),
      Some("<a href=\"#toc_1_1_0\" title=\"B1\">B1</a>")
    );
  }

  #[test]
  fn structure_is_left_untouched() {
    let plain = extract(1, "<h1>A</h1><h2>B</h2>");
    let linked = linkify(plain.clone(), "toc");
    assert_eq!(linked[0].original, plain[0].original);
    assert_eq!(linked[0].text_only, plain[0].text_only);
    assert_eq!(linked[0].children.len(), plain[0].children.len());
  }
}
