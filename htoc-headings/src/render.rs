//! Renders a heading forest as a nested ordered or unordered list.
use crate::types::{HeadingNode, ListStyle};

/// Render `toc` as nested `<ol>`/`<ul>` markup.
///
/// Each node becomes an `<li>` holding its link (when `use_links` is set and
/// the node has been linkified, otherwise its plain text) followed by the
/// rendering of its children. An empty forest renders as an empty string.
/// Ordered and unordered output differ only in the wrapping tag.
#[must_use]
pub fn render_as_list(
  toc: &[HeadingNode],
  use_links: bool,
  style: ListStyle,
) -> String {
  if toc.is_empty() {
    return String::new();
  }

  let tag = style.tag();
  let mut out = format!("<{tag}>");
  for node in toc {
    out.push_str("<li>");
    let label = if use_links {
      node.link.as_deref().unwrap_or(&node.text_only)
    } else {
      &node.text_only
    };
    out.push_str(label);
    out.push_str(&render_as_list(&node.children, use_links, style));
    out.push_str("</li>");
  }
  out.push_str("</");
  out.push_str(tag);
  out.push('>');
  out
}
