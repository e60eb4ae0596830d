use htoc_headings::{ContentFilter, TocOptions, TocProcessor};

#[test]
fn test_filter_stores_toc_and_returns_annotated_html() {
  let mut filter = ContentFilter::default();
  let out = filter.filter("<h1>Intro</h1><h2>Sub</h2>");

  assert!(out.contains("<a name=\"toc_0_0_0\"></a><h1>Intro</h1>"));
  assert!(filter.has_toc());
  assert_eq!(
    filter.toc_as_olist(false),
    "<ol><li>Intro<ol><li>Sub</li></ol></li></ol>"
  );
  assert_eq!(
    filter.toc_as_ulist(false),
    "<ul><li>Intro<ul><li>Sub</li></ul></li></ul>"
  );
}

#[test]
fn test_disable_marker_strips_marker_and_clears_toc() {
  let mut filter = ContentFilter::default();

  // A first document stores a TOC...
  filter.filter("<h1>First</h1>");
  assert!(filter.has_toc());

  // ...which a disabled document then clears, independent of its headings.
  let out = filter.filter("<p>a</p><!-- [wptoc_disable] --><h1>B</h1>");
  assert_eq!(out, "<p>a</p><h1>B</h1>");
  assert!(!filter.has_toc());
  assert_eq!(filter.toc_as_olist(true), "");
}

#[test]
fn test_disable_marker_tolerates_whitespace() {
  let mut filter = ContentFilter::default();
  let out = filter.filter("x<!--   [wptoc_disable]   -->y");
  assert_eq!(out, "xy");
  assert!(!filter.has_toc());
}

#[test]
fn test_last_call_wins_within_a_cycle() {
  let mut filter = ContentFilter::default();
  filter.filter("<h1>Old</h1>");
  filter.filter("<h1>New</h1>");

  assert_eq!(filter.toc_as_olist(false), "<ol><li>New</li></ol>");
}

#[test]
fn test_detached_filter_passes_content_through() {
  let mut filter = ContentFilter::default();
  filter.detach();
  assert!(!filter.is_attached());

  let html = "<h1>Untouched</h1>";
  assert_eq!(filter.filter(html), html);
  assert!(!filter.has_toc());

  filter.attach();
  assert!(filter.is_attached());
  assert!(filter.filter(html).contains("<a name="));
  assert!(filter.has_toc());
}

#[test]
fn test_headingless_content_stores_empty_toc() {
  let mut filter = ContentFilter::default();
  let html = "<p>no headings here</p>";
  assert_eq!(filter.filter(html), html);

  // A TOC was computed (and is queryable), it just renders to nothing.
  assert!(filter.has_toc());
  assert_eq!(filter.toc_as_olist(true), "");
}

#[test]
fn test_filter_honors_processor_options() {
  let processor =
    TocProcessor::new(TocOptions::default().anchor_prefix("wptoc"));
  let mut filter = ContentFilter::new(processor);
  let out = filter.filter("<h1>A</h1>");

  assert!(out.contains("<a name=\"wptoc_0_0_0\"></a>"));
  assert!(filter.toc_as_ulist(true).contains("href=\"#wptoc_0_0_0\""));
}
