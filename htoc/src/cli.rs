use std::path::PathBuf;

use clap::Parser;

/// Command line interface for htoc
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "htoc: tables of contents for HTML documents"
)]
pub struct Cli {
  /// Input HTML file. Reads standard input when omitted.
  pub input: Option<PathBuf>,

  /// Print the rendered TOC instead of the anchor-annotated HTML.
  #[arg(short = 't', long)]
  pub toc_only: bool,

  /// Render the TOC as an unordered list instead of an ordered one.
  #[arg(short = 'u', long)]
  pub unordered: bool,

  /// Render plain heading text without links to the heading anchors.
  #[arg(long = "no-links")]
  pub no_links: bool,

  /// Output format for --toc-only: an HTML list or the heading tree as
  /// JSON.
  #[arg(short = 'F', long, default_value = "html", value_parser = ["html", "json"])]
  pub format: String,

  /// Heading level extraction starts at (1-6). Levels with no matches fall
  /// back one level at a time.
  #[arg(short = 'l', long = "start-level", default_value_t = 1)]
  pub start_level: u8,

  /// Prefix for generated anchor identifiers.
  #[arg(short = 'p', long = "anchor-prefix", default_value = "toc")]
  pub anchor_prefix: String,

  /// Write output to a file instead of standard output.
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
