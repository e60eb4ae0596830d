use std::{
  fs,
  io::{Read, Write},
};

use color_eyre::eyre::{Context, Result};
use htoc_headings::{ContentFilter, ListStyle, TocOptions, TocProcessor};
use log::{LevelFilter, debug};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so the library's diagnostics are visible
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Warn
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  let html = read_input(&cli)?;

  let options = TocOptions::default()
    .start_level(cli.start_level)
    .anchor_prefix(cli.anchor_prefix.clone());
  let mut filter = ContentFilter::new(TocProcessor::new(options));

  let annotated = filter.filter(&html);
  debug!(
    "extracted {} top-level heading(s)",
    filter.toc().map_or(0, |toc| toc.len())
  );

  let out = if cli.toc_only {
    let toc = filter.toc().unwrap_or(&[]);
    if cli.format == "json" {
      serde_json::to_string_pretty(toc)
        .wrap_err("Failed to serialize heading tree as JSON")?
    } else {
      let style = if cli.unordered {
        ListStyle::Unordered
      } else {
        ListStyle::Ordered
      };
      htoc_headings::render_as_list(toc, !cli.no_links, style)
    }
  } else {
    annotated
  };

  write_output(&cli, &out)
}

/// Read the document from the input file, or stdin when none was given.
fn read_input(cli: &Cli) -> Result<String> {
  cli.input.as_ref().map_or_else(
    || {
      let mut buf = String::new();
      std::io::stdin()
        .read_to_string(&mut buf)
        .wrap_err("Failed to read HTML from stdin")?;
      Ok(buf)
    },
    |path| {
      fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))
    },
  )
}

/// Write the result to the output file, or stdout when none was given.
fn write_output(cli: &Cli, out: &str) -> Result<()> {
  match &cli.output {
    Some(path) => fs::write(path, out)
      .wrap_err_with(|| format!("Failed to write {}", path.display())),
    None => {
      let mut stdout = std::io::stdout().lock();
      stdout.write_all(out.as_bytes())?;
      if !out.is_empty() && !out.ends_with('\n') {
        stdout.write_all(b"\n")?;
      }
      Ok(())
    },
  }
}
