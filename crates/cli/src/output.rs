//! CLI output formatting utilities.
//!
//! Colored status lines for text mode, pretty JSON for `--output json`.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};
use prokit_platform::FileType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const ERROR: &str = "✗";
  pub const INFO: &str = "•";
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

/// One `probe` result line: the file type label padded to a fixed column, then the path
pub fn print_probe(kind: FileType, path: &str) {
  let label = format!("{:<7}", kind.as_str());
  match kind {
    FileType::RegularFile => println!("{} {}", label.if_supports_color(Stream::Stdout, |s| s.green()), path),
    FileType::Directory => println!("{} {}", label.if_supports_color(Stream::Stdout, |s| s.blue()), path),
    FileType::NotFound => println!("{} {}", label.if_supports_color(Stream::Stdout, |s| s.yellow()), path),
  }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
