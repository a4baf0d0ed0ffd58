//! Resolve command implementation.
//!
//! Turns a possibly relative path into a normalized absolute one, the way the
//! evaluator does for file names found in build files.

use anyhow::Result;
use tracing::debug;

use prokit_platform::{Dialect, is_absolute, resolve};

use crate::output::{OutputFormat, print_json};

pub fn cmd_resolve(path: &str, base: Option<&str>, dialect: Dialect, output: OutputFormat) -> Result<()> {
  let base = match base {
    Some(base) => base.to_string(),
    None => super::current_dir()?,
  };

  let resolved = resolve(&base, path, dialect);
  debug!(%dialect, base = %base, path, resolved = %resolved, "resolved");

  if output.is_json() {
    print_json(&serde_json::json!({
      "dialect": dialect,
      "base": base,
      "path": path,
      "absolute": is_absolute(path, dialect),
      "resolved": resolved,
    }))?;
  } else {
    println!("{}", resolved);
  }

  Ok(())
}
