//! Quote command implementation.

use anyhow::Result;
use tracing::debug;

use prokit_platform::{Dialect, join_args, quote};

use crate::output::{OutputFormat, print_json};

pub fn cmd_quote(args: &[String], dialect: Dialect, output: OutputFormat) -> Result<()> {
  let line = join_args(args, dialect);
  debug!(%dialect, count = args.len(), "quoted arguments");

  if output.is_json() {
    let items: Vec<_> = args
      .iter()
      .map(|arg| serde_json::json!({ "arg": arg, "quoted": quote(arg, dialect) }))
      .collect();
    print_json(&serde_json::json!({ "dialect": dialect, "args": items, "command_line": line }))?;
  } else {
    println!("{}", line);
  }

  Ok(())
}
