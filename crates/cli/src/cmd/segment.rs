use anyhow::Result;

use prokit_platform::last_segment;

use crate::output::{OutputFormat, print_json};

pub fn cmd_segment(path: &str, output: OutputFormat) -> Result<()> {
  let segment = last_segment(path);

  if output.is_json() {
    print_json(&serde_json::json!({ "path": path, "segment": segment }))?;
  } else {
    println!("{}", segment);
  }

  Ok(())
}
