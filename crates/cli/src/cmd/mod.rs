mod info;
mod probe;
mod quote;
mod resolve;
mod segment;

pub use info::cmd_info;
pub use probe::cmd_probe;
pub use quote::cmd_quote;
pub use resolve::cmd_resolve;
pub use segment::cmd_segment;

use anyhow::{Context, Result, anyhow};

/// The current working directory as a string, for use as a resolution base
fn current_dir() -> Result<String> {
  let cwd = std::env::current_dir().context("Failed to determine current directory")?;
  cwd
    .into_os_string()
    .into_string()
    .map_err(|raw| anyhow!("Current directory is not valid UTF-8: {}", raw.to_string_lossy()))
}
