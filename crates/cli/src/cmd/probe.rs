//! Probe command implementation.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use prokit_platform::{Dialect, FileType, probe, resolve};

use crate::output::{OutputFormat, print_json, print_probe};

#[derive(Debug, Serialize)]
struct ProbeReport {
  path: String,
  resolved: String,
  kind: FileType,
}

/// Probe each path on the local filesystem.
///
/// Paths are resolved against the current directory with the host dialect,
/// whatever `--dialect` says, since the filesystem being probed is the host's.
pub fn cmd_probe(paths: &[String], output: OutputFormat) -> Result<()> {
  let base = super::current_dir()?;

  let reports: Vec<ProbeReport> = paths
    .iter()
    .map(|path| {
      let resolved = resolve(&base, path, Dialect::host());
      let kind = probe(&resolved);
      debug!(path = %path, resolved = %resolved, kind = kind.as_str(), "probed");
      ProbeReport {
        path: path.clone(),
        resolved,
        kind,
      }
    })
    .collect();

  if output.is_json() {
    print_json(&reports)?;
  } else {
    for report in &reports {
      print_probe(report.kind, &report.resolved);
    }
  }

  Ok(())
}
