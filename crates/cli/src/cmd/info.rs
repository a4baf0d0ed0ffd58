use anyhow::Result;

use prokit_platform::Dialect;

use crate::output::{OutputFormat, print_info, print_json, print_stat};

const DIALECTS: [Dialect; 2] = [Dialect::Posix, Dialect::WindowsCmd];

pub fn cmd_info(output: OutputFormat) -> Result<()> {
  let host = Dialect::host();

  if output.is_json() {
    let dialects: Vec<_> = DIALECTS
      .iter()
      .map(|d| serde_json::json!({ "name": d, "special_chars": d.special_chars().printable() }))
      .collect();
    print_json(&serde_json::json!({ "host_dialect": host, "dialects": dialects }))?;
  } else {
    print_info(&format!("prokit v{}", env!("CARGO_PKG_VERSION")));
    print_stat("Host dialect", host.as_str());
    for dialect in DIALECTS {
      // Control characters are special in every dialect and not listed.
      print_stat(
        &format!("{} specials", dialect),
        &format!("{} (plus control characters)", dialect.special_chars().printable()),
      );
    }
  }

  Ok(())
}
