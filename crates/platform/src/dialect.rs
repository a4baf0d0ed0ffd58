//! Shell/path dialect selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlatformError;
use crate::quote::{CharClass, POSIX_SPECIAL, WINDOWS_SPECIAL};

/// The command interpreter convention a path or argument is meant for.
///
/// The dialect is chosen by the caller, typically from the platform the
/// spawned process will run on, which need not be the platform running us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
  /// POSIX `sh` and compatible shells; `/` is the only separator.
  Posix,
  /// `cmd.exe` feeding the Microsoft C runtime argument parser; `/` and `\` separate paths.
  WindowsCmd,
}

impl Dialect {
  /// The dialect of the platform this crate was compiled for
  pub const fn host() -> Self {
    if cfg!(windows) { Dialect::WindowsCmd } else { Dialect::Posix }
  }

  /// Returns the dialect name as accepted by `FromStr`
  pub const fn as_str(&self) -> &'static str {
    match self {
      Dialect::Posix => "posix",
      Dialect::WindowsCmd => "windows-cmd",
    }
  }

  /// Characters that force an argument to be quoted in this dialect
  pub fn special_chars(&self) -> &'static CharClass {
    match self {
      Dialect::Posix => &POSIX_SPECIAL,
      Dialect::WindowsCmd => &WINDOWS_SPECIAL,
    }
  }

  /// Whether `c` separates path segments in this dialect
  pub const fn is_separator(&self, c: char) -> bool {
    match self {
      Dialect::Posix => c == '/',
      Dialect::WindowsCmd => c == '/' || c == '\\',
    }
  }
}

impl Default for Dialect {
  fn default() -> Self {
    Self::host()
  }
}

impl fmt::Display for Dialect {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Dialect {
  type Err = PlatformError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "posix" | "unix" | "sh" => Ok(Dialect::Posix),
      "windows-cmd" | "windows" | "cmd" | "win" => Ok(Dialect::WindowsCmd),
      _ => Err(PlatformError::UnknownDialect(s.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_accepts_aliases() {
    assert_eq!("posix".parse::<Dialect>().unwrap(), Dialect::Posix);
    assert_eq!("SH".parse::<Dialect>().unwrap(), Dialect::Posix);
    assert_eq!("windows-cmd".parse::<Dialect>().unwrap(), Dialect::WindowsCmd);
    assert_eq!("Cmd".parse::<Dialect>().unwrap(), Dialect::WindowsCmd);
  }

  #[test]
  fn parse_rejects_unknown_names() {
    let err = "fish".parse::<Dialect>().unwrap_err();
    assert_eq!(err, PlatformError::UnknownDialect("fish".to_string()));
    assert!(err.to_string().contains("fish"));
  }

  #[test]
  fn display_round_trips_through_parse() {
    for dialect in [Dialect::Posix, Dialect::WindowsCmd] {
      assert_eq!(dialect.to_string().parse::<Dialect>().unwrap(), dialect);
    }
  }

  #[test]
  fn host_matches_target_family() {
    #[cfg(windows)]
    assert_eq!(Dialect::host(), Dialect::WindowsCmd);
    #[cfg(not(windows))]
    assert_eq!(Dialect::host(), Dialect::Posix);
  }

  #[test]
  fn default_is_host() {
    assert_eq!(Dialect::default(), Dialect::host());
  }

  #[test]
  fn backslash_separates_only_on_windows() {
    assert!(Dialect::Posix.is_separator('/'));
    assert!(!Dialect::Posix.is_separator('\\'));
    assert!(Dialect::WindowsCmd.is_separator('\\'));
  }
}
