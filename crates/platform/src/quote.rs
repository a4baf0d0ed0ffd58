//! Command-line argument quoting for POSIX shells and `cmd.exe`
//!
//! Each [`Dialect`] owns a fixed table of characters that force quoting. An
//! argument without any of them is passed through untouched; everything else
//! is rewritten so that the target shell hands the original string back to
//! the spawned program as a single argument.

use std::borrow::Cow;

use crate::dialect::Dialect;

/// Membership table answering "does this character force quoting".
///
/// Covers code points below 256; anything above is never special.
#[derive(Debug)]
pub struct CharClass([bool; 256]);

impl CharClass {
  /// Build a table from `chars`, with every ASCII control character set too.
  const fn with_controls(chars: &[u8]) -> Self {
    let mut table = [false; 256];
    let mut c = 0;
    while c < 32 {
      table[c] = true;
      c += 1;
    }
    let mut i = 0;
    while i < chars.len() {
      table[chars[i] as usize] = true;
      i += 1;
    }
    CharClass(table)
  }

  /// Whether `c` forces quoting
  pub fn contains(&self, c: char) -> bool {
    let code = c as u32;
    code < 256 && self.0[code as usize]
  }

  /// The printable members, in code point order
  pub fn printable(&self) -> String {
    (32u8..=255)
      .filter(|&b| self.0[b as usize])
      .map(char::from)
      .collect()
  }
}

pub(crate) static POSIX_SPECIAL: CharClass = CharClass::with_controls(b" !\"#$&'()*;<>?[\\]`{|}~");

pub(crate) static WINDOWS_SPECIAL: CharClass = CharClass::with_controls(b" \"&(),;<=>^|");

/// Whether `arg` contains any character special to `dialect`
pub fn needs_quoting(arg: &str, dialect: Dialect) -> bool {
  let special = dialect.special_chars();
  arg.chars().any(|c| special.contains(c))
}

/// Quote `arg` as one self-contained token for `dialect`.
///
/// An empty argument becomes `""` so that it survives tokenization. An
/// argument with no special characters is returned as is.
///
/// # Examples
///
/// ```
/// use prokit_platform::{Dialect, quote};
///
/// assert_eq!(quote("plain.txt", Dialect::Posix), "plain.txt");
/// assert_eq!(quote("it's", Dialect::Posix), r"'it'\''s'");
/// assert_eq!(quote("a\"b", Dialect::WindowsCmd), r#""a"\^""b""#);
/// assert_eq!(quote("", Dialect::WindowsCmd), r#""""#);
/// ```
pub fn quote(arg: &str, dialect: Dialect) -> Cow<'_, str> {
  if arg.is_empty() {
    return Cow::Borrowed("\"\"");
  }
  if !needs_quoting(arg, dialect) {
    return Cow::Borrowed(arg);
  }
  match dialect {
    Dialect::Posix => Cow::Owned(quote_posix(arg)),
    Dialect::WindowsCmd => Cow::Owned(quote_windows(arg)),
  }
}

/// [`quote`] for the host platform's dialect
pub fn shell_quote(arg: &str) -> Cow<'_, str> {
  quote(arg, Dialect::host())
}

/// Quote every argument and join them with single spaces into a command line
pub fn join_args<I, S>(args: I, dialect: Dialect) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut line = String::new();
  for arg in args {
    if !line.is_empty() {
      line.push(' ');
    }
    line.push_str(&quote(arg.as_ref(), dialect));
  }
  line
}

/// Wrap `arg` in single quotes, replacing each `'` with `'\''`.
///
/// Inside single quotes a POSIX shell treats nothing as special except the
/// closing quote, so that is the only character to escape.
pub fn quote_posix(arg: &str) -> String {
  let mut out = String::with_capacity(arg.len() + 2);
  out.push('\'');
  for c in arg.chars() {
    if c == '\'' {
      out.push_str("'\\''");
    } else {
      out.push(c);
    }
  }
  out.push('\'');
  out
}

/// Wrap `arg` in double quotes for `cmd.exe` and the C runtime argv parser.
///
/// cmd cannot escape anything inside quotes, so at each embedded `"` the
/// quoting is closed, the preceding backslash run is doubled, the quote is
/// emitted as `\^"` and the quoting reopened. A trailing backslash run goes
/// after the closing quote, where it cannot escape it.
pub fn quote_windows(arg: &str) -> String {
  let mut out = String::with_capacity(arg.len() + 2);
  out.push('"');
  let mut backslashes = 0;
  for c in arg.chars() {
    match c {
      '\\' => backslashes += 1,
      '"' => {
        out.push('"');
        push_backslashes(&mut out, 2 * backslashes + 1);
        out.push_str("^\"\"");
        backslashes = 0;
      }
      _ => {
        push_backslashes(&mut out, backslashes);
        backslashes = 0;
        out.push(c);
      }
    }
  }
  out.push('"');
  push_backslashes(&mut out, backslashes);
  out
}

fn push_backslashes(out: &mut String, count: usize) {
  out.extend(std::iter::repeat_n('\\', count));
}
