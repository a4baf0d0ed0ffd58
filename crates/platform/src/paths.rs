//! Path classification, lexical resolution and filesystem probing
//!
//! Everything here except [`probe`] and [`exists`] works on plain strings and
//! never touches the filesystem, so paths that do not exist yet resolve the
//! same way as ones that do.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;
use tracing::trace;

use crate::dialect::Dialect;

/// Outcome of checking a path against the filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
  /// Absent, or not accessible to us
  NotFound,
  RegularFile,
  Directory,
}

impl FileType {
  /// Short label used in command output
  pub const fn as_str(&self) -> &'static str {
    match self {
      FileType::NotFound => "missing",
      FileType::RegularFile => "file",
      FileType::Directory => "dir",
    }
  }
}

/// Returns true unless `path` is rooted in `dialect`.
///
/// A leading `/` is absolute everywhere. On [`Dialect::WindowsCmd`] a leading
/// `\` and a drive letter followed by a separator (`C:\`, `c:/`) are absolute
/// as well. A bare drive (`C:foo`) is relative to that drive's current
/// directory and is reported as relative.
pub fn is_relative(path: &str, dialect: Dialect) -> bool {
  if path.starts_with('/') {
    return false;
  }
  if dialect == Dialect::WindowsCmd {
    if path.starts_with('\\') {
      return false;
    }
    let mut chars = path.chars();
    if let (Some(drive), Some(':'), Some(sep)) = (chars.next(), chars.next(), chars.next())
      && drive.is_alphabetic()
      && dialect.is_separator(sep)
    {
      return false;
    }
  }
  true
}

/// Returns true if `path` is rooted in `dialect`
pub fn is_absolute(path: &str, dialect: Dialect) -> bool {
  !is_relative(path, dialect)
}

/// Query the filesystem for the type of `path`.
///
/// `path` must be absolute; resolve it with [`resolve`] first. Symlinks are
/// followed. Any failure, including permission errors, is reported as
/// [`FileType::NotFound`]. Nothing is cached, so two calls may disagree if the
/// filesystem changes in between.
pub fn probe<P: AsRef<Path>>(path: P) -> FileType {
  let path = path.as_ref();
  debug_assert!(
    path.as_os_str().is_empty() || is_absolute(&path.to_string_lossy(), Dialect::host()),
    "probe requires an absolute path, got {}",
    path.display()
  );

  match std::fs::metadata(path) {
    Ok(meta) if meta.is_dir() => FileType::Directory,
    Ok(_) => FileType::RegularFile,
    Err(err) => {
      trace!(path = %path.display(), error = %err, "probe found nothing");
      FileType::NotFound
    }
  }
}

/// Check whether `path` exists as a file or directory
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
  probe(path) != FileType::NotFound
}

/// Resolve `path` against `base_dir` and normalize the result.
///
/// - An empty `path` yields an empty string ("no path").
/// - An absolute `path` is normalized on its own; `base_dir` is ignored.
/// - Anything else is appended to `base_dir` with a `/` and normalized.
///
/// # Examples
///
/// ```
/// use prokit_platform::{Dialect, resolve};
///
/// assert_eq!(resolve("/base", "a/../b", Dialect::Posix), "/base/b");
/// assert_eq!(resolve("/base", "/abs/path", Dialect::Posix), "/abs/path");
/// assert_eq!(resolve("C:\\proj", "src\\main.cpp", Dialect::WindowsCmd), "C:/proj/src/main.cpp");
/// assert_eq!(resolve("/base", "", Dialect::Posix), "");
/// ```
pub fn resolve(base_dir: &str, path: &str, dialect: Dialect) -> String {
  if path.is_empty() {
    return String::new();
  }
  let resolved = if is_absolute(path, dialect) {
    clean_path(path, dialect)
  } else {
    clean_path(&format!("{}/{}", base_dir, path), dialect)
  };
  trace!(base = base_dir, path, resolved = %resolved, "resolved path");
  resolved
}

/// Lexically normalize a path: collapse repeated separators, drop `.`
/// segments and fold `..` into its parent.
///
/// `..` never climbs above a root (`/..` is `/`) but is kept at the front of
/// a relative path (`../c` stays `../c`). A relative path that folds away
/// completely becomes `.`. On [`Dialect::WindowsCmd`] backslashes are turned
/// into `/` first, so the output only ever contains `/`.
pub fn clean_path(path: &str, dialect: Dialect) -> String {
  if path.is_empty() {
    return String::new();
  }
  let path: Cow<'_, str> = match dialect {
    Dialect::Posix => Cow::Borrowed(path),
    Dialect::WindowsCmd => Cow::Owned(path.replace('\\', "/")),
  };
  let (prefix, rest, rooted) = split_root(&path, dialect);

  let mut segments: Vec<&str> = Vec::new();
  for segment in rest.split('/') {
    match segment {
      "" | "." => {}
      ".." => match segments.last() {
        Some(&last) if last != ".." => {
          segments.pop();
        }
        _ if rooted => {}
        _ => segments.push(".."),
      },
      other => segments.push(other),
    }
  }

  if segments.is_empty() {
    return if prefix.is_empty() { ".".to_string() } else { prefix.to_string() };
  }
  let mut cleaned = String::with_capacity(path.len());
  cleaned.push_str(prefix);
  cleaned.push_str(&segments.join("/"));
  cleaned
}

/// Split off the part of `path` that `..` must not eat into.
///
/// Returns `(prefix, rest, rooted)`; `path` is expected to use `/` only.
fn split_root(path: &str, dialect: Dialect) -> (&str, &str, bool) {
  if dialect == Dialect::WindowsCmd {
    if let Some(rest) = path.strip_prefix("//") {
      return ("//", rest, true);
    }
    let mut chars = path.chars();
    if let (Some(drive), Some(':')) = (chars.next(), chars.next())
      && drive.is_alphabetic()
    {
      let end = drive.len_utf8() + 1;
      return if path[end..].starts_with('/') {
        (&path[..end + 1], &path[end + 1..], true)
      } else {
        (&path[..end], &path[end..], false)
      };
    }
  }
  match path.strip_prefix('/') {
    Some(rest) => ("/", rest, true),
    None => ("", path, false),
  }
}

/// The part of `path` after its final `/`, or all of it when there is none.
///
/// Only `/` is considered, whatever the dialect; normalize Windows paths with
/// [`clean_path`] before asking for their last segment.
pub fn last_segment(path: &str) -> &str {
  match path.rfind('/') {
    Some(idx) => &path[idx + 1..],
    None => path,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  use Dialect::{Posix, WindowsCmd};

  #[test]
  fn leading_slash_is_absolute_everywhere() {
    assert!(!is_relative("/x", Posix));
    assert!(!is_relative("/x", WindowsCmd));
    assert!(is_absolute("/", Posix));
  }

  #[test]
  fn drive_paths_are_absolute_only_on_windows() {
    assert!(!is_relative("C:\\x", WindowsCmd));
    assert!(!is_relative("d:/x", WindowsCmd));
    assert!(is_relative("C:\\x", Posix));
  }

  #[test]
  fn bare_drive_is_relative() {
    assert!(is_relative("C:x", WindowsCmd));
    assert!(is_relative("C:", WindowsCmd));
    assert!(is_relative("1:/x", WindowsCmd));
  }

  #[test]
  fn backslash_root_is_absolute_only_on_windows() {
    assert!(!is_relative("\\share\\x", WindowsCmd));
    assert!(is_relative("\\share\\x", Posix));
  }

  #[test]
  fn plain_names_are_relative() {
    assert!(is_relative("a/b", Posix));
    assert!(is_relative("./a", WindowsCmd));
    assert!(is_relative("", Posix));
  }

  #[test]
  fn clean_path_folds_parent_segments() {
    assert_eq!(clean_path("a/b/../c", Posix), "a/c");
    assert_eq!(clean_path("/foo/bar/../../baz", Posix), "/baz");
    assert_eq!(clean_path("/foo/./bar", Posix), "/foo/bar");
  }

  #[test]
  fn clean_path_keeps_leading_parent_of_relative_path() {
    assert_eq!(clean_path("../c", Posix), "../c");
    assert_eq!(clean_path("a/../../c", Posix), "../c");
    assert_eq!(clean_path("../../x/..", Posix), "../..");
  }

  #[test]
  fn clean_path_stops_at_root() {
    assert_eq!(clean_path("/..", Posix), "/");
    assert_eq!(clean_path("/../../etc", Posix), "/etc");
  }

  #[test]
  fn clean_path_collapses_separators() {
    assert_eq!(clean_path("/foo//bar///baz/", Posix), "/foo/bar/baz");
    assert_eq!(clean_path("//", Posix), "/");
  }

  #[test]
  fn clean_path_of_nothing_is_dot() {
    assert_eq!(clean_path("a/..", Posix), ".");
    assert_eq!(clean_path("./", Posix), ".");
    assert_eq!(clean_path("", Posix), "");
  }

  #[test]
  fn clean_path_leaves_backslashes_alone_on_posix() {
    assert_eq!(clean_path("a\\b/../c", Posix), "c");
  }

  #[test]
  fn clean_path_windows_drive_root() {
    assert_eq!(clean_path("C:\\foo\\..\\bar", WindowsCmd), "C:/bar");
    assert_eq!(clean_path("C:/..", WindowsCmd), "C:/");
    assert_eq!(clean_path("c:\\", WindowsCmd), "c:/");
  }

  #[test]
  fn clean_path_windows_unc_prefix() {
    assert_eq!(clean_path("\\\\server\\share\\x\\..", WindowsCmd), "//server/share");
  }

  #[test]
  fn clean_path_windows_bare_drive_is_not_a_root() {
    assert_eq!(clean_path("C:../x", WindowsCmd), "C:../x");
    assert_eq!(clean_path("C:a/..", WindowsCmd), "C:");
  }

  #[test]
  fn resolve_relative_against_base() {
    assert_eq!(resolve("/base", "a/../b", Posix), "/base/b");
    assert_eq!(resolve("/base/sub", "../x", Posix), "/base/x");
    assert_eq!(resolve("/base/", "./x", Posix), "/base/x");
  }

  #[test]
  fn resolve_absolute_ignores_base() {
    assert_eq!(resolve("/base", "/abs/path", Posix), "/abs/path");
    assert_eq!(resolve("/base", "/abs//./path/", Posix), "/abs/path");
    assert_eq!(resolve("C:/proj", "D:\\x", WindowsCmd), "D:/x");
  }

  #[test]
  fn resolve_empty_is_empty() {
    assert_eq!(resolve("/base", "", Posix), "");
    assert_eq!(resolve("", "", WindowsCmd), "");
  }

  #[test]
  fn resolve_windows_mixed_separators() {
    assert_eq!(resolve("C:\\proj", "src\\..\\include/a.h", WindowsCmd), "C:/proj/include/a.h");
  }

  #[test]
  fn resolve_bare_drive_is_joined_to_base() {
    assert_eq!(resolve("/base", "C:x", WindowsCmd), "/base/C:x");
  }

  #[test]
  fn last_segment_after_final_slash() {
    assert_eq!(last_segment("a/b/c"), "c");
    assert_eq!(last_segment("nosep"), "nosep");
    assert_eq!(last_segment("a/b/"), "");
    assert_eq!(last_segment("/"), "");
  }

  #[test]
  fn last_segment_ignores_backslash() {
    assert_eq!(last_segment("C:\\dir\\file.txt"), "C:\\dir\\file.txt");
    assert_eq!(last_segment("C:/dir\\file.txt"), "dir\\file.txt");
  }

  #[test]
  fn probe_regular_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("file.pro");
    std::fs::write(&file, "SOURCES += main.cpp\n").unwrap();

    assert_eq!(probe(&file), FileType::RegularFile);
    assert!(exists(&file));
  }

  #[test]
  fn probe_directory() {
    let temp = TempDir::new().unwrap();
    assert_eq!(probe(temp.path()), FileType::Directory);
  }

  #[test]
  fn probe_missing_path() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does").join("not").join("exist");

    assert_eq!(probe(&missing), FileType::NotFound);
    assert!(!exists(&missing));
  }

  #[test]
  fn probe_path_below_regular_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("file.pri");
    std::fs::write(&file, "").unwrap();

    // Fails with "not a directory" rather than "not found".
    assert_eq!(probe(file.join("child")), FileType::NotFound);
    assert!(!exists(file.join("child")));
  }

  #[test]
  fn probe_empty_path_is_not_found() {
    assert_eq!(probe(""), FileType::NotFound);
  }

  #[test]
  fn probe_sees_filesystem_changes() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("late.txt");

    assert_eq!(probe(&file), FileType::NotFound);
    std::fs::write(&file, "").unwrap();
    assert_eq!(probe(&file), FileType::RegularFile);
    std::fs::remove_file(&file).unwrap();
    assert_eq!(probe(&file), FileType::NotFound);
  }

  #[test]
  fn file_type_serializes_snake_case() {
    let json = serde_json::to_string(&FileType::RegularFile).unwrap();
    assert_eq!(json, "\"regular_file\"");
  }
}
