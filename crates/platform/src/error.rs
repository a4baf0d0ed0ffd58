//! Error types for prokit-platform

use thiserror::Error;

/// Errors that can occur in platform operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
  #[error("Unknown dialect: {0} (expected posix or windows-cmd)")]
  UnknownDialect(String),
}
