//! Path and command-line utilities for a build-file evaluator
//!
//! This crate provides:
//! - Path classification, lexical resolution and filesystem probing
//! - Argument quoting for POSIX shells and `cmd.exe`
//! - The [`Dialect`] selector shared by both
//!
//! All operations are stateless and safe to call from any thread.

mod dialect;
mod error;
pub mod paths;
pub mod quote;

pub use dialect::Dialect;
pub use error::PlatformError;
pub use paths::{FileType, clean_path, exists, is_absolute, is_relative, last_segment, probe, resolve};
pub use quote::{CharClass, join_args, needs_quoting, quote, quote_posix, quote_windows, shell_quote};
