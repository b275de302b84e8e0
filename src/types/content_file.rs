//! A file resolved inside the application's installed content.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Readable file resolved from a relative content path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFile {
  /// Path as requested by the caller, with `/` separators.
  pub relative_path: String,
  /// Absolute (or root-joined) path on disk.
  pub path: PathBuf,
}

impl ContentFile {
  pub fn new(relative_path: impl Into<String>, path: impl Into<PathBuf>) -> Self {
    Self {
      relative_path: relative_path.into(),
      path: path.into(),
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// File name component, if any.
  pub fn file_name(&self) -> Option<&str> {
    self.path.file_name().and_then(|n| n.to_str())
  }
}
