//! Resolution of relative paths inside the application's installed content.

use std::io;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::instrument;

use crate::types::ContentFile;

/// Maps a relative path to a readable file.
///
/// `Ok(None)` means "not found"; `Err` is reserved for I/O failures.
#[async_trait]
pub trait ContentResolver: Send + Sync {
  async fn resolve(&self, relative_path: &str) -> io::Result<Option<ContentFile>>;
}

/// Resolves paths under a fixed installation directory.
#[derive(Debug, Clone)]
pub struct InstalledContent {
  root: PathBuf,
}

impl InstalledContent {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }
}

/// Normalizes `relative_path` to `/` separators and checks it stays inside the root.
/// Returns `None` for blank, absolute, or parent-escaping paths.
/// Whitespace inside or around names is kept as given.
pub(crate) fn normalize_relative(relative_path: &str) -> Option<String> {
  if relative_path.trim().is_empty() {
    return None;
  }
  let unified = relative_path.replace('\\', "/");
  let path = Path::new(&unified);
  let mut parts = Vec::new();
  for component in path.components() {
    match component {
      Component::Normal(p) => parts.push(p.to_str()?.to_string()),
      Component::CurDir => {}
      Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
    }
  }
  if parts.is_empty() {
    return None;
  }
  Some(parts.join("/"))
}

#[async_trait]
impl ContentResolver for InstalledContent {
  #[instrument(level = "trace", skip(self))]
  async fn resolve(&self, relative_path: &str) -> io::Result<Option<ContentFile>> {
    let Some(relative) = normalize_relative(relative_path) else {
      return Ok(None);
    };
    let path = self.root.join(&relative);
    match tokio::fs::metadata(&path).await {
      Ok(meta) if meta.is_file() => Ok(Some(ContentFile::new(relative, path))),
      Ok(_) => Ok(None),
      // A file used as a directory component (`ding.wav/x.wav`) is also absent.
      Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
        Ok(None)
      }
      Err(e) => Err(e),
    }
  }
}
