//! Engine configuration file (the file `register_audio --config` reads).
//!
//! ```json
//! { "content_root": "content", "category": "game_effects" }
//! ```
//!
//! Both keys are optional. A relative `content_root` is resolved against the
//! directory containing the config file, so a config can ship next to its sounds.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::types::AudioRenderCategory;

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "audio-engine.json";

/// Startup configuration for an [crate::AudioEngine].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
  /// Directory that relative content paths are resolved against.
  pub content_root: PathBuf,
  /// Render category hint for every graph.
  pub category: AudioRenderCategory,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      content_root: PathBuf::from("."),
      category: AudioRenderCategory::GameEffects,
    }
  }
}

/// Failure reading or writing an engine config file.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("cannot read engine config {path:?}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("engine config {path:?} is not valid")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("cannot write engine config {path:?}")]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Writes `config` as pretty JSON, creating the parent directory.
#[instrument(level = "trace", skip(config))]
pub fn save_config(path: &Path, config: &EngineConfig) -> Result<(), ConfigError> {
  let write_err = |source| ConfigError::Write {
    path: path.to_path_buf(),
    source,
  };
  // Serializing a struct of a path and an enum cannot fail.
  let json = serde_json::to_vec_pretty(config).map_err(|e| write_err(io::Error::other(e)))?;
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent).map_err(write_err)?;
  }
  std::fs::write(path, json).map_err(write_err)
}

/// Reads the config at `path`. Missing keys take their defaults; a relative
/// `content_root` is anchored at the config file's directory.
#[instrument(level = "trace")]
pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
  let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  let mut config: EngineConfig =
    serde_json::from_slice(&bytes).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })?;
  if config.content_root.is_relative()
    && let Some(dir) = path.parent()
  {
    config.content_root = dir.join(&config.content_root);
  }
  debug!(content_root = %config.content_root.display(), category = %config.category, "engine config loaded");
  Ok(config)
}
