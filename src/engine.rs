//! Startup wiring: one explicitly constructed registry per engine.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::builder::GraphBuilder;
use crate::config_io::EngineConfig;
use crate::content::InstalledContent;
use crate::error::RegistrationError;
use crate::graph::AudioGraph;
use crate::registry::GraphRegistry;
use crate::runtime::AudioRuntime;

/// Owns the graph registry for an application.
///
/// Create one at startup and pass it (or [AudioEngine::registry]) to callers.
pub struct AudioEngine {
  config: EngineConfig,
  registry: Arc<GraphRegistry>,
}

impl AudioEngine {
  pub fn new(config: EngineConfig, runtime: Arc<dyn AudioRuntime>) -> Self {
    info!(
      content_root = %config.content_root.display(),
      category = %config.category,
      "audio engine starting"
    );
    let content = Arc::new(InstalledContent::new(config.content_root.clone()));
    let builder = GraphBuilder::new(runtime, content).with_category(config.category);
    Self {
      config,
      registry: Arc::new(GraphRegistry::new(builder)),
    }
  }

  pub fn config(&self) -> &EngineConfig {
    &self.config
  }

  pub fn registry(&self) -> Arc<GraphRegistry> {
    Arc::clone(&self.registry)
  }

  /// Builds and registers the sound at `file_path` under `name`.
  #[instrument(level = "trace", skip(self))]
  pub async fn register_audio(
    &self,
    name: &str,
    file_path: &str,
  ) -> Result<Arc<AudioGraph>, RegistrationError> {
    self.registry.register(name, file_path).await
  }
}
