//! Builds one playable graph from a content path.
//!
//! Stages run strictly in order and stop at the first failure:
//!
//! 1. create graph (with the configured render category)
//! 2. create device output node
//! 3. resolve the input file in installed content
//! 4. create file input node
//! 5. connect input → output
//!
//! Resources allocated before a failing stage are released when the
//! partially built graph is dropped.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::content::ContentResolver;
use crate::error::BuildError;
use crate::graph::{AudioGraph, GraphLease};
use crate::runtime::AudioRuntime;
use crate::types::{AudioRenderCategory, GraphSettings};

/// Builds [AudioGraph]s against one runtime and content location.
#[derive(Clone)]
pub struct GraphBuilder {
  runtime: Arc<dyn AudioRuntime>,
  content: Arc<dyn ContentResolver>,
  settings: GraphSettings,
}

impl GraphBuilder {
  /// Builder using the [AudioRenderCategory::GameEffects] hint.
  pub fn new(runtime: Arc<dyn AudioRuntime>, content: Arc<dyn ContentResolver>) -> Self {
    Self {
      runtime,
      content,
      settings: GraphSettings::default(),
    }
  }

  pub fn with_category(mut self, category: AudioRenderCategory) -> Self {
    self.settings.category = category;
    self
  }

  pub fn settings(&self) -> &GraphSettings {
    &self.settings
  }

  /// Runs all build stages for `file_path`. No retries.
  #[instrument(level = "trace", skip(self))]
  pub async fn build(&self, file_path: &str) -> Result<AudioGraph, BuildError> {
    let graph_id = self
      .runtime
      .create_graph(&self.settings)
      .await
      .into_handle()
      .map_err(|status| {
        warn!(%status, "could not create an audio graph");
        BuildError::GraphCreationFailed(status)
      })?;
    let lease = GraphLease::new(graph_id, Arc::clone(&self.runtime));
    debug!(graph = %graph_id, category = %self.settings.category, "graph created");

    let output = self
      .runtime
      .create_device_output_node(graph_id)
      .await
      .into_handle()
      .map_err(|status| {
        warn!(graph = %graph_id, %status, "could not create an output node");
        BuildError::OutputNodeCreationFailed(status)
      })?;
    debug!(graph = %graph_id, output = %output, "device output node created");

    let file = match self.content.resolve(file_path).await {
      Ok(Some(file)) => file,
      Ok(None) => {
        warn!(graph = %graph_id, file_path, "file not found");
        return Err(BuildError::FileNotFound(file_path.to_string()));
      }
      Err(source) => {
        warn!(graph = %graph_id, file_path, error = %source, "file lookup failed");
        return Err(BuildError::FileUnreadable {
          path: file_path.to_string(),
          source,
        });
      }
    };
    debug!(graph = %graph_id, path = %file.path.display(), "file resolved");

    let input = self
      .runtime
      .create_file_input_node(graph_id, &file)
      .await
      .into_handle()
      .map_err(|status| {
        warn!(graph = %graph_id, %status, "cannot read input file");
        BuildError::InputNodeCreationFailed(status)
      })?;
    debug!(graph = %graph_id, input = %input, "file input node created");

    self
      .runtime
      .connect(graph_id, input, output)
      .await
      .map_err(|e| {
        warn!(graph = %graph_id, error = %e, "could not connect input to output");
        BuildError::WireFailed(e)
      })?;
    debug!(graph = %graph_id, "input connected to output");

    Ok(AudioGraph::new(
      lease,
      output,
      input,
      file,
      self.settings.category,
    ))
  }
}
