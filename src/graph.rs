//! A constructed, wired audio graph.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::runtime::AudioRuntime;
use crate::types::{AudioRenderCategory, ContentFile, GraphId, InputNodeId, OutputNodeId};

/// Owns one graph on the runtime and releases it when dropped.
///
/// Created right after the graph is allocated so that every later failure,
/// and cancellation of the build future, releases it.
pub(crate) struct GraphLease {
  id: GraphId,
  runtime: Arc<dyn AudioRuntime>,
}

impl GraphLease {
  pub(crate) fn new(id: GraphId, runtime: Arc<dyn AudioRuntime>) -> Self {
    Self { id, runtime }
  }

  pub(crate) fn id(&self) -> GraphId {
    self.id
  }
}

impl Drop for GraphLease {
  fn drop(&mut self) {
    trace!(graph = %self.id, "releasing graph");
    self.runtime.release_graph(self.id);
  }
}

/// A live graph whose file input node feeds its device output node.
///
/// Not `Clone`: the graph is released exactly once, when this value is dropped.
/// Share it through `Arc<AudioGraph>`.
pub struct AudioGraph {
  lease: GraphLease,
  output: OutputNodeId,
  input: InputNodeId,
  source: ContentFile,
  category: AudioRenderCategory,
}

impl AudioGraph {
  pub(crate) fn new(
    lease: GraphLease,
    output: OutputNodeId,
    input: InputNodeId,
    source: ContentFile,
    category: AudioRenderCategory,
  ) -> Self {
    Self {
      lease,
      output,
      input,
      source,
      category,
    }
  }

  pub fn id(&self) -> GraphId {
    self.lease.id()
  }

  pub fn output_node(&self) -> OutputNodeId {
    self.output
  }

  pub fn input_node(&self) -> InputNodeId {
    self.input
  }

  /// The file the input node decodes.
  pub fn source(&self) -> &ContentFile {
    &self.source
  }

  pub fn category(&self) -> AudioRenderCategory {
    self.category
  }
}

impl fmt::Debug for AudioGraph {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AudioGraph")
      .field("id", &self.id())
      .field("output", &self.output)
      .field("input", &self.input)
      .field("source", &self.source.relative_path)
      .field("category", &self.category)
      .finish()
  }
}
