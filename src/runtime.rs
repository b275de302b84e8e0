//! The host audio subsystem, as seen by the graph builder.
//!
//! Implementations own the real graphs and nodes; the builder only ever holds
//! the ids returned here. [crate::HeadlessRuntime] is an in-process implementation.

use async_trait::async_trait;

use crate::error::WireError;
use crate::types::{
  ContentFile, Created, DeviceNodeCreationStatus, FileNodeCreationStatus, GraphCreationStatus,
  GraphId, GraphSettings, InputNodeId, OutputNodeId,
};

/// Fallible, asynchronous audio graph services provided by the platform.
#[async_trait]
pub trait AudioRuntime: Send + Sync {
  /// Creates an empty render graph.
  async fn create_graph(&self, settings: &GraphSettings) -> Created<GraphId, GraphCreationStatus>;

  /// Creates a node rendering to the default output device.
  async fn create_device_output_node(
    &self,
    graph: GraphId,
  ) -> Created<OutputNodeId, DeviceNodeCreationStatus>;

  /// Creates a node decoding `file`.
  async fn create_file_input_node(
    &self,
    graph: GraphId,
    file: &ContentFile,
  ) -> Created<InputNodeId, FileNodeCreationStatus>;

  /// Adds a one-way edge from `input` to `output`.
  async fn connect(
    &self,
    graph: GraphId,
    input: InputNodeId,
    output: OutputNodeId,
  ) -> Result<(), WireError>;

  /// Releases a graph and every node on it. Unknown ids are ignored.
  ///
  /// Called from `Drop`, so it must not block on async work.
  fn release_graph(&self, graph: GraphId);
}
