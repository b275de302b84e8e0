//! Fixtures shared by unit tests.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::builder::GraphBuilder;
use crate::content::{ContentResolver, InstalledContent};
use crate::error::WireError;
use crate::headless::{HeadlessConfig, HeadlessRuntime};
use crate::runtime::AudioRuntime;
use crate::types::{
  ContentFile, Created, DeviceNodeCreationStatus, FileNodeCreationStatus, GraphCreationStatus,
  GraphId, GraphSettings, InputNodeId, OutputNodeId,
};

/// Minimal RIFF/WAVE header.
pub(crate) const WAV: &[u8] = b"RIFF\x24\x00\x00\x00WAVEfmt \x10\x00\x00\x00";
/// Ogg page header; not decodable with the default headless config.
pub(crate) const OGG: &[u8] = b"OggS\x00\x02\x00\x00\x00\x00\x00\x00";

/// Creates a content directory with `Audio/ding.wav`, `Audio/other.wav`,
/// `Audio/song.ogg`, `Audio/garbage.bin` and `Audio/short.wav`.
pub(crate) fn content_dir() -> tempfile::TempDir {
  let dir = tempfile::tempdir().expect("tempdir");
  let audio = dir.path().join("Audio");
  fs::create_dir_all(&audio).expect("mkdir");
  fs::write(audio.join("ding.wav"), WAV).expect("write");
  fs::write(audio.join("other.wav"), WAV).expect("write");
  fs::write(audio.join("song.ogg"), OGG).expect("write");
  fs::write(audio.join("garbage.bin"), b"not audio at all").expect("write");
  fs::write(audio.join("short.wav"), b"RI").expect("write");
  dir
}

pub(crate) fn headless(config: HeadlessConfig) -> Arc<HeadlessRuntime> {
  Arc::new(HeadlessRuntime::new(config))
}

pub(crate) fn builder_for(runtime: Arc<dyn AudioRuntime>, root: &Path) -> GraphBuilder {
  GraphBuilder::new(runtime, Arc::new(InstalledContent::new(root)))
}

/// Wraps a [HeadlessRuntime], records each call and can inject failures.
#[derive(Default)]
pub(crate) struct ScriptedRuntime {
  pub inner: HeadlessRuntime,
  pub fail_graph: Option<GraphCreationStatus>,
  pub graph_without_handle: bool,
  pub fail_connect: bool,
  pub calls: Mutex<Vec<&'static str>>,
  pub settings_seen: Mutex<Vec<GraphSettings>>,
}

impl ScriptedRuntime {
  pub(crate) fn calls(&self) -> Vec<&'static str> {
    self.calls.lock().expect("calls").clone()
  }

  fn record(&self, call: &'static str) {
    self.calls.lock().expect("calls").push(call);
  }
}

#[async_trait]
impl AudioRuntime for ScriptedRuntime {
  async fn create_graph(&self, settings: &GraphSettings) -> Created<GraphId, GraphCreationStatus> {
    self.record("create_graph");
    self.settings_seen.lock().expect("settings").push(*settings);
    if let Some(status) = self.fail_graph {
      return Created::failure(status);
    }
    if self.graph_without_handle {
      return Created {
        status: GraphCreationStatus::Success,
        handle: None,
      };
    }
    self.inner.create_graph(settings).await
  }

  async fn create_device_output_node(
    &self,
    graph: GraphId,
  ) -> Created<OutputNodeId, DeviceNodeCreationStatus> {
    self.record("create_device_output_node");
    self.inner.create_device_output_node(graph).await
  }

  async fn create_file_input_node(
    &self,
    graph: GraphId,
    file: &ContentFile,
  ) -> Created<InputNodeId, FileNodeCreationStatus> {
    self.record("create_file_input_node");
    self.inner.create_file_input_node(graph, file).await
  }

  async fn connect(
    &self,
    graph: GraphId,
    input: InputNodeId,
    output: OutputNodeId,
  ) -> Result<(), WireError> {
    self.record("connect");
    if self.fail_connect {
      return Err(WireError("connection refused".to_string()));
    }
    self.inner.connect(graph, input, output).await
  }

  fn release_graph(&self, graph: GraphId) {
    self.record("release_graph");
    self.inner.release_graph(graph);
  }
}

/// Content lookup that always fails with an I/O error.
pub(crate) struct UnreadableContent;

#[async_trait]
impl ContentResolver for UnreadableContent {
  async fn resolve(&self, _relative_path: &str) -> io::Result<Option<ContentFile>> {
    Err(io::Error::new(io::ErrorKind::PermissionDenied, "content store locked"))
  }
}
