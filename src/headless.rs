//! In-process [AudioRuntime] with no audio hardware.
//!
//! Graphs and nodes exist only as bookkeeping. File input nodes probe the
//! file header to decide whether the format is decodable, so unsupported or
//! corrupt files fail the same way they would on a device.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncReadExt;
use tracing::{instrument, trace};

use crate::error::WireError;
use crate::runtime::AudioRuntime;
use crate::types::{
  ContentFile, Created, DeviceNodeCreationStatus, FileNodeCreationStatus, GraphCreationStatus,
  GraphId, GraphSettings, InputNodeId, OutputNodeId,
};

/// Container formats recognized from a file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
  Wav,
  Mp3,
  Flac,
  Ogg,
}

impl fmt::Display for AudioFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AudioFormat::Wav => write!(f, "wav"),
      AudioFormat::Mp3 => write!(f, "mp3"),
      AudioFormat::Flac => write!(f, "flac"),
      AudioFormat::Ogg => write!(f, "ogg"),
    }
  }
}

/// Identifies the container format from the first bytes of a file.
pub fn sniff_format(header: &[u8]) -> Option<AudioFormat> {
  if header.len() >= 12 && &header[0..4] == b"RIFF" && &header[8..12] == b"WAVE" {
    return Some(AudioFormat::Wav);
  }
  if header.starts_with(b"fLaC") {
    return Some(AudioFormat::Flac);
  }
  if header.starts_with(b"OggS") {
    return Some(AudioFormat::Ogg);
  }
  if header.starts_with(b"ID3") {
    return Some(AudioFormat::Mp3);
  }
  // MPEG audio frame sync: 11 set bits.
  if header.len() >= 2 && header[0] == 0xFF && header[1] & 0xE0 == 0xE0 {
    return Some(AudioFormat::Mp3);
  }
  None
}

/// Reads up to 12 header bytes. `Ok(None)` if the file does not exist.
async fn read_header(path: &Path) -> io::Result<Option<Vec<u8>>> {
  let mut file = match tokio::fs::File::open(path).await {
    Ok(f) => f,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
    Err(e) => return Err(e),
  };
  let mut header = Vec::with_capacity(12);
  (&mut file).take(12).read_to_end(&mut header).await?;
  Ok(Some(header))
}

/// Behavior of a [HeadlessRuntime].
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
  /// Whether a default output device exists.
  pub device_available: bool,
  /// Maximum number of live graphs; `None` for no limit.
  pub graph_limit: Option<usize>,
  /// Formats the input node can decode.
  pub supported_formats: HashSet<AudioFormat>,
  /// Simulated latency before each runtime operation.
  pub stage_delay: Duration,
}

impl Default for HeadlessConfig {
  fn default() -> Self {
    Self {
      device_available: true,
      graph_limit: None,
      supported_formats: [AudioFormat::Wav, AudioFormat::Mp3, AudioFormat::Flac]
        .into_iter()
        .collect(),
      stage_delay: Duration::ZERO,
    }
  }
}

#[derive(Debug, Default)]
struct HeadlessGraph {
  outputs: HashSet<OutputNodeId>,
  inputs: HashMap<InputNodeId, AudioFormat>,
  edges: Vec<(InputNodeId, OutputNodeId)>,
}

/// Audio runtime that keeps graphs in memory.
#[derive(Debug, Default)]
pub struct HeadlessRuntime {
  config: HeadlessConfig,
  graphs: Mutex<HashMap<GraphId, HeadlessGraph>>,
}

impl HeadlessRuntime {
  pub fn new(config: HeadlessConfig) -> Self {
    Self {
      config,
      graphs: Mutex::new(HashMap::new()),
    }
  }

  pub fn config(&self) -> &HeadlessConfig {
    &self.config
  }

  /// Number of graphs created and not yet released.
  pub fn live_graphs(&self) -> usize {
    self.lock().len()
  }

  /// Edges of `graph`, or `None` if the graph is not live.
  pub fn edges(&self, graph: GraphId) -> Option<Vec<(InputNodeId, OutputNodeId)>> {
    self.lock().get(&graph).map(|g| g.edges.clone())
  }

  /// Format decoded by `input` on `graph`.
  pub fn input_format(&self, graph: GraphId, input: InputNodeId) -> Option<AudioFormat> {
    self
      .lock()
      .get(&graph)
      .and_then(|g| g.inputs.get(&input).copied())
  }

  fn lock(&self) -> MutexGuard<'_, HashMap<GraphId, HeadlessGraph>> {
    self.graphs.lock().unwrap_or_else(PoisonError::into_inner)
  }

  async fn delay(&self) {
    if !self.config.stage_delay.is_zero() {
      tokio::time::sleep(self.config.stage_delay).await;
    }
  }
}

#[async_trait]
impl AudioRuntime for HeadlessRuntime {
  #[instrument(level = "trace", skip(self))]
  async fn create_graph(&self, settings: &GraphSettings) -> Created<GraphId, GraphCreationStatus> {
    self.delay().await;
    let mut graphs = self.lock();
    if self.config.graph_limit.is_some_and(|limit| graphs.len() >= limit) {
      return Created::failure(GraphCreationStatus::UnknownFailure);
    }
    let id = GraphId::new_v4();
    graphs.insert(id, HeadlessGraph::default());
    Created::success(id)
  }

  #[instrument(level = "trace", skip(self))]
  async fn create_device_output_node(
    &self,
    graph: GraphId,
  ) -> Created<OutputNodeId, DeviceNodeCreationStatus> {
    self.delay().await;
    if !self.config.device_available {
      return Created::failure(DeviceNodeCreationStatus::DeviceNotAvailable);
    }
    let mut graphs = self.lock();
    let Some(g) = graphs.get_mut(&graph) else {
      return Created::failure(DeviceNodeCreationStatus::UnknownFailure);
    };
    let id = OutputNodeId::new_v4();
    g.outputs.insert(id);
    Created::success(id)
  }

  #[instrument(level = "trace", skip(self, file), fields(path = %file.path.display()))]
  async fn create_file_input_node(
    &self,
    graph: GraphId,
    file: &ContentFile,
  ) -> Created<InputNodeId, FileNodeCreationStatus> {
    self.delay().await;
    let header = match read_header(&file.path).await {
      Ok(Some(h)) => h,
      Ok(None) => return Created::failure(FileNodeCreationStatus::FileNotFound),
      Err(e) => {
        trace!(error = %e, "header read failed");
        return Created::failure(FileNodeCreationStatus::UnknownFailure);
      }
    };
    if header.len() < 4 {
      return Created::failure(FileNodeCreationStatus::InvalidFileType);
    }
    let format = match sniff_format(&header) {
      Some(f) if self.config.supported_formats.contains(&f) => f,
      _ => return Created::failure(FileNodeCreationStatus::FormatNotSupported),
    };
    let mut graphs = self.lock();
    let Some(g) = graphs.get_mut(&graph) else {
      return Created::failure(FileNodeCreationStatus::UnknownFailure);
    };
    let id = InputNodeId::new_v4();
    g.inputs.insert(id, format);
    Created::success(id)
  }

  #[instrument(level = "trace", skip(self))]
  async fn connect(
    &self,
    graph: GraphId,
    input: InputNodeId,
    output: OutputNodeId,
  ) -> Result<(), WireError> {
    self.delay().await;
    let mut graphs = self.lock();
    let g = graphs
      .get_mut(&graph)
      .ok_or_else(|| WireError(format!("unknown graph {}", graph)))?;
    if !g.inputs.contains_key(&input) {
      return Err(WireError(format!("unknown input node {}", input)));
    }
    if !g.outputs.contains(&output) {
      return Err(WireError(format!("unknown output node {}", output)));
    }
    if g.edges.iter().any(|(i, _)| *i == input) {
      return Err(WireError(format!("input node {} is already connected", input)));
    }
    g.edges.push((input, output));
    Ok(())
  }

  fn release_graph(&self, graph: GraphId) {
    if self.lock().remove(&graph).is_some() {
      trace!(graph = %graph, "graph released");
    }
  }
}
