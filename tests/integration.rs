//! End-to-end registration through the public API against real files.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use audio_graph_registry::{
  AudioEngine, AudioRenderCategory, BuildError, EngineConfig, HeadlessConfig, HeadlessRuntime,
  RegistrationError, load_config, save_config, types::FileNodeCreationStatus,
};

const WAV: &[u8] = b"RIFF\x24\x00\x00\x00WAVEfmt \x10\x00\x00\x00";

fn write_content(root: &Path) {
  fs::create_dir_all(root.join("Audio")).unwrap();
  fs::write(root.join("Audio/ding.wav"), WAV).unwrap();
  fs::write(root.join("Audio/other.wav"), WAV).unwrap();
  fs::write(root.join("Audio/voice.opus"), b"OpusHead\x01\x02\x38\x01").unwrap();
}

fn engine(root: &Path, runtime: Arc<HeadlessRuntime>) -> AudioEngine {
  AudioEngine::new(
    EngineConfig {
      content_root: root.to_path_buf(),
      category: AudioRenderCategory::GameEffects,
    },
    runtime,
  )
}

#[tokio::test]
async fn happy_path_then_duplicate() {
  let dir = tempfile::tempdir().unwrap();
  write_content(dir.path());
  let runtime = Arc::new(HeadlessRuntime::default());
  let engine = engine(dir.path(), runtime.clone());

  let ding = engine.register_audio("ding", "Audio/ding.wav").await.unwrap();
  assert_eq!(
    runtime.edges(ding.id()),
    Some(vec![(ding.input_node(), ding.output_node())])
  );

  let err = engine
    .register_audio("ding", "Audio/other.wav")
    .await
    .unwrap_err();
  assert!(matches!(err, RegistrationError::AlreadyRegistered(ref n) if n == "ding"));
  assert_eq!(err.to_string(), "ding is already registered");
}

#[tokio::test]
async fn missing_file_scenario() {
  let dir = tempfile::tempdir().unwrap();
  write_content(dir.path());
  let engine = engine(dir.path(), Arc::new(HeadlessRuntime::default()));

  let err = engine
    .register_audio("missing", "Audio/nope.wav")
    .await
    .unwrap_err();
  assert!(matches!(err.build_error(), Some(BuildError::FileNotFound(_))));
  assert!(engine.registry().get("missing").is_none());
}

#[tokio::test]
async fn unsupported_codec_scenario() {
  let dir = tempfile::tempdir().unwrap();
  write_content(dir.path());
  let runtime = Arc::new(HeadlessRuntime::default());
  let engine = engine(dir.path(), runtime.clone());

  let err = engine
    .register_audio("voice", "Audio/voice.opus")
    .await
    .unwrap_err();
  assert!(matches!(
    err.build_error(),
    Some(BuildError::InputNodeCreationFailed(
      FileNodeCreationStatus::FormatNotSupported
    ))
  ));
  assert!(engine.registry().is_empty());
  assert_eq!(runtime.live_graphs(), 0);
}

#[tokio::test]
async fn no_device_reports_output_stage() {
  let dir = tempfile::tempdir().unwrap();
  write_content(dir.path());
  let engine = engine(
    dir.path(),
    Arc::new(HeadlessRuntime::new(HeadlessConfig {
      device_available: false,
      ..Default::default()
    })),
  );

  let err = engine
    .register_audio("ding", "Audio/nope.wav")
    .await
    .unwrap_err();
  assert_eq!(err.build_error().map(BuildError::stage), Some("create_output_node"));
}

#[tokio::test]
async fn engine_from_saved_config() {
  let dir = tempfile::tempdir().unwrap();
  write_content(dir.path());
  let config_path = dir.path().join("audio-engine.json");
  save_config(
    &config_path,
    &EngineConfig {
      content_root: dir.path().to_path_buf(),
      category: AudioRenderCategory::Alerts,
    },
  )
  .unwrap();

  let config = load_config(&config_path).unwrap();
  let engine = AudioEngine::new(config, Arc::new(HeadlessRuntime::default()));
  let graph = engine.register_audio("ding", r"Audio\ding.wav").await.unwrap();
  assert_eq!(graph.category(), AudioRenderCategory::Alerts);
}
