//! Tests for `AudioEngine`.

use std::sync::Arc;

use crate::config_io::EngineConfig;
use crate::engine::AudioEngine;
use crate::error::RegistrationError;
use crate::headless::{HeadlessConfig, HeadlessRuntime};
use crate::test_support::content_dir;
use crate::types::AudioRenderCategory;

#[tokio::test]
async fn register_audio_uses_configured_root_and_category() {
  let dir = content_dir();
  let runtime = Arc::new(HeadlessRuntime::new(HeadlessConfig::default()));
  let engine = AudioEngine::new(
    EngineConfig {
      content_root: dir.path().to_path_buf(),
      category: AudioRenderCategory::Alerts,
    },
    runtime.clone(),
  );

  let graph = engine
    .register_audio("ding", r"Audio\ding.wav")
    .await
    .expect("register");
  assert_eq!(graph.category(), AudioRenderCategory::Alerts);
  assert_eq!(graph.source().path, dir.path().join("Audio/ding.wav"));
  assert_eq!(engine.config().category, AudioRenderCategory::Alerts);

  let registry = engine.registry();
  assert!(Arc::ptr_eq(&registry.get("ding").expect("ding"), &graph));
  assert_eq!(runtime.live_graphs(), 1);
}

#[tokio::test]
async fn registry_handle_shares_state_with_engine() {
  let dir = content_dir();
  let engine = AudioEngine::new(
    EngineConfig {
      content_root: dir.path().to_path_buf(),
      ..Default::default()
    },
    Arc::new(HeadlessRuntime::default()),
  );
  let registry = engine.registry();
  registry.register("ding", "Audio/ding.wav").await.expect("register");

  let err = engine.register_audio("ding", "Audio/other.wav").await.unwrap_err();
  assert!(matches!(err, RegistrationError::AlreadyRegistered(_)));
}
