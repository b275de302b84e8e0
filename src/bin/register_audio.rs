//! CLI: register named sounds against a headless audio runtime.
//!
//! Every `NAME=PATH` pair is registered concurrently on one engine; duplicate
//! names and build failures are reported per pair.
//!
//! Usage: `register_audio [OPTIONS] <NAME=PATH>...`
//! Example: register_audio --content-root ./content ding='Audio\ding.wav' buzz=Audio/buzz.wav
//!
//! Set RUST_LOG=audio_graph_registry=trace for TRACE-level span enter/exit and events.

use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use audio_graph_registry::{
  AudioEngine, AudioRenderCategory, EngineConfig, HeadlessConfig, HeadlessRuntime, load_config,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Parses a `NAME=PATH` argument.
fn parse_registration(s: &str) -> Result<(String, String), String> {
  let (name, path) = s
    .split_once('=')
    .ok_or_else(|| format!("expected NAME=PATH, got {:?}", s))?;
  let name = name.trim();
  if name.is_empty() {
    return Err(format!("empty name in {:?}", s));
  }
  Ok((name.to_string(), path.to_string()))
}

fn parse_category(s: &str) -> Result<AudioRenderCategory, String> {
  AudioRenderCategory::from_name(s).ok_or_else(|| format!("unknown render category {:?}", s))
}

/// Register named sounds and report the result of each registration.
#[derive(Parser, Debug)]
#[command(name = "register_audio")]
#[command(after_help = r#"Environment variables:
  AUDIO_CONTENT_ROOT   Content directory; overrides --content-root and the config file.

Examples:
  register_audio --content-root ./content ding=Audio/ding.wav
  register_audio --config audio-engine.json --json ding=Audio/ding.wav buzz=Audio/buzz.wav"#)]
struct Args {
  /// JSON engine config: {"content_root": DIR, "category": CATEGORY}. A relative
  /// content_root is taken relative to the config file.
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Directory content paths are resolved against. Overridden by AUDIO_CONTENT_ROOT if set.
  #[arg(long, value_name = "DIR")]
  content_root: Option<PathBuf>,

  /// Render category hint, e.g. game_effects, alerts.
  #[arg(long, value_name = "CATEGORY", value_parser = parse_category)]
  category: Option<AudioRenderCategory>,

  /// Simulate a machine without an output device.
  #[arg(long)]
  no_device: bool,

  /// Print the registry snapshot as JSON instead of one line per registration.
  #[arg(long)]
  json: bool,

  /// Registrations as NAME=PATH
  #[arg(value_name = "NAME=PATH", required = true, value_parser = parse_registration)]
  registrations: Vec<(String, String)>,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let mut config = match &args.config {
    Some(path) => match load_config(path) {
      Ok(c) => c,
      Err(e) => {
        match std::error::Error::source(&e) {
          Some(cause) => eprintln!("error: {}: {}", e, cause),
          None => eprintln!("error: {}", e),
        }
        process::exit(1);
      }
    },
    None => EngineConfig::default(),
  };
  // Env var beats flag beats config file.
  if let Some(root) = env::var_os("AUDIO_CONTENT_ROOT")
    .map(PathBuf::from)
    .or_else(|| args.content_root.clone())
  {
    config.content_root = root;
  }
  if let Some(category) = args.category {
    config.category = category;
  }
  info!(content_root = %config.content_root.display(), category = %config.category, no_device = args.no_device, "options");

  let runtime = Arc::new(HeadlessRuntime::new(HeadlessConfig {
    device_available: !args.no_device,
    ..Default::default()
  }));
  let engine = AudioEngine::new(config, runtime);

  let results = futures::future::join_all(
    args
      .registrations
      .iter()
      .map(|(name, path)| engine.register_audio(name, path)),
  )
  .await;

  let mut failed = false;
  for ((name, _), result) in args.registrations.iter().zip(&results) {
    match result {
      Ok(graph) => {
        if !args.json {
          println!("registered {} ({})", name, graph.source().relative_path);
        }
      }
      Err(e) => {
        failed = true;
        eprintln!("error: {}", e);
      }
    }
  }

  if args.json {
    match serde_json::to_string_pretty(&engine.registry().snapshot()) {
      Ok(json) => println!("{}", json),
      Err(e) => {
        eprintln!("Error serializing snapshot: {}", e);
        process::exit(1);
      }
    }
  }

  if failed {
    process::exit(1);
  }
}
