//! # audio-graph-registry
//!
//! Pre-build audio playback graphs once and address them by name.
//!
//! ## Architecture
//!
//! - [GraphBuilder] turns a content path into a wired [AudioGraph]:
//!   graph → device output node → file lookup → file input node → connect.
//!   Each stage is a suspend point and the first failure is returned as a
//!   typed [BuildError].
//! - [GraphRegistry] maps names to graphs, at most one per name, using
//!   reserve → build → commit so concurrent registrations cannot both win.
//! - [AudioEngine] is the startup wiring from an [EngineConfig].
//!
//! The platform audio subsystem is the [AudioRuntime] trait;
//! [HeadlessRuntime] implements it in memory.

pub mod builder;
pub mod config_io;
pub mod content;
pub mod engine;
#[cfg(test)]
mod engine_test;
pub mod error;
pub mod graph;
pub mod headless;
pub mod registry;
pub mod runtime;
#[cfg(test)]
pub(crate) mod test_support;
pub mod types;

pub use builder::GraphBuilder;
pub use config_io::{ConfigError, EngineConfig, load_config, save_config};
pub use content::{ContentResolver, InstalledContent};
pub use engine::AudioEngine;
pub use error::{BuildError, RegistrationError, WireError};
pub use graph::AudioGraph;
pub use headless::{AudioFormat, HeadlessConfig, HeadlessRuntime};
pub use registry::{GraphRegistry, RegistrationRecord};
pub use runtime::AudioRuntime;
pub use types::{AudioRenderCategory, ContentFile, GraphId, InputNodeId, OutputNodeId};
