//! Error types for graph construction and registration.

use std::io;

use thiserror::Error;

use crate::types::{DeviceNodeCreationStatus, FileNodeCreationStatus, GraphCreationStatus};

/// Failure reported by the runtime's connect operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct WireError(pub String);

/// Failure at one stage of building a graph.
///
/// Each variant names the first stage that failed; later stages never run.
#[derive(Debug, Error)]
pub enum BuildError {
  #[error("could not create an audio graph: {0}")]
  GraphCreationFailed(GraphCreationStatus),

  #[error("could not create a device output node: {0}")]
  OutputNodeCreationFailed(DeviceNodeCreationStatus),

  #[error("file not found in installed content: {0:?}")]
  FileNotFound(String),

  #[error("could not look up {path:?} in installed content")]
  FileUnreadable {
    path: String,
    #[source]
    source: io::Error,
  },

  #[error("cannot read input file because {0}")]
  InputNodeCreationFailed(FileNodeCreationStatus),

  #[error("could not connect input node to output node: {0}")]
  WireFailed(#[source] WireError),
}

impl BuildError {
  /// Short stable name of the failing stage, used as a log field.
  pub fn stage(&self) -> &'static str {
    match self {
      BuildError::GraphCreationFailed(_) => "create_graph",
      BuildError::OutputNodeCreationFailed(_) => "create_output_node",
      BuildError::FileNotFound(_) | BuildError::FileUnreadable { .. } => "resolve_file",
      BuildError::InputNodeCreationFailed(_) => "create_input_node",
      BuildError::WireFailed(_) => "connect",
    }
  }
}

/// Failure to register a named graph.
#[derive(Debug, Error)]
pub enum RegistrationError {
  #[error("{0} is already registered")]
  AlreadyRegistered(String),

  #[error("failed to register {name}: {source}")]
  BuildFailed {
    name: String,
    #[source]
    source: BuildError,
  },
}

impl RegistrationError {
  /// Name the registration was attempted under.
  pub fn name(&self) -> &str {
    match self {
      RegistrationError::AlreadyRegistered(name) => name,
      RegistrationError::BuildFailed { name, .. } => name,
    }
  }

  /// Underlying build failure, if the build ran and failed.
  pub fn build_error(&self) -> Option<&BuildError> {
    match self {
      RegistrationError::AlreadyRegistered(_) => None,
      RegistrationError::BuildFailed { source, .. } => Some(source),
    }
  }
}
