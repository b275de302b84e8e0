//! Status codes reported by the audio runtime for each creation call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shared behavior of the runtime's creation status codes.
pub trait CreationStatus: Copy + fmt::Debug + fmt::Display {
  /// Status to report when the runtime claims success but returns no handle.
  const UNKNOWN_FAILURE: Self;

  fn is_success(&self) -> bool;
}

/// Outcome of creating a render graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphCreationStatus {
  Success,
  DeviceNotAvailable,
  FormatNotSupported,
  UnknownFailure,
}

/// Outcome of creating a device output node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceNodeCreationStatus {
  Success,
  DeviceNotAvailable,
  FormatNotSupported,
  UnknownFailure,
  AccessDenied,
}

/// Outcome of creating a file input node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileNodeCreationStatus {
  Success,
  FileNotFound,
  InvalidFileType,
  FormatNotSupported,
  UnknownFailure,
}

impl CreationStatus for GraphCreationStatus {
  const UNKNOWN_FAILURE: Self = GraphCreationStatus::UnknownFailure;

  fn is_success(&self) -> bool {
    matches!(self, GraphCreationStatus::Success)
  }
}

impl CreationStatus for DeviceNodeCreationStatus {
  const UNKNOWN_FAILURE: Self = DeviceNodeCreationStatus::UnknownFailure;

  fn is_success(&self) -> bool {
    matches!(self, DeviceNodeCreationStatus::Success)
  }
}

impl CreationStatus for FileNodeCreationStatus {
  const UNKNOWN_FAILURE: Self = FileNodeCreationStatus::UnknownFailure;

  fn is_success(&self) -> bool {
    matches!(self, FileNodeCreationStatus::Success)
  }
}

impl fmt::Display for GraphCreationStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GraphCreationStatus::Success => write!(f, "success"),
      GraphCreationStatus::DeviceNotAvailable => write!(f, "device_not_available"),
      GraphCreationStatus::FormatNotSupported => write!(f, "format_not_supported"),
      GraphCreationStatus::UnknownFailure => write!(f, "unknown_failure"),
    }
  }
}

impl fmt::Display for DeviceNodeCreationStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DeviceNodeCreationStatus::Success => write!(f, "success"),
      DeviceNodeCreationStatus::DeviceNotAvailable => write!(f, "device_not_available"),
      DeviceNodeCreationStatus::FormatNotSupported => write!(f, "format_not_supported"),
      DeviceNodeCreationStatus::UnknownFailure => write!(f, "unknown_failure"),
      DeviceNodeCreationStatus::AccessDenied => write!(f, "access_denied"),
    }
  }
}

impl fmt::Display for FileNodeCreationStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FileNodeCreationStatus::Success => write!(f, "success"),
      FileNodeCreationStatus::FileNotFound => write!(f, "file_not_found"),
      FileNodeCreationStatus::InvalidFileType => write!(f, "invalid_file_type"),
      FileNodeCreationStatus::FormatNotSupported => write!(f, "format_not_supported"),
      FileNodeCreationStatus::UnknownFailure => write!(f, "unknown_failure"),
    }
  }
}

/// Result of one runtime creation call: a status and, on success, a handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created<H, S> {
  pub status: S,
  pub handle: Option<H>,
}

impl<H, S: CreationStatus> Created<H, S> {
  pub fn success(handle: H) -> Self
  where
    S: SuccessStatus,
  {
    Self {
      status: S::SUCCESS,
      handle: Some(handle),
    }
  }

  pub fn failure(status: S) -> Self {
    Self {
      status,
      handle: None,
    }
  }

  /// Returns the handle if the status is a success and a handle is present.
  /// A success status without a handle is reported as [CreationStatus::UNKNOWN_FAILURE].
  pub fn into_handle(self) -> Result<H, S> {
    if !self.status.is_success() {
      return Err(self.status);
    }
    self.handle.ok_or(S::UNKNOWN_FAILURE)
  }
}

/// Status codes with a success variant, used by [Created::success].
pub trait SuccessStatus: CreationStatus {
  const SUCCESS: Self;
}

impl SuccessStatus for GraphCreationStatus {
  const SUCCESS: Self = GraphCreationStatus::Success;
}

impl SuccessStatus for DeviceNodeCreationStatus {
  const SUCCESS: Self = DeviceNodeCreationStatus::Success;
}

impl SuccessStatus for FileNodeCreationStatus {
  const SUCCESS: Self = FileNodeCreationStatus::Success;
}
