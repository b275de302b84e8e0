//! Tests for creation statuses and `Created`.

use super::{
  Created, CreationStatus, DeviceNodeCreationStatus, FileNodeCreationStatus, GraphCreationStatus,
};

#[test]
fn success_is_success() {
  assert!(GraphCreationStatus::Success.is_success());
  assert!(DeviceNodeCreationStatus::Success.is_success());
  assert!(FileNodeCreationStatus::Success.is_success());
}

#[test]
fn failures_are_not_success() {
  assert!(!GraphCreationStatus::DeviceNotAvailable.is_success());
  assert!(!DeviceNodeCreationStatus::AccessDenied.is_success());
  assert!(!FileNodeCreationStatus::FormatNotSupported.is_success());
}

#[test]
fn display_file_status() {
  assert_eq!(
    FileNodeCreationStatus::FormatNotSupported.to_string(),
    "format_not_supported"
  );
  assert_eq!(FileNodeCreationStatus::InvalidFileType.to_string(), "invalid_file_type");
}

#[test]
fn into_handle_success() {
  let c: Created<u32, GraphCreationStatus> = Created::success(7);
  assert_eq!(c.into_handle(), Ok(7));
}

#[test]
fn into_handle_failure_carries_status() {
  let c: Created<u32, DeviceNodeCreationStatus> =
    Created::failure(DeviceNodeCreationStatus::DeviceNotAvailable);
  assert_eq!(c.into_handle(), Err(DeviceNodeCreationStatus::DeviceNotAvailable));
}

#[test]
fn into_handle_success_without_handle_is_unknown_failure() {
  let c: Created<u32, FileNodeCreationStatus> = Created {
    status: FileNodeCreationStatus::Success,
    handle: None,
  };
  assert_eq!(c.into_handle(), Err(FileNodeCreationStatus::UnknownFailure));
}

#[test]
fn into_handle_failure_ignores_stray_handle() {
  let c: Created<u32, GraphCreationStatus> = Created {
    status: GraphCreationStatus::FormatNotSupported,
    handle: Some(1),
  };
  assert_eq!(c.into_handle(), Err(GraphCreationStatus::FormatNotSupported));
}
