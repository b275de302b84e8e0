//! Opaque identifiers handed out by the audio runtime.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! runtime_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct $name(pub Uuid);

    impl $name {
      /// Allocates a fresh random id.
      pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
      }
    }
  };
}

runtime_id!(
  /// Identifies a render graph on the runtime.
  GraphId
);
runtime_id!(
  /// Identifies a device output node on the runtime.
  OutputNodeId
);
runtime_id!(
  /// Identifies a file input node on the runtime.
  InputNodeId
);
