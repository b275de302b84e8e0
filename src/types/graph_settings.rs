//! Settings passed to the runtime when creating a graph.

use serde::{Deserialize, Serialize};

use super::AudioRenderCategory;

/// Settings for a new render graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphSettings {
  pub category: AudioRenderCategory,
}

impl GraphSettings {
  pub fn new(category: AudioRenderCategory) -> Self {
    Self { category }
  }
}
