//! Usage-category hint passed to the audio runtime when a graph is created.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Usage-category hint for a render graph.
///
/// The runtime may use the category to pick latency and ducking behavior.
/// Sound-effect style playback uses [AudioRenderCategory::GameEffects].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioRenderCategory {
  Other,
  ForegroundOnlyMedia,
  Communications,
  Alerts,
  SoundEffects,
  #[default]
  GameEffects,
  GameMedia,
  GameChat,
  Speech,
  Movie,
  Media,
}

impl AudioRenderCategory {
  /// All categories, in declaration order.
  pub const ALL: [AudioRenderCategory; 11] = [
    AudioRenderCategory::Other,
    AudioRenderCategory::ForegroundOnlyMedia,
    AudioRenderCategory::Communications,
    AudioRenderCategory::Alerts,
    AudioRenderCategory::SoundEffects,
    AudioRenderCategory::GameEffects,
    AudioRenderCategory::GameMedia,
    AudioRenderCategory::GameChat,
    AudioRenderCategory::Speech,
    AudioRenderCategory::Movie,
    AudioRenderCategory::Media,
  ];

  /// Parses the snake_case name used by [fmt::Display] and serde.
  pub fn from_name(name: &str) -> Option<Self> {
    let name = name.trim().to_lowercase();
    Self::ALL.into_iter().find(|c| c.to_string() == name)
  }
}

impl fmt::Display for AudioRenderCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      AudioRenderCategory::Other => "other",
      AudioRenderCategory::ForegroundOnlyMedia => "foreground_only_media",
      AudioRenderCategory::Communications => "communications",
      AudioRenderCategory::Alerts => "alerts",
      AudioRenderCategory::SoundEffects => "sound_effects",
      AudioRenderCategory::GameEffects => "game_effects",
      AudioRenderCategory::GameMedia => "game_media",
      AudioRenderCategory::GameChat => "game_chat",
      AudioRenderCategory::Speech => "speech",
      AudioRenderCategory::Movie => "movie",
      AudioRenderCategory::Media => "media",
    };
    write!(f, "{}", s)
  }
}
