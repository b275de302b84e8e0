//! Playback request payloads.
//!
//! These only carry a request intent from a caller to a playback dispatcher;
//! the registry never consumes them.

use serde::{Deserialize, Serialize};

use super::ContentFile;

/// Request to play a file identified by its content path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayFileMessage {
  file_path: String,
}

impl PlayFileMessage {
  pub fn new(file_path: impl Into<String>) -> Self {
    Self {
      file_path: file_path.into(),
    }
  }

  pub fn file_path(&self) -> &str {
    &self.file_path
  }
}

/// A pre-built media source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaSource {
  File(ContentFile),
  Uri(String),
}

/// Request to play a pre-built media source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayMediaSourceMessage {
  media_source: MediaSource,
}

impl PlayMediaSourceMessage {
  pub fn new(media_source: MediaSource) -> Self {
    Self { media_source }
  }

  pub fn media_source(&self) -> &MediaSource {
    &self.media_source
  }
}

/// Request to play an already resolved file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaySoundMessage {
  audio_file: ContentFile,
}

impl PlaySoundMessage {
  pub fn new(audio_file: ContentFile) -> Self {
    Self { audio_file }
  }

  pub fn audio_file(&self) -> &ContentFile {
    &self.audio_file
  }
}

/// Any playback request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayMessage {
  File(PlayFileMessage),
  MediaSource(PlayMediaSourceMessage),
  Sound(PlaySoundMessage),
}

impl From<PlayFileMessage> for PlayMessage {
  fn from(m: PlayFileMessage) -> Self {
    PlayMessage::File(m)
  }
}

impl From<PlayMediaSourceMessage> for PlayMessage {
  fn from(m: PlayMediaSourceMessage) -> Self {
    PlayMessage::MediaSource(m)
  }
}

impl From<PlaySoundMessage> for PlayMessage {
  fn from(m: PlaySoundMessage) -> Self {
    PlayMessage::Sound(m)
  }
}
