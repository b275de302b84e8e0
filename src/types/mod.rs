//! Data types shared by the runtime seam, the builder and the registry.

mod content_file;
mod creation_status;
#[cfg(test)]
mod creation_status_test;
mod graph_settings;
mod handles;
mod messages;
mod render_category;

pub use content_file::ContentFile;
pub use creation_status::{
  Created, CreationStatus, DeviceNodeCreationStatus, FileNodeCreationStatus, GraphCreationStatus,
  SuccessStatus,
};
pub use graph_settings::GraphSettings;
pub use handles::{GraphId, InputNodeId, OutputNodeId};
pub use messages::{
  MediaSource, PlayFileMessage, PlayMediaSourceMessage, PlayMessage, PlaySoundMessage,
};
pub use render_category::AudioRenderCategory;
