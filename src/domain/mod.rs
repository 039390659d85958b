mod audio_artifact;
mod document;
mod document_session;
mod storage_path;

pub use audio_artifact::{AudioArtifact, AudioArtifactId};
pub use document::{Document, DocumentFormat, DocumentId};
pub use document_session::DocumentSession;
pub use storage_path::StoragePath;
