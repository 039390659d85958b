mod blob_store;
mod file_loader;
mod llm_client;
mod session_store;
mod speech_synthesizer;

pub use blob_store::{BlobStore, BlobStoreError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use session_store::SessionStore;
pub use speech_synthesizer::{SpeechSynthesizer, SpeechSynthesisError};
