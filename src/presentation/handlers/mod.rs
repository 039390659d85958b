mod audio;
mod error;
mod health;
mod index;
mod query;
mod upload;

pub use audio::{AUDIO_MIME, audio_handler};
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use index::index_handler;
pub use query::query_ai_handler;
pub use upload::{DOCUMENT_FIELD, upload_and_process_handler};
