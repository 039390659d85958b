use chrono::{DateTime, Utc};

use super::{Document, StoragePath};

/// The most recently processed document and its extracted text.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSession {
    pub document: Document,
    pub text: String,
    pub storage_path: Option<StoragePath>,
    pub uploaded_at: DateTime<Utc>,
}

impl DocumentSession {
    pub fn new(document: Document, text: String, storage_path: Option<StoragePath>) -> Self {
        Self {
            document,
            text,
            storage_path,
            uploaded_at: Utc::now(),
        }
    }

    /// First `max_chars` characters of the text, never splitting a code point.
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }
}
