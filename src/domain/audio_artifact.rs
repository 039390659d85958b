use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::StoragePath;

const AUDIO_EXTENSION: &str = "mp3";

/// Opaque, filename-like token that clients use to fetch synthesized audio.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AudioArtifactId(String);

impl AudioArtifactId {
    pub fn new() -> Self {
        Self(format!("{}.{}", Uuid::new_v4(), AUDIO_EXTENSION))
    }

    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Relative URL under which the artifact is served.
    pub fn audio_url(&self) -> String {
        format!("/audio/{}", self.0)
    }
}

impl Default for AudioArtifactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AudioArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioArtifact {
    pub id: AudioArtifactId,
    pub path: StoragePath,
    pub size_bytes: u64,
    pub created_at: DateTime<Utc>,
}

impl AudioArtifact {
    pub fn new(id: AudioArtifactId, size_bytes: u64) -> Self {
        let path = StoragePath::for_audio(&id);
        Self {
            id,
            path,
            size_bytes,
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: chrono::Duration) -> bool {
        now.signed_duration_since(self.created_at) >= ttl
    }
}
