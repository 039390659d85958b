use chrono::{DateTime, Duration, Utc};

use crate::domain::{AudioArtifact, AudioArtifactId, DocumentSession};

/// Holds the single document session and the registry of audio artifacts.
pub trait SessionStore: Send + Sync {
    /// Replaces the current session, returning the one it displaced.
    fn set_document(&self, session: DocumentSession) -> Option<DocumentSession>;

    fn document(&self) -> Option<DocumentSession>;

    /// Registers an artifact and returns any artifacts evicted to stay within
    /// capacity, oldest first.
    fn register_audio(&self, artifact: AudioArtifact) -> Vec<AudioArtifact>;

    fn resolve_audio(&self, id: &AudioArtifactId) -> Option<AudioArtifact>;

    fn remove_audio(&self, id: &AudioArtifactId) -> Option<AudioArtifact>;

    /// Removes and returns every artifact whose age is at least `ttl`.
    fn take_expired_audio(&self, now: DateTime<Utc>, ttl: Duration) -> Vec<AudioArtifact>;

    fn audio_count(&self) -> usize;
}
