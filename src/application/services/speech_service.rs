use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::application::ports::{
    BlobStore, BlobStoreError, SessionStore, SpeechSynthesisError, SpeechSynthesizer,
};
use crate::domain::{AudioArtifact, AudioArtifactId};

/// Turns model replies into stored, addressable audio artifacts.
pub struct SpeechService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    blob_store: Arc<dyn BlobStore>,
    session_store: Arc<dyn SessionStore>,
}

impl SpeechService {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        blob_store: Arc<dyn BlobStore>,
        session_store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            synthesizer,
            blob_store,
            session_store,
        }
    }

    /// Synthesizes `text` into a fresh artifact. Identical text still yields a
    /// new id.
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn synthesize(&self, text: &str) -> Result<AudioArtifact, SpeechServiceError> {
        if text.trim().is_empty() {
            return Err(SpeechServiceError::Synthesis(SpeechSynthesisError::EmptyInput));
        }

        let audio = self.synthesizer.synthesize(text).await?;
        let artifact = AudioArtifact::new(AudioArtifactId::new(), audio.len() as u64);

        let written = self
            .blob_store
            .store(&artifact.path, Bytes::from(audio))
            .await?;

        tracing::info!(
            artifact_id = %artifact.id,
            bytes = written,
            "Audio artifact stored"
        );

        let evicted = self.session_store.register_audio(artifact.clone());
        if !evicted.is_empty() {
            tracing::debug!(count = evicted.len(), "Evicting artifacts over capacity");
            self.delete_blobs(&evicted).await;
        }

        Ok(artifact)
    }

    /// Reads an artifact's bytes. Artifacts whose blob disappeared are dropped
    /// from the registry and reported as not found.
    pub async fn fetch(&self, id: &AudioArtifactId) -> Result<Vec<u8>, SpeechServiceError> {
        let artifact = self
            .session_store
            .resolve_audio(id)
            .ok_or_else(|| SpeechServiceError::NotFound(id.to_string()))?;

        match self.blob_store.fetch(&artifact.path).await {
            Ok(bytes) => Ok(bytes),
            Err(BlobStoreError::NotFound(_)) => {
                tracing::warn!(artifact_id = %id, "Audio blob missing, dropping registry entry");
                self.session_store.remove_audio(id);
                Err(SpeechServiceError::NotFound(id.to_string()))
            }
            Err(e) => Err(SpeechServiceError::Storage(e)),
        }
    }

    /// Removes artifacts older than `ttl` together with their blobs.
    pub async fn evict_expired(&self, now: DateTime<Utc>, ttl: chrono::Duration) -> usize {
        let expired = self.session_store.take_expired_audio(now, ttl);
        self.delete_blobs(&expired).await;
        expired.len()
    }

    async fn delete_blobs(&self, artifacts: &[AudioArtifact]) {
        for artifact in artifacts {
            if let Err(e) = self.blob_store.delete(&artifact.path).await {
                tracing::warn!(
                    error = %e,
                    artifact_id = %artifact.id,
                    path = %artifact.path,
                    "Failed to delete audio blob"
                );
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("synthesis: {0}")]
    Synthesis(#[from] SpeechSynthesisError),
    #[error("storage: {0}")]
    Storage(#[from] BlobStoreError),
    #[error("audio artifact not found: {0}")]
    NotFound(String),
}
