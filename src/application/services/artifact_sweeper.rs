use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use super::speech_service::SpeechService;

const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Background task that evicts audio artifacts past their time to live.
pub struct ArtifactSweeper {
    speech_service: Arc<SpeechService>,
    interval: Duration,
    ttl: chrono::Duration,
}

impl ArtifactSweeper {
    pub fn new(speech_service: Arc<SpeechService>, interval: Duration, ttl: Duration) -> Self {
        Self {
            speech_service,
            interval: interval.max(MIN_INTERVAL),
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
        }
    }

    /// Runs one eviction pass and returns the number of artifacts removed.
    pub async fn sweep(&self) -> usize {
        let removed = self.speech_service.evict_expired(Utc::now(), self.ttl).await;
        if removed > 0 {
            tracing::info!(removed, "Expired audio artifacts evicted");
        }
        removed
    }

    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            ttl_secs = self.ttl.num_seconds(),
            "Artifact sweeper started"
        );
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            self.sweep().await;
        }
    }
}
