use std::collections::{HashMap, VecDeque};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};

use crate::application::ports::SessionStore;
use crate::domain::{AudioArtifact, AudioArtifactId, DocumentSession};

#[derive(Default)]
struct SessionState {
    document: Option<DocumentSession>,
    artifacts: HashMap<AudioArtifactId, AudioArtifact>,
    // Registration order, oldest at the front.
    order: VecDeque<AudioArtifactId>,
}

impl SessionState {
    fn remove(&mut self, id: &AudioArtifactId) -> Option<AudioArtifact> {
        let removed = self.artifacts.remove(id)?;
        self.order.retain(|entry| entry != id);
        Some(removed)
    }
}

/// Process-local session store. Every operation takes the lock only for the
/// in-memory update; callers never hold it across I/O.
pub struct InMemorySessionStore {
    state: RwLock<SessionState>,
    max_artifacts: usize,
}

impl InMemorySessionStore {
    pub fn new(max_artifacts: usize) -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            max_artifacts: max_artifacts.max(1),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for InMemorySessionStore {
    fn set_document(&self, session: DocumentSession) -> Option<DocumentSession> {
        self.write().document.replace(session)
    }

    fn document(&self) -> Option<DocumentSession> {
        self.read().document.clone()
    }

    fn register_audio(&self, artifact: AudioArtifact) -> Vec<AudioArtifact> {
        let mut state = self.write();
        let id = artifact.id.clone();
        if state.artifacts.insert(id.clone(), artifact).is_none() {
            state.order.push_back(id);
        }

        let mut evicted = Vec::new();
        while state.artifacts.len() > self.max_artifacts {
            let Some(oldest) = state.order.pop_front() else {
                break;
            };
            if let Some(artifact) = state.artifacts.remove(&oldest) {
                evicted.push(artifact);
            }
        }
        evicted
    }

    fn resolve_audio(&self, id: &AudioArtifactId) -> Option<AudioArtifact> {
        self.read().artifacts.get(id).cloned()
    }

    fn remove_audio(&self, id: &AudioArtifactId) -> Option<AudioArtifact> {
        self.write().remove(id)
    }

    fn take_expired_audio(&self, now: DateTime<Utc>, ttl: Duration) -> Vec<AudioArtifact> {
        let mut state = self.write();
        let expired: Vec<AudioArtifactId> = state
            .order
            .iter()
            .filter(|id| {
                state
                    .artifacts
                    .get(*id)
                    .is_some_and(|a| a.is_expired(now, ttl))
            })
            .cloned()
            .collect();

        expired.iter().filter_map(|id| state.remove(id)).collect()
    }

    fn audio_count(&self) -> usize {
        self.read().artifacts.len()
    }
}
