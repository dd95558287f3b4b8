mod directory;

use crate::protocol::ServerMessage;
use crate::topics::TopicService;
use crate::types::*;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Shared relay state.
///
/// Explicitly constructed and injected (never a module-level singleton) so
/// each test gets its own directory with a defined lifecycle: created at
/// process start, cleared by `reset-game`.
#[derive(Clone)]
pub struct AppState {
    /// Directory entries in arrival order.
    pub participants: Arc<RwLock<Vec<Participant>>>,
    /// Broadcast channel fanning server messages out to every connection.
    pub broadcast: broadcast::Sender<ServerMessage>,
    pub topics: Arc<TopicService>,
}

impl AppState {
    pub fn new() -> Self {
        Self::new_with_topics(TopicService::disabled())
    }

    pub fn new_with_topics(topics: TopicService) -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self {
            participants: Arc::new(RwLock::new(Vec::new())),
            broadcast: tx,
            topics: Arc::new(topics),
        }
    }

    /// Fire-and-forget fan-out; a send with no live subscribers is fine.
    pub fn broadcast_to_all(&self, msg: ServerMessage) {
        let _ = self.broadcast.send(msg);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_state_starts_with_an_empty_directory() {
        let state = AppState::new();
        assert!(state.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn broadcast_without_subscribers_is_dropped_silently() {
        let state = AppState::new();
        // No receiver exists; this must not panic or error out.
        state.broadcast_to_all(ServerMessage::GameReset);
    }
}
