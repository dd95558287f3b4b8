use super::AppState;
use crate::protocol::ServerMessage;
use crate::types::*;

impl AppState {
    /// Current full directory, in arrival order.
    pub async fn snapshot(&self) -> Vec<Participant> {
        self.participants.read().await.clone()
    }

    /// Upsert the entry for `number` and broadcast the new snapshot.
    ///
    /// Last write wins: a re-registration replaces the earlier name and
    /// timestamp but keeps the entry's position in the list.
    pub async fn submit_name(&self, number: Number, name: String) -> Vec<Participant> {
        let entry = Participant {
            number,
            name,
            timestamp: chrono::Utc::now().timestamp_millis(),
        };

        let snapshot = {
            let mut participants = self.participants.write().await;
            match participants.iter_mut().find(|p| p.number == number) {
                Some(existing) => *existing = entry,
                None => participants.push(entry),
            }
            participants.clone()
        };

        tracing::info!(number, count = snapshot.len(), "Name submitted");
        self.broadcast_to_all(ServerMessage::ParticipantsUpdate {
            participants: snapshot.clone(),
        });
        snapshot
    }

    /// Relay a scan hint to everyone. Not a state mutation.
    pub async fn notify_scanned(&self, number: Number) {
        tracing::info!(number, "QR scanned");
        self.broadcast_to_all(ServerMessage::QrScannedNotification { number });
    }

    /// Clear the directory and tell every subscriber, with a distinct reset
    /// signal on top of the empty snapshot.
    pub async fn reset_game(&self) {
        self.participants.write().await.clear();

        tracing::info!("Game reset requested");
        self.broadcast_to_all(ServerMessage::ParticipantsUpdate {
            participants: Vec::new(),
        });
        self.broadcast_to_all(ServerMessage::GameReset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn submit_name_appends_in_arrival_order() {
        let state = AppState::new();

        state.submit_name(7, "Aoi".to_string()).await;
        state.submit_name(3, "Ren".to_string()).await;

        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].number, 7);
        assert_eq!(snapshot[1].number, 3);
    }

    #[tokio::test]
    async fn resubmission_keeps_position_but_takes_the_new_name() {
        let state = AppState::new();

        state.submit_name(3, "A".to_string()).await;
        state.submit_name(5, "C".to_string()).await;
        let snapshot = state.submit_name(3, "B".to_string()).await;

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].number, 3);
        assert_eq!(snapshot[0].name, "B");
        assert_eq!(snapshot[1].name, "C");
    }

    #[tokio::test]
    async fn reset_game_clears_and_signals_both_messages() {
        let state = AppState::new();
        let mut rx = state.broadcast.subscribe();

        state.submit_name(7, "Aoi".to_string()).await;
        rx.recv().await.unwrap(); // snapshot from the submit

        state.reset_game().await;

        assert!(state.snapshot().await.is_empty());
        match rx.recv().await.unwrap() {
            ServerMessage::ParticipantsUpdate { participants } => {
                assert!(participants.is_empty())
            }
            other => panic!("expected empty snapshot, got {:?}", other),
        }
        assert!(matches!(rx.recv().await.unwrap(), ServerMessage::GameReset));
    }

    #[tokio::test]
    async fn scan_notification_does_not_touch_the_directory() {
        let state = AppState::new();
        let mut rx = state.broadcast.subscribe();

        state.notify_scanned(42).await;

        assert!(state.snapshot().await.is_empty());
        assert!(matches!(
            rx.recv().await.unwrap(),
            ServerMessage::QrScannedNotification { number: 42 }
        ));
    }
}
