use crate::types::*;
use serde::{Deserialize, Serialize};

/// Messages a client may send to the relay.
///
/// Event names are kebab-case on the wire, carried in the `t` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum ClientMessage {
    /// A participant device opened the QR payload URL. Broadcast-only hint,
    /// no state mutation.
    #[serde(rename = "qr-scanned")]
    QrScanned { number: Number },

    /// Register (or re-register) a display name for a number.
    #[serde(rename = "submit-name")]
    SubmitName { number: Number, name: String },

    /// Host requests a fresh round: directory cleared, everyone notified.
    #[serde(rename = "reset-game")]
    ResetGame,
}

/// Messages the relay sends to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum ServerMessage {
    /// Greeting sent once per connection, before the initial snapshot.
    #[serde(rename = "welcome")]
    Welcome {
        protocol: String,
        role: Role,
        server_now: String,
    },

    /// Full directory snapshot. Sent to every subscriber after each mutation
    /// and to new subscribers immediately on connect.
    #[serde(rename = "participants-update")]
    ParticipantsUpdate { participants: Vec<Participant> },

    /// Relayed scan hint so the host session can auto-advance its draw.
    #[serde(rename = "qr-scanned-notification")]
    QrScannedNotification { number: Number },

    /// Explicit round reset, distinct from a snapshot that merely became
    /// empty.
    #[serde(rename = "game-reset")]
    GameReset,

    #[serde(rename = "error")]
    Error { code: String, msg: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_events_use_kebab_case_tags() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"t":"submit-name","number":7,"name":"Aoi"}"#).unwrap();
        match msg {
            ClientMessage::SubmitName { number, name } => {
                assert_eq!(number, 7);
                assert_eq!(name, "Aoi");
            }
            other => panic!("unexpected message: {:?}", other),
        }

        let msg: ClientMessage = serde_json::from_str(r#"{"t":"qr-scanned","number":42}"#).unwrap();
        assert!(matches!(msg, ClientMessage::QrScanned { number: 42 }));

        let msg: ClientMessage = serde_json::from_str(r#"{"t":"reset-game"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::ResetGame));
    }

    #[test]
    fn server_events_use_kebab_case_tags() {
        let json = serde_json::to_string(&ServerMessage::GameReset).unwrap();
        assert_eq!(json, r#"{"t":"game-reset"}"#);

        let json =
            serde_json::to_string(&ServerMessage::QrScannedNotification { number: 3 }).unwrap();
        assert_eq!(json, r#"{"t":"qr-scanned-notification","number":3}"#);

        let json = serde_json::to_string(&ServerMessage::ParticipantsUpdate {
            participants: vec![Participant {
                number: 7,
                name: "Aoi".to_string(),
                timestamp: 1700000000000,
            }],
        })
        .unwrap();
        assert!(json.starts_with(r#"{"t":"participants-update","participants":["#));
    }

    #[test]
    fn unknown_event_fails_to_parse() {
        let result = serde_json::from_str::<ClientMessage>(r#"{"t":"start-voting"}"#);
        assert!(result.is_err());
    }
}
