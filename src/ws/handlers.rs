//! WebSocket message dispatch
//!
//! Payloads are validated here before any state is touched; valid events
//! fan out through the broadcast channel and need no direct reply.

use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use crate::types::{Number, Role};
use std::sync::Arc;

use crate::game::{POOL_MAX, POOL_MIN};

fn check_number(number: Number) -> Result<(), ServerMessage> {
    if (POOL_MIN..=POOL_MAX).contains(&number) {
        Ok(())
    } else {
        Err(ServerMessage::Error {
            code: "INVALID_NUMBER".to_string(),
            msg: format!(
                "number must be between {} and {}, got {}",
                POOL_MIN, POOL_MAX, number
            ),
        })
    }
}

/// Handle client messages and return optional response
pub async fn handle_message(
    msg: ClientMessage,
    role: &Role,
    state: &Arc<AppState>,
) -> Option<ServerMessage> {
    match msg {
        ClientMessage::QrScanned { number } => {
            if let Err(error) = check_number(number) {
                return Some(error);
            }
            state.notify_scanned(number).await;
            None
        }

        ClientMessage::SubmitName { number, name } => {
            if let Err(error) = check_number(number) {
                return Some(error);
            }
            let name = name.trim();
            if name.is_empty() {
                return Some(ServerMessage::Error {
                    code: "EMPTY_NAME".to_string(),
                    msg: "name must not be empty".to_string(),
                });
            }
            state.submit_name(number, name.to_string()).await;
            None
        }

        ClientMessage::ResetGame => {
            tracing::info!(?role, "Reset requested");
            state.reset_game().await;
            None
        }
    }
}
