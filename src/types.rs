use serde::{Deserialize, Serialize};

/// A lottery number. Valid values are 1..=100; message handlers validate the
/// range before touching any state.
pub type Number = u8;

/// Directory entry for one registered participant, keyed by `number`.
/// A later registration under the same number replaces the earlier one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    pub number: Number,
    pub name: String,
    /// Unix timestamp in milliseconds, stamped by the relay at registration.
    pub timestamp: i64,
}

/// A name/number pairing created at draw time. Immutable within a round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub number: Number,
}

/// A discussion topic produced by the topic provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topic {
    pub id: u32,
    pub theme: String,
}

/// Connection role, taken from the `role` query parameter on the WebSocket
/// upgrade. Used for logging and the welcome message; the relay itself does
/// not restrict any event to a role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Host,
    Participant,
}
