mod pool;
mod registry;
mod reveal;

pub use pool::{NumberPool, POOL_MAX, POOL_MIN, POOL_SIZE};
pub use registry::AssignmentRegistry;
pub use reveal::RevealSequencer;

/// Errors from the game core
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("number pool is exhausted")]
    PoolExhausted,

    #[error("at least one participant name is required")]
    NoParticipants,

    #[error("not every participant has a number yet")]
    NotFullyAssigned,

    #[error("invalid phase transition: {0}")]
    InvalidPhase(String),
}
