use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("rank {0} is not in 1..=13")]
    InvalidRank(u8),
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
    #[error("no game with id {0}")]
    UnknownGame(u64),
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("table lock poisoned")]
    LockPoisoned,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
