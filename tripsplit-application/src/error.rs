use std::path::PathBuf;
use thiserror::Error;
use tripsplit_domain::{Money, RosterError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store at {} is not a JSON object of strings: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum TripError {
    #[error("participant name must not be empty")]
    EmptyParticipantName,
    #[error("participant '{0}' is already on the roster")]
    DuplicateParticipant(String),
    #[error("no participant at position {0}")]
    ParticipantIndexOutOfRange(usize),
    #[error("expense title must not be empty")]
    EmptyTitle,
    #[error("expense amount must be positive")]
    NonPositiveAmount,
    #[error("expense amount must not exceed {}", Money::MAX_AMOUNT)]
    AmountTooLarge,
    #[error("expense amount must have at most {} decimal places", Money::DISPLAY_SCALE)]
    AmountTooPrecise,
    #[error("payer '{0}' is not on the roster")]
    UnknownPayer(String),
    #[error("'{0}' is not on the roster")]
    UnknownSharer(String),
    #[error("shared-by list must name at least one participant")]
    EmptySharedBy,
    #[error("no expense at position {0}")]
    ExpenseIndexOutOfRange(usize),
    #[error("stored value for '{key}' is malformed: {detail}")]
    CorruptRecord { key: &'static str, detail: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<RosterError> for TripError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::EmptyName => TripError::EmptyParticipantName,
            RosterError::Duplicate(name) => TripError::DuplicateParticipant(name),
        }
    }
}
