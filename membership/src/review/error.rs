use crate::domain::RegisterStatus;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("A reason is required to reject a request")]
    MissingRejectReason,

    #[error("Cannot move a request to {0}")]
    UnsupportedTarget(RegisterStatus),
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Api(#[from] shared::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Server returned {rows} rows for a page of {size}")]
    InconsistentPage { rows: usize, size: u32 },

    #[error("Server declined the status change for {0}")]
    Declined(String),

    #[error("Another status change is still in progress")]
    MutationInFlight,
}
