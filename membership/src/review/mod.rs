pub mod controller;
pub mod decision;
pub mod error;
pub mod state;

pub use controller::MemberListController;
pub use decision::{ReasonPrompt, StatusChange, StatusOutcome};
pub use error::{ControllerError, ValidationError};
pub use state::{ListQuery, LoadOutcome, LoadState, MemberList, StateHandle};

#[cfg(test)]
pub(crate) mod testing;
