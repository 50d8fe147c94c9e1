// Public API
pub mod documents;
pub mod domain;
pub mod pagination;
pub mod ports;
pub mod review;

// Re-export commonly used types
pub use domain::{
    AccountStatus, Member, MemberPageRequest, MemberSearchType, MembersPage, RegisterStatus, Role,
    SearchCondition,
};
pub use pagination::{PAGE_BLOCK, PAGE_SIZE, Pager, expected_rows, page_window};
pub use ports::MemberGateway;
pub use review::{
    ControllerError, LoadState, MemberList, MemberListController, ReasonPrompt, StateHandle,
    StatusChange, StatusOutcome, ValidationError,
};
