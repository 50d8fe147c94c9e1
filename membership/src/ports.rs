use crate::domain::{MemberPageRequest, MembersPage};
use crate::review::StatusChange;
use async_trait::async_trait;
use shared::Result;

// Ports are the seams to the GraphQL backend. Browser futures are not Send.

/// Port for the member list query and the register-status mutation
#[async_trait(?Send)]
pub trait MemberGateway {
    /// Fetch one page of members matching the request's condition
    async fn fetch_page(&self, request: &MemberPageRequest) -> Result<MembersPage>;

    /// Approve or reject a sign-up request. `Ok(false)` means the server declined it.
    async fn handle_register(&self, change: &StatusChange) -> Result<bool>;
}
