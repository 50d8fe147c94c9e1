use crate::domain::{AccountStatus, Member, MemberPageRequest, MembersPage, RegisterStatus, Role};
use crate::pagination::{PAGE_SIZE, expected_rows};
use crate::ports::MemberGateway;
use crate::review::StatusChange;
use async_trait::async_trait;
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use std::cell::RefCell;
use std::collections::VecDeque;

pub fn fake_member(index: u64) -> Member {
    Member {
        email: format!("applicant{index}@example.test"),
        organization_name: CompanyName().fake(),
        biz_number: format!("{:03}-{:02}-{:05}", index % 1000, index % 100, index),
        representative_name: Name().fake(),
        contact_name: Name().fake(),
        role: Role::Member,
        account_status: AccountStatus::Active,
        approved_at: None,
        reject_reason: None,
        register_status: RegisterStatus::Pending,
        created_at: "2025-03-01T09:30:00".to_string(),
        checked_at: None,
    }
}

/// A page whose row count agrees with `total_elements`.
pub fn fake_page(current_page: u32, total_pages: u32, total_elements: u64) -> MembersPage {
    let rows = expected_rows(current_page, PAGE_SIZE, total_elements) as u64;
    let offset = u64::from(current_page.saturating_sub(1)) * u64::from(PAGE_SIZE);
    MembersPage {
        content: (offset..offset + rows).map(fake_member).collect(),
        total_pages,
        total_elements,
        current_page,
        is_first: current_page <= 1,
        is_last: current_page >= total_pages,
    }
}

/// In-memory gateway that records every call and replays scripted responses.
#[derive(Default)]
pub struct FakeGateway {
    pub pages: RefCell<VecDeque<shared::Result<MembersPage>>>,
    pub decisions: RefCell<VecDeque<shared::Result<bool>>>,
    pub page_requests: RefCell<Vec<MemberPageRequest>>,
    pub changes: RefCell<Vec<StatusChange>>,
}

impl FakeGateway {
    pub fn with_page(self, page: shared::Result<MembersPage>) -> Self {
        self.pages.borrow_mut().push_back(page);
        self
    }

    pub fn with_decision(self, decision: shared::Result<bool>) -> Self {
        self.decisions.borrow_mut().push_back(decision);
        self
    }
}

#[async_trait(?Send)]
impl MemberGateway for FakeGateway {
    async fn fetch_page(&self, request: &MemberPageRequest) -> shared::Result<MembersPage> {
        self.page_requests.borrow_mut().push(request.clone());
        self.pages
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(MembersPage::empty()))
    }

    async fn handle_register(&self, change: &StatusChange) -> shared::Result<bool> {
        self.changes.borrow_mut().push(change.clone());
        self.decisions
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(true))
    }
}
