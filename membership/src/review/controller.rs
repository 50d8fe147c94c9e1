use super::decision::{ReasonPrompt, StatusChange, StatusOutcome};
use super::error::ControllerError;
use super::state::{LoadOutcome, MemberList, StateHandle};
use crate::domain::RegisterStatus;
use crate::ports::MemberGateway;
use tracing::{debug, error, info, warn};

/// Drives the member list: queries, filter submission, paging and status changes.
///
/// State lives behind a [`StateHandle`] so the view can keep it in its own
/// reactive store; the controller never holds a borrow across an await.
pub struct MemberListController<G, S> {
    gateway: G,
    state: S,
}

impl<G, S> MemberListController<G, S>
where
    G: MemberGateway,
    S: StateHandle,
{
    pub fn new(gateway: G, state: S) -> Self {
        Self { gateway, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Queries the current page with the applied condition.
    pub async fn load(&mut self) -> Result<LoadOutcome, ControllerError> {
        let query = self.state.update(MemberList::begin_load);
        debug!(
            ticket = query.ticket,
            page = query.request.page,
            "GET_ALL_MEMBERS: condition={:?}",
            query.request.condition
        );
        let response = self.gateway.fetch_page(&query.request).await;
        self.state
            .update(|list| list.finish_load(query.ticket, response))
    }

    /// Submits the pending filters and reloads from page 1.
    pub async fn search(&mut self) -> Result<LoadOutcome, ControllerError> {
        self.state.update(MemberList::apply_filters);
        self.load().await
    }

    /// Navigates to `page` and reloads it.
    pub async fn go_to_page(&mut self, page: u32) -> Result<LoadOutcome, ControllerError> {
        self.state.update(|list| list.go_to_page(page));
        self.load().await
    }

    /// Approves or rejects the request from `email`, then refreshes the list.
    ///
    /// Rejections need a provided reason; otherwise nothing is sent.
    pub async fn update_status(
        &mut self,
        email: &str,
        target: RegisterStatus,
        prompt: ReasonPrompt,
    ) -> Result<StatusOutcome, ControllerError> {
        let change = StatusChange::new(email, target, prompt)?;

        if !self.state.update(MemberList::begin_mutation) {
            warn!("Ignoring status change for {}: another is in flight", email);
            return Err(ControllerError::MutationInFlight);
        }

        info!(
            "HANDLE_REGISTER: email={}, status={}",
            change.email,
            change.register_status.as_wire()
        );
        let result = self.gateway.handle_register(&change).await;
        self.state.update(MemberList::end_mutation);

        match result {
            Ok(true) => {
                self.state.update(|list| list.record_decision(&change));
                if let Err(e) = self.load().await {
                    warn!("Status changed but refresh failed: {}", e);
                }
                Ok(StatusOutcome {
                    email: change.email,
                    status: change.register_status,
                })
            }
            Ok(false) => {
                warn!("Server declined status change for {}", change.email);
                Err(ControllerError::Declined(change.email))
            }
            Err(e) => {
                error!("Status change failed for {}: {}", change.email, e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MemberSearchType, SearchCondition};
    use crate::pagination::PAGE_SIZE;
    use crate::review::ValidationError;
    use crate::review::testing::{FakeGateway, fake_page};

    fn controller(gateway: FakeGateway) -> MemberListController<FakeGateway, MemberList> {
        MemberListController::new(gateway, MemberList::new())
    }

    #[tokio::test]
    async fn test_initial_load() {
        let page = fake_page(1, 3, 25);
        let mut ctl = controller(FakeGateway::default().with_page(Ok(page.clone())));

        let outcome = ctl.load().await.unwrap();

        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(ctl.state().page_data(), Some(&page));
        let requests = ctl.gateway.page_requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].page, 1);
        assert_eq!(requests[0].size, PAGE_SIZE);
        assert_eq!(requests[0].condition, SearchCondition::default());
    }

    #[tokio::test]
    async fn test_search_uses_pending_condition_from_page_one() {
        let gateway = FakeGateway::default()
            .with_page(Ok(fake_page(1, 3, 25)))
            .with_page(Ok(fake_page(2, 3, 25)))
            .with_page(Ok(fake_page(1, 1, 1)));
        let mut ctl = controller(gateway);
        ctl.load().await.unwrap();
        ctl.go_to_page(2).await.unwrap();

        ctl.state.set_search_type(MemberSearchType::Email);
        ctl.state.set_keyword("applicant0");
        ctl.search().await.unwrap();

        let requests = ctl.gateway.page_requests.borrow();
        assert_eq!(requests[1].page, 2);
        assert_eq!(requests[2].page, 1);
        assert_eq!(requests[2].condition.member_search_type, MemberSearchType::Email);
        assert_eq!(requests[2].condition.keyword, "applicant0");
        assert_eq!(ctl.state().rows().len(), 1);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_rows() {
        let page = fake_page(1, 1, 4);
        let gateway = FakeGateway::default()
            .with_page(Ok(page.clone()))
            .with_page(Err(shared::Error::Status(500)));
        let mut ctl = controller(gateway);
        ctl.load().await.unwrap();

        let err = ctl.load().await.unwrap_err();

        assert!(matches!(err, ControllerError::Api(shared::Error::Status(500))));
        assert_eq!(ctl.state().rows(), page.content.as_slice());
    }

    #[tokio::test]
    async fn test_reject_without_reason_sends_nothing() {
        let mut ctl = controller(FakeGateway::default());

        for prompt in [
            ReasonPrompt::Cancelled,
            ReasonPrompt::Provided(String::new()),
        ] {
            let err = ctl
                .update_status("applicant1@example.test", RegisterStatus::Rejected, prompt)
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                ControllerError::Validation(ValidationError::MissingRejectReason)
            ));
        }

        assert!(ctl.gateway.changes.borrow().is_empty());
        assert!(ctl.gateway.page_requests.borrow().is_empty());
        assert!(!ctl.state().mutation_in_flight());
    }

    #[tokio::test]
    async fn test_approve_refetches_current_query() {
        let gateway = FakeGateway::default()
            .with_page(Ok(fake_page(1, 3, 25)))
            .with_page(Ok(fake_page(2, 3, 25)))
            .with_page(Ok(fake_page(2, 3, 25)))
            .with_decision(Ok(true));
        let mut ctl = controller(gateway);
        ctl.state.set_keyword("acme");
        ctl.search().await.unwrap();
        ctl.go_to_page(2).await.unwrap();

        let outcome = ctl
            .update_status(
                "applicant12@example.test",
                RegisterStatus::Approved,
                ReasonPrompt::NotRequired,
            )
            .await
            .unwrap();

        assert_eq!(outcome.status, RegisterStatus::Approved);
        assert_eq!(
            outcome.confirmation(),
            "Approved the request from applicant12@example.test"
        );
        let changes = ctl.gateway.changes.borrow();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].reject_reason, None);

        let requests = ctl.gateway.page_requests.borrow();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[2], requests[1]);
        assert_eq!(requests[2].page, 2);
        assert_eq!(requests[2].condition.keyword, "acme");
        assert!(!ctl.state().mutation_in_flight());
    }

    #[tokio::test]
    async fn test_approve_under_pending_filter_updates_selection() {
        let first = fake_page(1, 1, 3);
        let mut remaining = first.clone();
        remaining.content.remove(0);
        remaining.total_elements = 2;
        let gateway = FakeGateway::default()
            .with_page(Ok(first.clone()))
            .with_page(Ok(remaining))
            .with_decision(Ok(true));
        let mut ctl = controller(gateway);
        ctl.state.set_status_filter(Some(RegisterStatus::Pending));
        ctl.search().await.unwrap();
        ctl.state.select(first.content[0].clone());

        ctl.update_status(
            &first.content[0].email,
            RegisterStatus::Approved,
            ReasonPrompt::NotRequired,
        )
        .await
        .unwrap();

        assert_eq!(ctl.state().rows().len(), 2);
        assert!(ctl.state().page_data().unwrap().find(&first.content[0].email).is_none());
        let selected = ctl.state().selected().unwrap();
        assert_eq!(selected.email, first.content[0].email);
        assert_eq!(selected.register_status, RegisterStatus::Approved);
        assert!(!selected.is_pending());
    }

    #[tokio::test]
    async fn test_reject_sends_reason() {
        let gateway = FakeGateway::default().with_decision(Ok(true));
        let mut ctl = controller(gateway);

        ctl.update_status(
            "applicant3@example.test",
            RegisterStatus::Rejected,
            ReasonPrompt::Provided("expired certificate".to_string()),
        )
        .await
        .unwrap();

        let changes = ctl.gateway.changes.borrow();
        assert_eq!(changes[0].register_status, RegisterStatus::Rejected);
        assert_eq!(changes[0].reject_reason.as_deref(), Some("expired certificate"));
        assert_eq!(ctl.gateway.page_requests.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_mutation_failure_leaves_list_untouched() {
        let page = fake_page(1, 1, 2);
        let gateway = FakeGateway::default()
            .with_page(Ok(page.clone()))
            .with_decision(Err(shared::Error::Transport("connection reset".to_string())));
        let mut ctl = controller(gateway);
        ctl.load().await.unwrap();

        let err = ctl
            .update_status(
                "applicant0@example.test",
                RegisterStatus::Approved,
                ReasonPrompt::NotRequired,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ControllerError::Api(shared::Error::Transport(_))));
        assert_eq!(ctl.gateway.page_requests.borrow().len(), 1);
        assert_eq!(ctl.state().page_data(), Some(&page));
        assert!(!ctl.state().mutation_in_flight());
    }

    #[tokio::test]
    async fn test_declined_mutation() {
        let gateway = FakeGateway::default().with_decision(Ok(false));
        let mut ctl = controller(gateway);

        let err = ctl
            .update_status(
                "applicant0@example.test",
                RegisterStatus::Approved,
                ReasonPrompt::NotRequired,
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ControllerError::Declined(email) if email == "applicant0@example.test"
        ));
        assert!(ctl.gateway.page_requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_mutation_refused_while_in_flight() {
        let mut ctl = controller(FakeGateway::default());
        ctl.state.begin_mutation();

        let err = ctl
            .update_status(
                "applicant0@example.test",
                RegisterStatus::Approved,
                ReasonPrompt::NotRequired,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ControllerError::MutationInFlight));
        assert!(ctl.gateway.changes.borrow().is_empty());
    }
}
