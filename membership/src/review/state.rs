use super::decision::StatusChange;
use super::error::ControllerError;
use crate::domain::{
    Member, MemberPageRequest, MemberSearchType, MembersPage, RegisterStatus, Role,
    SearchCondition,
};
use crate::pagination::{PAGE_SIZE, Pager};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// A list query tagged with the ticket it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub ticket: u64,
    pub request: MemberPageRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer query was issued before this response arrived.
    Superseded,
}

/// State behind the member list view.
///
/// The last accepted query response is the only copy of the page. Filter
/// edits land in the pending condition and reach the query only through
/// [`MemberList::apply_filters`].
#[derive(Debug, Clone)]
pub struct MemberList {
    pending: SearchCondition,
    applied: SearchCondition,
    page: u32,
    result: Option<MembersPage>,
    load: LoadState,
    selection: Option<Member>,
    issued: u64,
    mutation_in_flight: bool,
}

impl Default for MemberList {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberList {
    pub fn new() -> Self {
        Self {
            pending: SearchCondition::default(),
            applied: SearchCondition::default(),
            page: 1,
            result: None,
            load: LoadState::Idle,
            selection: None,
            issued: 0,
            mutation_in_flight: false,
        }
    }

    // === Filters ===

    pub fn pending(&self) -> &SearchCondition {
        &self.pending
    }

    pub fn applied(&self) -> &SearchCondition {
        &self.applied
    }

    pub fn set_search_type(&mut self, search_type: MemberSearchType) {
        self.pending.member_search_type = search_type;
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.pending.keyword = keyword.into();
    }

    pub fn set_status_filter(&mut self, status: Option<RegisterStatus>) {
        self.pending.register_status = status;
    }

    pub fn set_role_filter(&mut self, role: Option<Role>) {
        self.pending.role = role;
    }

    /// Submits the pending condition and returns to the first page.
    pub fn apply_filters(&mut self) {
        self.applied = self.pending.clone();
        self.page = 1;
    }

    // === Pagination ===

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn pager(&self) -> Pager {
        Pager::for_page(self.result.as_ref())
    }

    /// Moves to `page`, clamped to the known page range. Returns whether it changed.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let target = self.pager().clamp(page);
        let changed = target != self.page;
        self.page = target;
        changed
    }

    // === Query lifecycle ===

    pub fn request(&self) -> MemberPageRequest {
        MemberPageRequest {
            page: self.page,
            size: PAGE_SIZE,
            condition: self.applied.clone(),
        }
    }

    /// Issues a new ticket for the current query variables.
    pub fn begin_load(&mut self) -> ListQuery {
        self.issued += 1;
        self.load = LoadState::Loading;
        ListQuery {
            ticket: self.issued,
            request: self.request(),
        }
    }

    /// Accepts the response for `ticket` unless a newer query has been issued.
    ///
    /// On failure the previous page stays visible.
    pub fn finish_load(
        &mut self,
        ticket: u64,
        response: shared::Result<MembersPage>,
    ) -> Result<LoadOutcome, ControllerError> {
        if ticket != self.issued {
            debug!(ticket, latest = self.issued, "discarding stale member page");
            return Ok(LoadOutcome::Superseded);
        }

        let page = match response {
            Ok(page) => page,
            Err(e) => {
                warn!("Failed to load members: {}", e);
                self.load = LoadState::Failed(e.to_string());
                return Err(e.into());
            }
        };

        if page.content.len() > PAGE_SIZE as usize {
            let err = ControllerError::InconsistentPage {
                rows: page.content.len(),
                size: PAGE_SIZE,
            };
            warn!("{}", err);
            self.load = LoadState::Failed(err.to_string());
            return Err(err);
        }
        if !page.flags_consistent() {
            warn!(
                current_page = page.current_page,
                total_pages = page.total_pages,
                "first/last flags disagree with page numbers"
            );
        }

        if let Some(selected) = &self.selection {
            if let Some(fresh) = page.find(&selected.email) {
                self.selection = Some(fresh.clone());
            }
        }
        self.result = Some(page);
        self.load = LoadState::Idle;
        Ok(LoadOutcome::Applied)
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn page_data(&self) -> Option<&MembersPage> {
        self.result.as_ref()
    }

    pub fn rows(&self) -> &[Member] {
        self.result
            .as_ref()
            .map(|p| p.content.as_slice())
            .unwrap_or_default()
    }

    // === Selection ===

    /// Selects `member`. Re-selecting the current member is a no-op.
    pub fn select(&mut self, member: Member) -> bool {
        if self.is_selected(&member.email) {
            return false;
        }
        self.selection = Some(member);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selected(&self) -> Option<&Member> {
        self.selection.as_ref()
    }

    pub fn is_selected(&self, email: &str) -> bool {
        self.selection.as_ref().is_some_and(|m| m.email == email)
    }

    /// Applies an accepted status change to the selected member.
    ///
    /// The refreshed page may no longer contain that member, for example
    /// under a `PENDING` filter.
    pub fn record_decision(&mut self, change: &StatusChange) {
        if let Some(member) = self.selection.as_mut().filter(|m| m.email == change.email) {
            member.register_status = change.register_status;
            member.reject_reason = change.reject_reason.clone();
        }
    }

    // === Mutation guard ===

    /// Marks a mutation as outstanding. Returns false if one already is.
    pub fn begin_mutation(&mut self) -> bool {
        if self.mutation_in_flight {
            return false;
        }
        self.mutation_in_flight = true;
        true
    }

    pub fn end_mutation(&mut self) {
        self.mutation_in_flight = false;
    }

    pub fn mutation_in_flight(&self) -> bool {
        self.mutation_in_flight
    }
}

/// Access to a [`MemberList`] held somewhere the controller does not own,
/// such as a reactive signal.
pub trait StateHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut MemberList) -> R) -> R;
    fn inspect<R>(&self, f: impl FnOnce(&MemberList) -> R) -> R;
}

impl StateHandle for MemberList {
    fn update<R>(&mut self, f: impl FnOnce(&mut MemberList) -> R) -> R {
        f(self)
    }

    fn inspect<R>(&self, f: impl FnOnce(&MemberList) -> R) -> R {
        f(self)
    }
}
