use dioxus::prelude::*;
use membership::{MemberList, MemberListController, StateHandle};

use crate::api::ApiClient;

/// The member list kept in a signal so the view re-renders on every transition.
#[derive(Clone, Copy, PartialEq)]
pub struct ListSignal(pub Signal<MemberList>);

impl ListSignal {
    pub fn controller(self) -> MemberListController<ApiClient, ListSignal> {
        MemberListController::new(consume_context::<ApiClient>(), self)
    }
}

impl StateHandle for ListSignal {
    fn update<R>(&mut self, f: impl FnOnce(&mut MemberList) -> R) -> R {
        let mut list = self.0.write();
        f(&mut *list)
    }

    fn inspect<R>(&self, f: impl FnOnce(&MemberList) -> R) -> R {
        let list = self.0.read();
        f(&*list)
    }
}
