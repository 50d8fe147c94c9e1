use std::time::Duration;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, use_toast};
use membership::{
    ControllerError, LoadState, Member, MemberList, ReasonPrompt, RegisterStatus, StateHandle,
};

use crate::api::ApiClient;
use crate::components::button::{Button, ButtonVariant};
use crate::state::ListSignal;
use crate::widgets::detail_panel::DetailPanel;
use crate::widgets::empty_state::EmptyState;
use crate::widgets::member_table::MemberTable;
use crate::widgets::pagination::Pagination;
use crate::widgets::reject_dialog::RejectDialog;
use crate::widgets::search_bar::{SearchBar, SearchEdit};

/// Searchable, paged list of sign-up requests with a detail panel for the selected one.
#[component]
pub fn Members() -> Element {
    let mut list = ListSignal(use_signal(MemberList::new));
    let mut reject_target = use_signal(|| Option::<String>::None);
    let documents_base = use_context::<ApiClient>().config().document_base_url.clone();
    let toaster = use_toast();

    use_hook(move || {
        let mut controller = list.controller();
        spawn(async move {
            // Failures are recorded in the list state and shown as a banner.
            let _ = controller.load().await;
        });
    });

    let decide = move |email: String, target: RegisterStatus, prompt: ReasonPrompt| {
        let mut controller = list.controller();
        spawn(async move {
            match controller.update_status(&email, target, prompt).await {
                Ok(outcome) => {
                    toaster.success(
                        outcome.confirmation(),
                        ToastOptions::new()
                            .duration(Duration::from_secs(2))
                            .permanent(false),
                    );
                }
                Err(ControllerError::Validation(e)) => info!("Status change aborted: {}", e),
                Err(e) => {
                    toaster.error(
                        format!("Could not update {}: {}", email, e),
                        ToastOptions::new().permanent(false),
                    );
                }
            }
        });
    };

    let navigate = move |page: u32| {
        let mut controller = list.controller();
        spawn(async move {
            let _ = controller.go_to_page(page).await;
        });
    };

    let search = move |_: ()| {
        let mut controller = list.controller();
        spawn(async move {
            let _ = controller.search().await;
        });
    };

    let edit = move |edit: SearchEdit| {
        list.update(|l| match edit {
            SearchEdit::SearchType(search_type) => l.set_search_type(search_type),
            SearchEdit::Keyword(keyword) => l.set_keyword(keyword),
            SearchEdit::Status(status) => l.set_status_filter(status),
            SearchEdit::Role(role) => l.set_role_filter(role),
        });
    };

    let (pending, rows, pager, load, selected, busy) = list.inspect(|l| {
        (
            l.pending().clone(),
            l.rows().to_vec(),
            l.pager(),
            l.load_state().clone(),
            l.selected().cloned(),
            l.mutation_in_flight(),
        )
    });

    let loading = load == LoadState::Loading;
    let banner = match load {
        LoadState::Failed(message) => rsx! {
            div { class: "banner error",
                span { "Could not load members: {message}" }
                Button {
                    small: true,
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| navigate(pager_current(list)),
                    "Retry"
                }
            }
        },
        LoadState::Loading => rsx! {
            div { class: "banner loading", "Loading members…" }
        },
        LoadState::Idle => rsx! {},
    };

    let table = if rows.is_empty() && loading {
        rsx! {}
    } else if rows.is_empty() {
        rsx! {
            EmptyState {
                icon: "📭".to_string(),
                title: "No sign-up requests".to_string(),
                description: "Nothing matches the current filters.".to_string(),
            }
        }
    } else {
        rsx! {
            MemberTable {
                rows: rows,
                selected: selected.as_ref().map(|m| m.email.clone()),
                busy: busy,
                on_select: move |member: Member| {
                    list.update(|l| l.select(member));
                },
                on_approve: move |email: String| {
                    decide(email, RegisterStatus::Approved, ReasonPrompt::NotRequired);
                },
                on_reject: move |email: String| reject_target.set(Some(email)),
            }
        }
    };

    let detail = selected.map(|member| {
        rsx! {
            div { class: "detail-column",
                DetailPanel {
                    member: member,
                    documents_base: documents_base.clone(),
                    busy: busy,
                    on_close: move |_: ()| list.update(MemberList::clear_selection),
                    on_approve: move |email: String| {
                        decide(email, RegisterStatus::Approved, ReasonPrompt::NotRequired);
                    },
                    on_reject: move |email: String| reject_target.set(Some(email)),
                }
            }
        }
    });

    let dialog = reject_target().map(|email| {
        let shown = email.clone();
        rsx! {
            RejectDialog {
                email: shown,
                on_resolve: move |prompt: ReasonPrompt| {
                    reject_target.set(None);
                    decide(email.clone(), RegisterStatus::Rejected, prompt);
                },
            }
        }
    });

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Sign-up requests" }
            }
            div { class: "members-layout",
                div { class: "members-column",
                    SearchBar {
                        condition: pending,
                        on_edit: edit,
                        on_submit: search,
                    }
                    {banner}
                    {table}
                    Pagination { pager: pager, on_navigate: navigate }
                }
                {detail}
            }
            {dialog}
        }
    }
}

fn pager_current(list: ListSignal) -> u32 {
    list.inspect(|l| l.page())
}
