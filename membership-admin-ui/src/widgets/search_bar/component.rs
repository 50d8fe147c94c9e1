use dioxus::prelude::*;
use membership::{MemberSearchType, RegisterStatus, Role, SearchCondition};
use strum::IntoEnumIterator;

use crate::components::button::Button;

/// One edit to the pending search condition.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEdit {
    SearchType(MemberSearchType),
    Keyword(String),
    Status(Option<RegisterStatus>),
    Role(Option<Role>),
}

#[component]
pub fn SearchBar(
    condition: SearchCondition,
    on_edit: EventHandler<SearchEdit>,
    on_submit: EventHandler<()>,
) -> Element {
    let status_value = condition
        .register_status
        .map(|s| s.as_wire())
        .unwrap_or_default();
    let role_value = condition.role.map(|r| r.as_wire()).unwrap_or_default();
    let search_type_value = condition.member_search_type.as_wire();

    rsx! {
        div { class: "search-bar",
            div { class: "filters",
                select {
                    class: "filter",
                    value: "{status_value}",
                    onchange: move |e: Event<FormData>| {
                        on_edit.call(SearchEdit::Status(RegisterStatus::from_wire(&e.value())))
                    },
                    option { value: "", "All statuses" }
                    for status in RegisterStatus::filterable() {
                        option { value: status.as_wire(), "{status}" }
                    }
                }
                select {
                    class: "filter",
                    value: "{role_value}",
                    onchange: move |e: Event<FormData>| {
                        on_edit.call(SearchEdit::Role(Role::from_wire(&e.value())))
                    },
                    option { value: "", "All roles" }
                    for role in Role::iter() {
                        option { value: role.as_wire(), "{role}" }
                    }
                }
            }

            div { class: "search",
                select {
                    class: "search-type",
                    value: "{search_type_value}",
                    onchange: move |e: Event<FormData>| {
                        if let Some(search_type) = MemberSearchType::from_wire(&e.value()) {
                            on_edit.call(SearchEdit::SearchType(search_type));
                        }
                    },
                    for search_type in MemberSearchType::iter() {
                        option { value: search_type.as_wire(), "{search_type}" }
                    }
                }
                input {
                    class: "keyword",
                    r#type: "text",
                    placeholder: "Enter a search term",
                    value: "{condition.keyword}",
                    oninput: move |e: Event<FormData>| on_edit.call(SearchEdit::Keyword(e.value())),
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            on_submit.call(());
                        }
                    },
                }
                Button { onclick: move |_| on_submit.call(()), "Search" }
            }
        }
    }
}
