use dioxus::prelude::*;
use membership::Member;
use membership::domain::display_timestamp;

use crate::components::button::{Button, ButtonVariant};
use crate::widgets::status_badge::StatusBadge;

#[component]
pub fn MemberTable(
    rows: Vec<Member>,
    selected: Option<String>,
    busy: bool,
    on_select: EventHandler<Member>,
    on_approve: EventHandler<String>,
    on_reject: EventHandler<String>,
) -> Element {
    rsx! {
        table { class: "member-table",
            thead {
                tr {
                    th { "Organization" }
                    th { "Contact" }
                    th { "Email" }
                    th { "Signed up" }
                    th { "Status" }
                    th { "Actions" }
                }
            }
            tbody {
                for member in rows {
                    MemberRow {
                        key: "{member.email}",
                        is_selected: selected.as_deref() == Some(member.email.as_str()),
                        member: member.clone(),
                        busy: busy,
                        on_select: on_select,
                        on_approve: on_approve,
                        on_reject: on_reject,
                    }
                }
            }
        }
    }
}

#[component]
fn MemberRow(
    member: Member,
    is_selected: bool,
    busy: bool,
    on_select: EventHandler<Member>,
    on_approve: EventHandler<String>,
    on_reject: EventHandler<String>,
) -> Element {
    let selected_member = member.clone();
    let approve_email = member.email.clone();
    let reject_email = member.email.clone();
    let created = display_timestamp(&member.created_at);
    let decided = !member.is_pending();

    rsx! {
        tr {
            class: if is_selected { "member-row selected" } else { "member-row" },
            onclick: move |_| on_select.call(selected_member.clone()),
            td { "{member.organization_name}" }
            td { "{member.contact_name}" }
            td { "{member.email}" }
            td { "{created}" }
            td { StatusBadge { status: member.register_status } }
            td { class: "row-actions",
                Button {
                    small: true,
                    variant: ButtonVariant::Secondary,
                    disabled: busy || decided,
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        on_approve.call(approve_email.clone());
                    },
                    "Approve"
                }
                Button {
                    small: true,
                    variant: ButtonVariant::Danger,
                    disabled: busy || decided,
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        on_reject.call(reject_email.clone());
                    },
                    "Reject"
                }
            }
        }
    }
}
