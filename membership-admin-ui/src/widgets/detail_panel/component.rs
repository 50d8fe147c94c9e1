use dioxus::prelude::*;
use membership::Member;
use membership::documents::{DocumentAction, DocumentKind, document_link};
use membership::domain::display_timestamp;
use strum::IntoEnumIterator;

use crate::components::button::{Button, ButtonVariant};
use crate::widgets::status_badge::StatusBadge;

/// Read-only view of one sign-up request with its submitted documents.
#[component]
pub fn DetailPanel(
    member: Member,
    documents_base: String,
    busy: bool,
    on_close: EventHandler<()>,
    on_approve: EventHandler<String>,
    on_reject: EventHandler<String>,
) -> Element {
    let approve_email = member.email.clone();
    let reject_email = member.email.clone();
    let decided = !member.is_pending();
    let optional = |value: &Option<String>| {
        value
            .as_deref()
            .map(display_timestamp)
            .unwrap_or_else(|| "-".to_string())
    };
    let created = display_timestamp(&member.created_at);
    let approved = optional(&member.approved_at);
    let checked = optional(&member.checked_at);

    let documents = DocumentKind::iter().map(|kind| {
        let slug = kind.slug();
        let link = |action| {
            document_link(&documents_base, &member.email, kind, action)
                .ok()
                .map(|url| url.to_string())
        };
        rsx! {
            DocumentRow {
                key: "{slug}",
                label: kind.to_string(),
                preview: link(DocumentAction::Preview),
                download: link(DocumentAction::Download),
            }
        }
    });

    rsx! {
        aside { class: "detail-panel",
            div { class: "detail-header",
                h2 { "Sign-up request" }
                button {
                    class: "detail-close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }

            section { class: "detail-section",
                h3 { "Basic information" }
                dl { class: "detail-grid",
                    Field { label: "Organization", value: member.organization_name.clone() }
                    Field { label: "Business number", value: member.biz_number.clone() }
                    Field { label: "Representative", value: member.representative_name.clone() }
                    Field { label: "Contact", value: member.contact_name.clone() }
                    Field { label: "Email", value: member.email.clone() }
                    Field { label: "Role", value: member.role.to_string() }
                    Field { label: "Account", value: member.account_status.to_string() }
                    div { class: "detail-field",
                        dt { "Status" }
                        dd { StatusBadge { status: member.register_status } }
                    }
                    Field { label: "Signed up", value: created }
                    Field { label: "Approved", value: approved }
                    Field { label: "Checked", value: checked }
                }
                if let Some(reason) = member.reject_reason.clone() {
                    p { class: "reject-reason", "Reject reason: {reason}" }
                }
            }

            section { class: "detail-section",
                h3 { "Submitted documents" }
                ul { class: "document-list", {documents} }
            }

            section { class: "detail-actions",
                Button {
                    disabled: busy || decided,
                    onclick: move |_| on_approve.call(approve_email.clone()),
                    "Approve"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: busy || decided,
                    onclick: move |_| on_reject.call(reject_email.clone()),
                    "Reject"
                }
            }
        }
    }
}

#[component]
fn Field(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "detail-field",
            dt { "{label}" }
            dd { "{value}" }
        }
    }
}

#[component]
fn DocumentRow(label: String, preview: Option<String>, download: Option<String>) -> Element {
    rsx! {
        li { class: "document-row",
            span { "{label}" }
            div { class: "document-actions",
                match preview {
                    Some(href) => rsx! {
                        a { href: "{href}", target: "_blank", rel: "noopener", "Preview" }
                    },
                    None => rsx! { span { class: "unavailable", "Preview" } },
                }
                match download {
                    Some(href) => rsx! {
                        a { href: "{href}", target: "_blank", rel: "noopener", "Download" }
                    },
                    None => rsx! { span { class: "unavailable", "Download" } },
                }
            }
        }
    }
}
