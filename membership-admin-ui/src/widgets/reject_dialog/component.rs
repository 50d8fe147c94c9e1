use dioxus::prelude::*;
use membership::ReasonPrompt;

use crate::components::button::{Button, ButtonVariant};

/// Collects the mandatory reason for rejecting `email`'s request.
#[component]
pub fn RejectDialog(email: String, on_resolve: EventHandler<ReasonPrompt>) -> Element {
    let mut reason = use_signal(String::new);
    let blank = reason.read().trim().is_empty();

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog", role: "dialog",
                h3 { "Reject sign-up request" }
                p { class: "dialog-subtitle", "{email}" }
                label { r#for: "reject-reason",
                    "Reason"
                    span { class: "required", "*" }
                }
                textarea {
                    id: "reject-reason",
                    rows: "4",
                    placeholder: "Tell the applicant what to fix",
                    value: "{reason}",
                    oninput: move |e: Event<FormData>| reason.set(e.value()),
                }
                div { class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_resolve.call(ReasonPrompt::Cancelled),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: blank,
                        onclick: move |_| on_resolve.call(ReasonPrompt::Provided(reason())),
                        "Reject"
                    }
                }
            }
        }
    }
}
