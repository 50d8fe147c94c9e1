use dioxus::prelude::*;
use membership::RegisterStatus;

#[component]
pub fn StatusBadge(status: RegisterStatus) -> Element {
    let class = match status {
        RegisterStatus::Pending => "status-badge pending",
        RegisterStatus::Approved => "status-badge approved",
        RegisterStatus::Rejected => "status-badge rejected",
        RegisterStatus::Cancelled => "status-badge cancelled",
    };

    rsx! {
        span { class: class, "{status}" }
    }
}
