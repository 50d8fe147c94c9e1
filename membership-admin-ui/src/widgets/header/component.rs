use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "app-header",
            h1 { class: "header-title", "Member Management" }
            span { class: "header-subtitle", "Organization sign-up review" }
        }
    }
}
