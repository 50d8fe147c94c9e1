use dioxus::prelude::*;
use membership::Pager;

#[component]
pub fn Pagination(pager: Pager, on_navigate: EventHandler<u32>) -> Element {
    let current = pager.current_page;
    let last = pager.total_pages;

    rsx! {
        nav { class: "pagination",
            if pager.show_jump_first {
                button { class: "page-step", onclick: move |_| on_navigate.call(1), "«" }
            }
            button {
                class: "page-step",
                disabled: !pager.previous_enabled,
                onclick: move |_| on_navigate.call(current.saturating_sub(1)),
                "‹"
            }
            for num in pager.window.iter().copied() {
                button {
                    key: "{num}",
                    class: if pager.is_current(num) { "page active" } else { "page" },
                    onclick: move |_| on_navigate.call(num),
                    "{num}"
                }
            }
            button {
                class: "page-step",
                disabled: !pager.next_enabled,
                onclick: move |_| on_navigate.call(current + 1),
                "›"
            }
            if pager.show_jump_last {
                button { class: "page-step", onclick: move |_| on_navigate.call(last), "»" }
            }
        }
    }
}
