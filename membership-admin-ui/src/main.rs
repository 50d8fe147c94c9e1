use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

mod api;
mod components;
mod config;
mod pages;
mod state;
mod widgets;

use pages::Members;
use widgets::header::Header;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AdminLayout)]
        #[redirect("/", || Route::Members {})]
        #[route("/admin/members")]
        Members {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(api::ApiClient::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider { Router::<Route> {} }
    }
}

/// Shared admin chrome.
#[component]
fn AdminLayout() -> Element {
    rsx! {
        Header {}
        main { class: "app-content", Outlet::<Route> {} }
    }
}
