use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::views::{Home, NotFound};
use ui::SiteRoot;

mod hash_history;

/// Hash-based routes: `#/` is the landing page, anything else is not found.
/// In-page section anchors are scrolled to programmatically and never touch
/// the route.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Routes live in the fragment; the router picks up the nearest history.
    #[cfg(target_arch = "wasm32")]
    use_hook(|| match hash_history::HashHistory::new() {
        Some(history) => dioxus::history::provide_history_context(std::rc::Rc::new(history)),
        None => tracing::warn!("no browser window; router keeps the default history"),
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Title { "Easy Way" }

        SiteRoot {
            Router::<Route> {}
        }
    }
}

/// Shared route layout.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    tracing::debug!(%route, "rendering route");

    rsx! {
        Outlet::<Route> {}
    }
}
