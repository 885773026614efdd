use dioxus::prelude::*;

use crate::state::use_locale;
use crate::t;

/// Fallback for every hash path other than `#/`.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let locale = use_locale()();
    tracing::info!(path = %segments.join("/"), "unknown route");

    rsx! {
        section { class: "page page-not-found", lang: locale.lang_attr(), dir: locale.direction().as_attr(),
            div { class: "not-found__card",
                h1 { {t!(locale, "not-found-title")} }
                p { {t!(locale, "not-found-desc")} }
                a { class: "button button--primary", href: "#/", {t!(locale, "not-found-home")} }
            }
        }
    }
}
