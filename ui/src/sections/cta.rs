use dioxus::prelude::*;

use crate::components::icons::ArrowIcon;
use crate::i18n::Locale;
use crate::t;

#[component]
pub fn CtaSection(locale: Locale, on_contact: EventHandler<()>) -> Element {
    rsx! {
        section { class: "section cta",
            div { class: "container cta__inner",
                h2 { class: "cta__title", {t!(locale, "cta-title")} }
                p { class: "cta__desc", {t!(locale, "cta-desc")} }
                button {
                    r#type: "button",
                    class: "button button--light",
                    onclick: move |_| on_contact.call(()),
                    {t!(locale, "cta-button")}
                    ArrowIcon {}
                }
            }
        }
    }
}
