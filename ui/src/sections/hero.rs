use dioxus::prelude::*;

use crate::components::icons::ArrowIcon;
use crate::core::platform;
use crate::core::scroll::SectionId;
use crate::i18n::Locale;
use crate::t;

#[component]
pub fn Hero(locale: Locale, on_contact: EventHandler<()>) -> Element {
    rsx! {
        section { id: "top", class: "hero",
            div { class: "hero__glow", aria_hidden: "true" }
            div { class: "container hero__inner",
                span { class: "hero__badge", {t!(locale, "hero-badge")} }
                h1 { class: "hero__title",
                    {t!(locale, "hero-title-lead")}
                    " "
                    span { class: "hero__accent", {t!(locale, "hero-title-accent")} }
                    " "
                    {t!(locale, "hero-title-tail")}
                }
                p { class: "hero__desc", {t!(locale, "hero-desc")} }
                div { class: "hero__actions",
                    a {
                        class: "button button--primary",
                        href: "#/",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            platform::scroll_to_anchor(SectionId::Services.anchor());
                        },
                        {t!(locale, "hero-cta-services")}
                        ArrowIcon {}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_contact.call(()),
                        {t!(locale, "hero-cta-partner")}
                    }
                }
            }
        }
    }
}
