use dioxus::prelude::*;

use crate::core::config::{CONTACT_EMAIL, CONTACT_PHONE};
use crate::core::platform;
use crate::core::scroll::SectionId;
use crate::i18n::Locale;
use crate::t;

const SOCIAL_PLACEHOLDERS: [&str; 3] = ["FB", "IN", "TW"];

/// Year shown in the copyright line, taken from the clock at render time.
fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[component]
pub fn Footer(locale: Locale) -> Element {
    let year = current_year();

    rsx! {
        footer { class: "footer",
            div { class: "container footer__grid",
                div { class: "footer__col",
                    h3 { class: "footer__brand", {t!(locale, "brand-name")} }
                    p { class: "footer__about", {t!(locale, "footer-about")} }
                }
                div { class: "footer__col",
                    h4 { {t!(locale, "footer-links")} }
                    ul {
                        for section in SectionId::ORDER {
                            li { key: "{section.anchor()}",
                                a {
                                    href: "#/",
                                    onclick: move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        platform::scroll_to_anchor(section.anchor());
                                    },
                                    {match section {
                                        SectionId::About => t!(locale, "nav-about"),
                                        SectionId::Services => t!(locale, "nav-services"),
                                        SectionId::Partners => t!(locale, "nav-partners"),
                                    }}
                                }
                            }
                        }
                    }
                }
                div { class: "footer__col",
                    h4 { {t!(locale, "footer-contact")} }
                    ul {
                        li {
                            {t!(locale, "footer-email-label")}
                            ": "
                            a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                        }
                        li {
                            {t!(locale, "footer-phone-label")}
                            ": "
                            span { dir: "ltr", "{CONTACT_PHONE}" }
                        }
                        li {
                            {t!(locale, "footer-address-label")}
                            ": "
                            {t!(locale, "contact-address")}
                        }
                    }
                }
            }
            div { class: "container footer__bottom",
                p { class: "footer__rights", {t!(locale, "footer-rights", year = year)} }
                // Placeholders until the agency's profiles exist.
                div { class: "footer__social", aria_hidden: "true",
                    for network in SOCIAL_PLACEHOLDERS {
                        span { key: "{network}", class: "footer__social-item", "{network}" }
                    }
                }
            }
        }
    }
}
