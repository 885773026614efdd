use dioxus::prelude::*;

use crate::components::icons::{ChartIcon, TrendingIcon};
use crate::i18n::Locale;
use crate::t;

/// "About" block. The floating partner badge sits on the edge opposite the
/// reading start, so it mirrors with the locale.
#[component]
pub fn AboutSection(locale: Locale) -> Element {
    let badge_class = format!("about__badge about__badge--{}", locale.trailing_edge().as_class());

    rsx! {
        section { id: "about", class: "section about",
            div { class: "container about__grid",
                div { class: "about__visual",
                    div { class: "about__panel", aria_hidden: "true" }
                    div { class: "{badge_class}",
                        strong { dir: "ltr", {t!(locale, "about-badge-value")} }
                        span { {t!(locale, "about-badge-label")} }
                    }
                }
                div { class: "about__copy",
                    h2 { class: "section__label", {t!(locale, "about-label")} }
                    h3 { class: "section__title", {t!(locale, "about-title")} }
                    p { {t!(locale, "about-p1")} }
                    p { {t!(locale, "about-p2")} }
                    div { class: "about__features",
                        div { class: "feature",
                            ChartIcon {}
                            h4 { {t!(locale, "about-f1-title")} }
                            p { {t!(locale, "about-f1-desc")} }
                        }
                        div { class: "feature",
                            TrendingIcon {}
                            h4 { {t!(locale, "about-f2-title")} }
                            p { {t!(locale, "about-f2-desc")} }
                        }
                    }
                }
            }
        }
    }
}
