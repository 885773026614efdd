use dioxus::prelude::*;

use crate::components::icons::{BuildingIcon, ChartIcon, TrendingIcon};
use crate::i18n::Locale;
use crate::t;

#[component]
pub fn ServicesSection(locale: Locale) -> Element {
    rsx! {
        section { id: "services", class: "section services",
            div { class: "container",
                header { class: "section__header",
                    h2 { class: "section__label", {t!(locale, "services-label")} }
                    h3 { class: "section__title", {t!(locale, "services-title")} }
                    p { class: "section__desc", {t!(locale, "services-desc")} }
                }
                div { class: "services__grid",
                    article { class: "service-card",
                        div { class: "service-card__icon", ChartIcon {} }
                        h4 { {t!(locale, "services-s1-title")} }
                        p { {t!(locale, "services-s1-desc")} }
                    }
                    article { class: "service-card",
                        div { class: "service-card__icon", BuildingIcon {} }
                        h4 { {t!(locale, "services-s2-title")} }
                        p { {t!(locale, "services-s2-desc")} }
                    }
                    article { class: "service-card",
                        div { class: "service-card__icon", TrendingIcon {} }
                        h4 { {t!(locale, "services-s3-title")} }
                        p { {t!(locale, "services-s3-desc")} }
                    }
                }
            }
        }
    }
}
