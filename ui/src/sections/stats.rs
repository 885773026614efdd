use dioxus::prelude::*;

use crate::i18n::Locale;
use crate::t;

#[component]
pub fn StatsStrip(locale: Locale) -> Element {
    let stats = [
        (t!(locale, "stats-founded-value"), t!(locale, "stats-founded-label")),
        (t!(locale, "stats-partners-value"), t!(locale, "stats-partners-label")),
        (t!(locale, "stats-campaigns-value"), t!(locale, "stats-campaigns-label")),
        (t!(locale, "stats-coverage-value"), t!(locale, "stats-coverage-label")),
    ];

    rsx! {
        section { class: "stats",
            dl { class: "container stats__grid",
                for (value, label) in stats {
                    div { key: "{label}", class: "stats__item",
                        dt { class: "stats__value", dir: "ltr", "{value}" }
                        dd { class: "stats__label", "{label}" }
                    }
                }
            }
        }
    }
}
