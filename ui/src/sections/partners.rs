use dioxus::prelude::*;

use crate::i18n::Locale;
use crate::t;

/// A company shown in the partner marquee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partner {
    pub name: &'static str,
    pub initials: &'static str,
    /// Index into the `partner-card__logo--N` palette.
    pub hue: u8,
}

pub const PARTNERS: [Partner; 8] = [
    Partner { name: "Al-Amoudi Group", initials: "AG", hue: 0 },
    Partner { name: "Yemen Trading Co.", initials: "YT", hue: 1 },
    Partner { name: "Gulf Commerce", initials: "GC", hue: 2 },
    Partner { name: "Sana'a Distributors", initials: "SD", hue: 3 },
    Partner { name: "Al-Hayat Corp", initials: "AH", hue: 4 },
    Partner { name: "Hadramout Trading", initials: "HT", hue: 5 },
    Partner { name: "Yemen Foods Ltd", initials: "YF", hue: 6 },
    Partner { name: "Aden Commercial", initials: "AC", hue: 7 },
];

/// Copies of the partner list per marquee row. Three keeps the track wider
/// than any viewport while the animation shifts it by one third.
const MARQUEE_REPEATS: usize = 3;

/// The two marquee rows: the list in order, then reversed, each repeated so
/// the CSS loop has no visible seam.
pub fn marquee_rows(partners: &[Partner]) -> (Vec<Partner>, Vec<Partner>) {
    let forward = partners.repeat(MARQUEE_REPEATS);
    let reversed: Vec<Partner> = partners.iter().rev().copied().collect();
    (forward, reversed.repeat(MARQUEE_REPEATS))
}

#[component]
pub fn PartnersSection(locale: Locale) -> Element {
    let (row1, row2) = marquee_rows(&PARTNERS);

    rsx! {
        section { id: "partners", class: "section partners",
            div { class: "container",
                header { class: "section__header",
                    h2 { class: "section__label", {t!(locale, "partners-label")} }
                    h3 { class: "section__title", {t!(locale, "partners-title")} }
                    p { class: "section__desc", {t!(locale, "partners-desc")} }
                }
            }
            // Marquee tracks always run left to right in layout terms.
            div { class: "marquee", dir: "ltr",
                div { class: "marquee__track",
                    for (i, partner) in row1.into_iter().enumerate() {
                        PartnerCard { key: "a{i}", partner }
                    }
                }
            }
            div { class: "marquee", dir: "ltr",
                div { class: "marquee__track marquee__track--reverse",
                    for (i, partner) in row2.into_iter().enumerate() {
                        PartnerCard { key: "b{i}", partner }
                    }
                }
            }
            div { class: "container partners__footer",
                span { class: "partners__badge", {t!(locale, "partners-badge")} }
            }
        }
    }
}

#[component]
fn PartnerCard(partner: Partner) -> Element {
    rsx! {
        div { class: "partner-card",
            div { class: "partner-card__logo partner-card__logo--{partner.hue}", "{partner.initials}" }
            span { class: "partner-card__name", "{partner.name}" }
        }
    }
}
