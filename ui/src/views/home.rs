use dioxus::prelude::*;

use crate::components::{use_contact_overlay, AppNavbar, ContactModal};
use crate::sections::{
    AboutSection, CtaSection, Footer, Hero, PartnersSection, ServicesSection, StatsStrip,
};
use crate::state::use_locale;

#[cfg(debug_assertions)]
fn log_home_render(locale: crate::i18n::Locale) {
    tracing::trace!(%locale, "Home render");
}

/// The landing page. Owns the contact overlay so every call-to-action on the
/// page opens the same form.
#[component]
pub fn Home() -> Element {
    let locale = use_locale()();
    let overlay = use_contact_overlay();
    let open_contact = move |_| overlay.show();

    #[cfg(debug_assertions)]
    log_home_render(locale);

    rsx! {
        div { class: "page page-home", lang: locale.lang_attr(), dir: locale.direction().as_attr(),
            AppNavbar { on_contact: open_contact }
            main {
                Hero { locale, on_contact: open_contact }
                StatsStrip { locale }
                AboutSection { locale }
                ServicesSection { locale }
                PartnersSection { locale }
                CtaSection { locale, on_contact: open_contact }
            }
            Footer { locale }
            ContactModal { overlay }
        }
    }
}
