use dioxus::prelude::*;

use crate::components::icons::{CloseIcon, MenuIcon, MoonIcon, SunIcon};
use crate::components::scroll_tracker::use_scroll_tracker;
use crate::core::platform;
use crate::core::scroll::SectionId;
use crate::i18n::Locale;
use crate::state::{toggle_locale, toggle_theme, use_locale, use_theme};
use crate::t;
use crate::theme::Theme;

/// Fixed top navigation for the landing page.
///
/// Section links scroll in-page instead of navigating: the router owns the
/// URL fragment (`#/`), so plain `#about` hrefs would resolve to the
/// not-found route. The highlighted entry comes from the scroll tracker, which
/// only runs while this navbar is mounted.
///
/// The drawer used on narrow screens slides in from the locale's trailing edge
/// and closes whenever a link in it is followed.
#[component]
pub fn AppNavbar(on_contact: EventHandler<()>) -> Element {
    let locale_signal = use_locale();
    let theme_signal = use_theme();
    let locale = locale_signal();
    let theme = theme_signal();
    let scroll = use_scroll_tracker()();
    let mut drawer_open = use_signal(|| false);

    #[cfg(debug_assertions)]
    tracing::debug!(%locale, ?scroll, "AppNavbar render");

    let header_class = if scroll.scrolled {
        "navbar navbar--scrolled"
    } else {
        "navbar"
    };
    let drawer_class = format!(
        "navbar__drawer navbar__drawer--{}{}",
        locale.drawer_side().as_class(),
        if drawer_open() { " navbar__drawer--open" } else { "" }
    );

    rsx! {
        header { id: "navbar", class: header_class,
            div { class: "navbar__inner",
                // Brand
                a {
                    class: "navbar__brand",
                    href: "#/",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        platform::scroll_to_anchor("top");
                    },
                    span { class: "navbar__brand-mark", "EW" }
                    span { class: "navbar__brand-name", {t!(locale, "brand-name")} }
                }

                nav { class: "navbar__links",
                    {section_links(locale, scroll.active, None)}
                }

                div { class: "navbar__actions",
                    button {
                        r#type: "button",
                        class: "navbar__toggle navbar__toggle--locale",
                        lang: locale.toggled().lang_attr(),
                        onclick: move |_| toggle_locale(locale_signal),
                        {t!(locale, "nav-switch-language")}
                    }
                    button {
                        r#type: "button",
                        class: "navbar__toggle navbar__toggle--theme",
                        aria_label: t!(locale, "nav-toggle-theme"),
                        onclick: move |_| toggle_theme(theme_signal),
                        if theme == Theme::Dark {
                            SunIcon {}
                        } else {
                            MoonIcon {}
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary navbar__contact",
                        onclick: move |_| on_contact.call(()),
                        {t!(locale, "nav-contact")}
                    }
                    button {
                        r#type: "button",
                        class: "navbar__toggle navbar__menu",
                        aria_label: t!(locale, "nav-open-menu"),
                        aria_expanded: drawer_open(),
                        onclick: move |_| drawer_open.set(true),
                        MenuIcon {}
                    }
                }
            }
        }

        // Mobile drawer
        if drawer_open() {
            div { class: "navbar__scrim", onclick: move |_| drawer_open.set(false) }
        }
        aside { class: "{drawer_class}", aria_hidden: !drawer_open(),
            button {
                r#type: "button",
                class: "navbar__toggle navbar__drawer-close",
                aria_label: t!(locale, "nav-close-menu"),
                onclick: move |_| drawer_open.set(false),
                CloseIcon {}
            }
            nav { class: "navbar__drawer-links",
                {section_links(locale, scroll.active, Some(drawer_open))}
            }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| {
                    drawer_open.set(false);
                    on_contact.call(());
                },
                {t!(locale, "nav-contact")}
            }
        }
    }
}

fn section_label(locale: Locale, section: SectionId) -> String {
    match section {
        SectionId::About => t!(locale, "nav-about"),
        SectionId::Services => t!(locale, "nav-services"),
        SectionId::Partners => t!(locale, "nav-partners"),
    }
}

/// One link per tracked section. `drawer` is closed after a click when given.
fn section_links(
    locale: Locale,
    active: Option<SectionId>,
    drawer: Option<Signal<bool>>,
) -> Element {
    rsx! {
        for section in SectionId::ORDER {
            a {
                key: "{section.anchor()}",
                class: if active == Some(section) { "navbar__link navbar__link--active" } else { "navbar__link" },
                href: "#/",
                aria_current: if active == Some(section) { "true" } else { "false" },
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    if let Some(mut drawer) = drawer {
                        drawer.set(false);
                    }
                    platform::scroll_to_anchor(section.anchor());
                },
                {section_label(locale, section)}
                span { class: "navbar__underline", aria_hidden: "true" }
            }
        }
    }
}
