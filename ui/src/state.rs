//! Composition-root state.
//!
//! [`SiteRoot`] owns the locale and theme signals and the mailer capability and
//! provides them as context. Components read them through the `use_*` hooks and
//! change them only through [`toggle_locale`] / [`toggle_theme`], which are the
//! stores' single writers.

use dioxus::prelude::*;

use crate::contact::MailerHandle;
use crate::core::config::DeliveryConfig;
use crate::core::platform;
use crate::i18n::Locale;
use crate::theme::{Theme, ThemeStore};

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

#[component]
pub fn SiteRoot(children: Element) -> Element {
    let locale = use_signal(Locale::default);
    use_context_provider(|| locale);

    let theme = use_signal(ThemeStore::load);
    use_context_provider(|| theme);

    use_context_provider(|| MailerHandle::emailjs(DeliveryConfig::default()));

    // Keep <html lang/dir> in step with the locale signal.
    use_effect(move || platform::apply_document_locale(locale()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {children}
    }
}

pub fn use_locale() -> Signal<Locale> {
    if let Some(locale) = try_use_context::<Signal<Locale>>() {
        return locale;
    }
    tracing::warn!("use_locale called outside SiteRoot; using a local default");
    use_signal(Locale::default)
}

pub fn use_theme() -> Signal<Theme> {
    if let Some(theme) = try_use_context::<Signal<Theme>>() {
        return theme;
    }
    tracing::warn!("use_theme called outside SiteRoot; using a local default");
    use_signal(Theme::default)
}

pub fn use_mailer() -> MailerHandle {
    if let Some(mailer) = try_use_context::<MailerHandle>() {
        return mailer;
    }
    tracing::warn!("use_mailer called outside SiteRoot; using the default EmailJS mailer");
    use_hook(|| MailerHandle::emailjs(DeliveryConfig::default()))
}

/// Switch between the two locales. Synchronous; the document attributes follow
/// through `SiteRoot`'s effect.
pub fn toggle_locale(mut locale: Signal<Locale>) {
    let next = locale.peek().toggled();
    tracing::info!(locale = %next, "locale switched");
    locale.set(next);
}

/// Flip and persist the theme.
pub fn toggle_theme(mut theme: Signal<Theme>) {
    let next = theme.peek().toggled();
    ThemeStore::set(next);
    theme.set(next);
}
