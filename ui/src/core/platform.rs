//! Document-level side effects. Everything here is a no-op off the web.

use crate::core::scroll::SectionRect;
use crate::i18n::Locale;
use crate::theme::Theme;

/// Write `lang` and `dir` on the root `<html>` element.
pub fn apply_document_locale(locale: Locale) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = document_root() {
            let _ = root.set_attribute("lang", locale.lang_attr());
            let _ = root.set_attribute("dir", locale.direction().as_attr());
        }
    }

    tracing::debug!(lang = locale.lang_attr(), dir = locale.direction().as_attr(), "document locale applied");
}

/// Swap the `light`/`dark` class and `data-theme` attribute on `<html>`.
pub fn apply_document_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = document_root() {
            let classes = root.class_list();
            let _ = classes.remove_1(theme.toggled().as_str());
            let _ = classes.add_1(theme.as_str());
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }

    tracing::debug!(theme = theme.as_str(), "document theme applied");
}

/// `Some(true)` when the system asks for a dark color scheme, `None` if the
/// preference cannot be queried.
pub fn system_prefers_dark() -> Option<bool> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|query| query.matches())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Current vertical scroll offset of the window in CSS pixels.
pub fn scroll_offset() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Viewport-relative vertical extent of the element with id `anchor`.
pub fn element_rect(anchor: &str) -> Option<SectionRect> {
    #[cfg(target_arch = "wasm32")]
    {
        let element = web_sys::window()?.document()?.get_element_by_id(anchor)?;
        let rect = element.get_bounding_client_rect();
        Some(SectionRect {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = anchor;
        None
    }
}

/// Bring the element with id `anchor` into view. Smooth scrolling and the
/// fixed-navbar offset come from `scroll-behavior`/`scroll-margin-top` in CSS.
pub fn scroll_to_anchor(anchor: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor));
        match element {
            Some(element) => element.scroll_into_view(),
            None => tracing::warn!(anchor, "scroll target not found"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(anchor, "scroll_to_anchor ignored off the web");
    }
}

#[cfg(target_arch = "wasm32")]
fn document_root() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}
