//! Internationalization (i18n) support for `easyway-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/easyway_ui.ftl   (fallback/reference)
//!   ar-YE/easyway_ui.ftl   (right-to-left locale)
//! ```
//!
//! The site only ever shows two languages, so instead of a single global
//! loader that gets re-selected on every switch, each [`Locale`] owns its own
//! lazily built loader. Looking up the bundle is then a pure function of the
//! active locale, which the composition root keeps in a `Signal<Locale>`.
//!
//! Usage in a component:
//! ```ignore
//! let locale = crate::state::use_locale();
//! let title = t!(locale(), "hero-badge");
//! let rights = t!(locale(), "footer-rights", year = 2026);
//! ```
use std::fmt;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Ergonomic translation macro.
/// Examples:
///     t!(locale, "nav-about")
///     t!(locale, "footer-rights", year = 2026)
///
/// Expands to `fl!(i18n::bundle(locale), ...)`, so message IDs are checked
/// against the fallback bundle at compile time.
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::bundle($locale), $key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::bundle($locale), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain": the package name with `-` as `_`, which is the file name
/// `fl!` resolves under each locale folder.
const DOMAIN: &str = "easyway_ui";

const FALLBACK_TAG: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// The two display languages of the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Base text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Horizontal edge of the viewport, used for mirrored layout decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    pub fn as_class(self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// Fluent folder name under `i18n/`.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => FALLBACK_TAG,
            Locale::Ar => "ar-YE",
        }
    }

    /// Value for the HTML `lang` attribute.
    pub fn lang_attr(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Locale::En => TextDirection::Ltr,
            Locale::Ar => TextDirection::Rtl,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    /// Edge the mobile drawer slides in from (the reading-order end).
    pub fn drawer_side(self) -> Edge {
        match self.direction() {
            TextDirection::Ltr => Edge::Right,
            TextDirection::Rtl => Edge::Left,
        }
    }

    /// Edge floating badges are anchored to.
    pub fn trailing_edge(self) -> Edge {
        self.drawer_side()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lang_attr())
    }
}

static EN_BUNDLE: Lazy<FluentLanguageLoader> = Lazy::new(|| load_bundle(Locale::En));
static AR_BUNDLE: Lazy<FluentLanguageLoader> = Lazy::new(|| load_bundle(Locale::Ar));

/// Translation bundle for `locale`. Built on first use, then shared.
pub fn bundle(locale: Locale) -> &'static FluentLanguageLoader {
    match locale {
        Locale::En => &*EN_BUNDLE,
        Locale::Ar => &*AR_BUNDLE,
    }
}

fn load_bundle(locale: Locale) -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK_TAG
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback.clone());

    let requested: LanguageIdentifier = locale.tag().parse().unwrap_or(fallback);
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[requested]) {
        tracing::error!(locale = locale.tag(), %err, "failed loading translation bundle; using fallback");
    }
    // Only applies to bundles already loaded, so it must follow `select`.
    loader.set_use_isolating(false);
    loader
}

/// List embedded language folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
