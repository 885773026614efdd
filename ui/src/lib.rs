//! Shared UI crate for the Easy Way landing page: locale and theme stores,
//! section tracking, the contact form state machine and the page itself.

pub mod contact;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod state;
pub mod theme;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    pub mod contact_modal;
    pub use contact_modal::{use_contact_overlay, ContactModal, ContactOverlay};

    pub mod icons;

    pub mod scroll_tracker;
    pub use scroll_tracker::use_scroll_tracker;
}

pub use state::SiteRoot;
