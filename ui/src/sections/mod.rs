//! Landing-page sections, top to bottom. Each renders from the locale it is
//! given; the page decides the order.

mod about;
mod cta;
mod footer;
mod hero;
mod partners;
mod services;
mod stats;

pub use about::AboutSection;
pub use cta::CtaSection;
pub use footer::Footer;
pub use hero::Hero;
pub use partners::{marquee_rows, Partner, PartnersSection, PARTNERS};
pub use services::ServicesSection;
pub use stats::StatsStrip;
