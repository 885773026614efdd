//! Compile-time site configuration: contact details, delivery identifiers and
//! UI timing constants.

/// Public contact address; also the fallback shown when delivery fails.
pub const CONTACT_EMAIL: &str = "info@easyway-ye.com";
pub const CONTACT_PHONE: &str = "+967 123 456 789";

/// Storage key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "easy-way-theme";

/// Vertical scroll offset (px) after which the navbar turns opaque.
pub const SCROLLED_THRESHOLD_PX: f64 = 40.0;

/// Distance (px) from the viewport top of the line a section must straddle to
/// count as the active one.
pub const ACTIVE_SECTION_LINE_PX: f64 = 120.0;

/// Delay before a closed contact overlay clears its fields, matching the exit
/// animation length in `main.css`.
pub const CLEAR_DELAY_MS: u64 = 400;

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const EMAILJS_SERVICE_ID: &str = "service_b45xjy4";
const EMAILJS_TEMPLATE_ID: &str = "template_96gduzn";
const EMAILJS_PUBLIC_KEY: &str = "dKFtNZkVLu4WTgbZ1";

/// Identifiers for the transactional email service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            service_id: EMAILJS_SERVICE_ID.to_string(),
            template_id: EMAILJS_TEMPLATE_ID.to_string(),
            public_key: EMAILJS_PUBLIC_KEY.to_string(),
        }
    }
}
