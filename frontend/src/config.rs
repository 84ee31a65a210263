use crate::navigation::scroll::HeaderThresholds;

pub const DEFAULT_SCROLLED_THRESHOLD: u32 = 20;
pub const DEFAULT_HIDE_THRESHOLD: u32 = 100;

/// Delay before a contact inquiry is reported as sent.
pub const SUBMIT_DELAY_MS: u32 = 1_000;

pub const TOAST_DISMISS_MS: u32 = 4_000;
pub const TOAST_ERROR_DISMISS_MS: u32 = 6_000;

pub const COMPANY_NAME: &str = "HydroX East African Ltd";
pub const PHONE_DISPLAY: &str = "+254 700 000 000";
pub const PHONE_HREF: &str = "tel:+254700000000";
pub const SALES_EMAIL: &str = "info@hydrox.co.ke";
pub const HEAD_OFFICE_EMAIL: &str = "hydro-x@intafrica.com";
pub const WEBSITE_URL: &str = "https://www.hydro-x.com";
pub const NAIROBI_ADDRESS: &str = "Industrial Area, Nairobi, Kenya";
pub const BUSINESS_HOURS: &str = "Mon-Fri: 8:00 AM - 6:00 PM";
pub const CONTACT_PERSON: &str = "Dickson Kashura";
pub const HEAD_OFFICE_ADDRESS: [&str; 3] = [
    "Kisutu Street, Nizari Flats 6",
    "P.O. Box 4857",
    "Dar es Salaam, Tanzania",
];

/// Header scroll thresholds, overridable at build time with
/// `HYDROX_SCROLLED_THRESHOLD` and `HYDROX_HIDE_THRESHOLD`.
pub fn header_thresholds() -> HeaderThresholds {
    HeaderThresholds {
        scrolled: parse_threshold(option_env!("HYDROX_SCROLLED_THRESHOLD"), DEFAULT_SCROLLED_THRESHOLD),
        hide: parse_threshold(option_env!("HYDROX_HIDE_THRESHOLD"), DEFAULT_HIDE_THRESHOLD),
    }
}

fn parse_threshold(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

pub fn get_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_falls_back_on_missing_or_bad_input() {
        assert_eq!(parse_threshold(None, 20), 20);
        assert_eq!(parse_threshold(Some("abc"), 20), 20);
        assert_eq!(parse_threshold(Some("-5"), 100), 100);
        assert_eq!(parse_threshold(Some(" 150 "), 100), 150);
    }
}
