use log::Level;

pub const HEADLINE: &str = "Here for your child's health";
pub const DEMO_SUBHEADLINE: &str = "Kito App Demo";
pub const APP_SUBHEADLINE: &str = "Kito App Demo v1.0.3";
pub const CTA_LABEL: &str = "Access Kito App";
pub const APP_URL: &str = "https://app.kitohealth.org";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
