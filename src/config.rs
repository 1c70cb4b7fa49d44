use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const TELEGRAM_BOT_URL: &str = "https://t.me/pricedekhobot";

// Splash: slide-out starts at SPLASH_EXIT_AFTER_MS, the view is gone
// SPLASH_EXIT_DURATION_MS later.
pub const SPLASH_EXIT_AFTER_MS: u32 = 2_500;
pub const SPLASH_EXIT_DURATION_MS: u32 = 1_000;

pub const TYPE_MS_PER_CHAR: u32 = 100;
pub const HOLD_FULL_PHRASE_MS: u32 = 2_000;
pub const DELETE_MS_PER_CHAR: u32 = 50;
pub const CURSOR_BLINK_MS: u32 = 500;

pub const HERO_PHRASES: &[&str] = &[
    "Compare prices instantly.",
    "Get instant price alerts.",
    "Find the best deal.",
    "Never overpay again.",
];

/// Stand-in for the tracking request until a backend exists.
pub const SIMULATED_TRACKING_DELAY_MS: u32 = 2_000;

pub const TOAST_LIMIT: usize = 3;
pub const TOAST_DISMISS_MS: u32 = 5_000;
