use log::Level;

pub const INITIAL_REVEAL_POSITION: f64 = 50.0;

// Arrow key step for the comparison handle, in percent
pub const KEY_STEP: f64 = 5.0;

// Navigation input is dropped for this long after every gallery index change
pub const TRANSITION_GUARD_MS: u32 = 300;

pub const LAZY_LOAD_THRESHOLD: f64 = 0.1;
pub const LAZY_LOAD_ROOT_MARGIN: &str = "50px";

pub const CONTACT_EMAIL: &str = "taufiqshaikhfz1@gmail.com";

// Scroll offset after which the nav bar gets its solid background
pub const NAV_SCROLLED_OFFSET: f64 = 50.0;

pub const COPY_FEEDBACK_MS: u32 = 2_000;
pub const FORM_RESET_MS: u32 = 1_000;

// Fade in, progress bar fill, fade out
pub const PRELOADER_MS: u32 = 4_100;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose drag/load tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
