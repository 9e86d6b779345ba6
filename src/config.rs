use log::Level;

/// Vertical offset (px) past which the navbar switches to its opaque treatment.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Band in the middle 5% of the viewport used to pick the active nav section.
pub const ACTIVE_SECTION_ROOT_MARGIN: &str = "-40% 0px -55% 0px";

pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Per-item entrance delay for the feature grid.
pub const STAGGER_STEP_MS: u32 = 100;
/// Per-item entrance delay for process steps and gallery cards.
pub const STEP_STAGGER_MS: u32 = 120;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
