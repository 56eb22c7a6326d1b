//! Tunable configuration for the display engine.

use embassy_time::Duration;

/// Timing and threshold configuration for [`crate::OledScreen`].
///
/// The defaults match the original firmware the layouts were lifted from.
#[derive(Clone, Copy, Debug)]
pub struct OledConfig {
    /// How long the display stays on after the last wakeup request.
    pub sleep_timeout: Duration,
    /// Minimum time each animation frame stays on screen, decoupling
    /// animation speed from the poll rate.
    pub frame_duration: Duration,
    /// How long the animation screen keeps playing at 0 WPM before it turns
    /// the display off.
    pub anim_timeout: Duration,
    /// Typing speed at or below which the animation idles.
    pub idle_wpm: u16,
    /// Typing speed at or above which the active-typing animation plays.
    pub tap_wpm: u16,
}

impl Default for OledConfig {
    fn default() -> Self {
        Self {
            sleep_timeout: Duration::from_secs(60),
            frame_duration: Duration::from_millis(200),
            anim_timeout: Duration::from_secs(60),
            idle_wpm: 25,
            tap_wpm: 30,
        }
    }
}
