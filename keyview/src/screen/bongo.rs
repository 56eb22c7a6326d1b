//! Typing-speed-driven sprite animation.
//!
//! The animation keeps its own power policy, independent of the general
//! sleep timer: any typing turns the display on, and a long stretch of
//! zero WPM turns it off.

use core::fmt::Write as _;

use embassy_time::Instant;
use heapless::String;

use crate::config::OledConfig;
use crate::driver::OledDriver;
use crate::state::KeyboardState;

use super::frames::{IDLE, PREP, TAP};

pub(crate) struct BongoAnimation {
    idle_frame: u8,
    tap_frame: u8,
    /// Last frame advance.
    frame_at: Instant,
    /// Last nonzero-WPM observation.
    active_at: Instant,
}

impl BongoAnimation {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            idle_frame: 0,
            tap_frame: 0,
            frame_at: now,
            active_at: now,
        }
    }

    pub fn render<D: OledDriver, S: KeyboardState>(&mut self, driver: &mut D, state: &S, config: &OledConfig) {
        let wpm = state.wpm();

        if wpm != 0 {
            // Any typing turns the display back on immediately.
            driver.set_power(true);
            self.step(driver, wpm, config);
            self.active_at = Instant::now();
        } else if self.active_at.elapsed() > config.anim_timeout {
            debug!("animation idle timeout, turning off");
            driver.set_power(false);
        } else {
            // Keep idling until the timeout hits.
            self.step(driver, wpm, config);
        }

        driver.set_cursor(0, 0);
        let mut readout: String<9> = String::new();
        let _ = write!(readout, "WPM:{:03}", wpm);
        driver.write_str(&readout, false);
    }

    /// Advance and draw one frame if the frame timer elapsed; otherwise the
    /// previous frame simply stays in the buffer.
    fn step<D: OledDriver>(&mut self, driver: &mut D, wpm: u16, config: &OledConfig) {
        if self.frame_at.elapsed() <= config.frame_duration {
            return;
        }
        self.frame_at = Instant::now();

        if wpm <= config.idle_wpm {
            self.idle_frame = (self.idle_frame + 1) % IDLE.len() as u8;
            // Frames play back to front.
            driver.write_raw(&IDLE[IDLE.len() - 1 - self.idle_frame as usize]);
        } else if wpm < config.tap_wpm {
            driver.write_raw(&PREP[0]);
        } else {
            self.tap_frame = (self.tap_frame + 1) % TAP.len() as u8;
            driver.write_raw(&TAP[TAP.len() - 1 - self.tap_frame as usize]);
        }
    }
}
