//! Typing speed estimation in words per minute.

use embassy_time::{Duration, Instant};

const CHARS_PER_WORD: u8 = 5;
const SAMPLES: u8 = 5;
const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Estimates typing speed from keystroke counts.
///
/// The host records one keystroke per key release and polls the monitor
/// from its main loop; the estimate is a moving average over the last few
/// one-second samples and snaps back to zero after an idle second.
pub struct WpmMonitor {
    keys_pressed: u8,
    wpm: u16,
    update_count: u8,
    sampled_at: Instant,
}

impl WpmMonitor {
    pub fn new() -> Self {
        Self {
            keys_pressed: 0,
            wpm: 0,
            update_count: 0,
            sampled_at: Instant::now(),
        }
    }

    /// Record one key release.
    pub fn record_keystroke(&mut self) {
        self.keys_pressed = self.keys_pressed.saturating_add(1);
    }

    /// Current estimate.
    pub fn wpm(&self) -> u16 {
        self.wpm
    }

    /// Advance the estimator, folding the keystroke counter into the
    /// average once per second. Returns the current estimate.
    pub fn poll(&mut self) -> u16 {
        if self.sampled_at.elapsed() >= SAMPLE_INTERVAL {
            self.sampled_at = Instant::now();
            self.sample();
        }
        self.wpm
    }

    fn sample(&mut self) {
        self.update_count = SAMPLES.min(self.update_count + 1);

        let instant_wpm = self.keys_pressed as u16 * 60 / CHARS_PER_WORD as u16;

        let avg_wpm = if instant_wpm > 0 {
            (self.wpm * (self.update_count - 1) as u16 + instant_wpm) / self.update_count as u16
        } else {
            self.update_count = 0;
            0
        };

        if avg_wpm != self.wpm {
            self.wpm = avg_wpm;
            debug!("wpm update: {}", self.wpm);
        }

        self.keys_pressed = 0;
    }
}

impl Default for WpmMonitor {
    fn default() -> Self {
        Self::new()
    }
}
