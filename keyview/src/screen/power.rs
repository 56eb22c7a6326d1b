//! Display power and repaint gating.

use embassy_time::{Duration, Instant};

use crate::driver::OledDriver;
use crate::state::OledMode;

/// Decides once per poll whether the screen gets repainted, and owns the
/// sleep timer.
///
/// The sleep deadline only moves on an explicit wakeup request. Bare
/// repaint requests leave it alone, so periodic content updates (a ticking
/// clock) cannot keep an idle display awake forever.
pub(crate) struct RepaintGate {
    sleep_at: Instant,
    wakeup_requested: bool,
    repaint_requested: bool,
}

impl RepaintGate {
    pub fn new(timeout: Duration) -> Self {
        Self {
            sleep_at: Instant::now() + timeout,
            wakeup_requested: false,
            repaint_requested: false,
        }
    }

    /// Flag a repaint, only while the display is on. A repaint request must
    /// never be able to covertly wake the display.
    pub fn request_repaint(&mut self, display_on: bool) {
        if display_on {
            self.repaint_requested = true;
        }
    }

    /// Flag a repaint that also resets the sleep timer.
    pub fn request_wakeup(&mut self) {
        self.wakeup_requested = true;
    }

    /// Evaluate the gate for this poll. Priorities, highest first: the
    /// `Off` mode, wakeup requests, repaint requests, the off state, the
    /// sleep deadline.
    pub fn poll<D: OledDriver>(
        &mut self,
        mode: OledMode,
        clock_edit: bool,
        driver: &mut D,
        timeout: Duration,
    ) -> bool {
        // In the Off mode the display is kept turned off; any requests are
        // swallowed. Clock editing overrides this so the user is never
        // adjusting an invisible clock.
        if mode == OledMode::Off && !clock_edit {
            self.wakeup_requested = false;
            self.repaint_requested = false;
            driver.set_power(false);
            return false;
        }

        if self.wakeup_requested {
            self.wakeup_requested = false;
            self.repaint_requested = false;
            self.sleep_at = Instant::now() + timeout;
            driver.set_power(true);
            return true;
        }

        if self.repaint_requested {
            self.repaint_requested = false;
            return true;
        }

        // While off, skip the repaint entirely: redrawing would turn the
        // display back on if the image changed in any way.
        if !driver.is_on() {
            return false;
        }

        if Instant::now() >= self.sleep_at {
            debug!("oled sleep timeout, turning off");
            driver.set_power(false);
            return false;
        }

        // Repaint on every poll while on. Covering each possible state
        // change with an explicit request would avoid some redraws, but any
        // missed request would leave a stale image on screen.
        true
    }
}
