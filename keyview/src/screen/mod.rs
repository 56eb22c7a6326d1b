//! The OLED screen: repaint gating, mode dispatch and the per-mode
//! renderers.
//!
//! The host main loop calls [`OledScreen::poll`] every iteration; key
//! handlers call [`OledScreen::request_wakeup`] on activity that should keep
//! the display on, and [`OledScreen::request_repaint`] for content changes
//! (like clock ticks) that should not reset the sleep timer.

mod bongo;
pub mod clock;
mod frames;
mod power;
mod status;

use embassy_time::{Duration, Timer};

use crate::config::OledConfig;
use crate::driver::OledDriver;
use crate::state::{KeyboardState, OledMode};
use bongo::BongoAnimation;
use power::RepaintGate;

/// Poll interval of the [`OledScreen::run`] convenience loop.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Display engine tying the repaint gate, mode latch and renderers to a
/// driver.
pub struct OledScreen<D: OledDriver> {
    driver: D,
    config: OledConfig,
    mode: OledMode,
    rendered_mode: OledMode,
    gate: RepaintGate,
    bongo: BongoAnimation,
}

impl<D: OledDriver> OledScreen<D> {
    pub fn new(driver: D, config: OledConfig) -> Self {
        Self {
            driver,
            config,
            mode: OledMode::Default,
            rendered_mode: OledMode::Default,
            gate: RepaintGate::new(config.sleep_timeout),
            bongo: BongoAnimation::new(),
        }
    }

    pub fn mode(&self) -> OledMode {
        self.mode
    }

    /// Switch the display mode. Takes effect on the next repainting poll,
    /// which starts from a cleared buffer.
    pub fn set_mode(&mut self, mode: OledMode) {
        if mode != self.mode {
            info!("oled mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Request a repaint without resetting the sleep timer. No-op while the
    /// display is off, so a repaint request can never wake it.
    pub fn request_repaint(&mut self) {
        let display_on = self.driver.is_on();
        self.gate.request_repaint(display_on);
    }

    /// Request a repaint and reset the sleep timer. Call after any activity
    /// that should keep the display turned on.
    pub fn request_wakeup(&mut self) {
        self.gate.request_wakeup();
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Run one poll cycle: decide whether to repaint, and if so redraw the
    /// active screen. Returns whether a repaint happened.
    pub fn poll<S: KeyboardState>(&mut self, state: &S) -> bool {
        let clock_edit = state.clock_edit_active();
        if !self
            .gate
            .poll(self.mode, clock_edit, &mut self.driver, self.config.sleep_timeout)
        {
            return false;
        }

        self.driver.set_cursor(0, 0);

        // Mode switches need a clean canvas, notably when leaving the
        // full-buffer animation frames behind.
        if self.mode != self.rendered_mode {
            self.driver.clear();
            self.rendered_mode = self.mode;
        }

        // Editing the clock forces the clock screen whatever the mode.
        if clock_edit {
            clock::draw(&mut self.driver, state);
            return true;
        }

        match self.mode {
            OledMode::Time => clock::draw(&mut self.driver, state),
            OledMode::Bongo => self.bongo.render(&mut self.driver, state, &self.config),
            _ => status::draw(&mut self.driver, state),
        }
        true
    }

    /// Poll forever at a fixed interval, for hosts that give the display its
    /// own task.
    pub async fn run<S: KeyboardState>(&mut self, state: &S) -> ! {
        loop {
            self.poll(state);
            Timer::after(POLL_INTERVAL).await;
        }
    }
}

fn line_h<D: OledDriver>(driver: &mut D, x: u8, y: u8, len: u8) {
    for i in 0..len {
        driver.write_pixel(x + i, y, true);
    }
}

fn line_v<D: OledDriver>(driver: &mut D, x: u8, y: u8, len: u8) {
    for i in 0..len {
        driver.write_pixel(x, y + i, true);
    }
}
