//! Clock screen and time/date formatting.
//!
//! While a clock-set session is active this screen preempts the selected
//! display mode and underlines the field being edited.

use core::fmt::Write as _;

use heapless::String;

use crate::driver::OledDriver;
use crate::state::{ClockField, EncoderMode, KeyboardState};

use super::{line_h, line_v};

pub(crate) fn draw<D: OledDriver, S: KeyboardState>(driver: &mut D, state: &S) {
    driver.set_cursor(0, 0);
    driver.write_str(&date_string(state), false);
    driver.set_cursor(0, 2);
    driver.write_str(&time_string(state), false);

    driver.set_cursor(12, 0);
    driver.write_str(" ENC ", false);
    driver.write_str(state.encoder_mode().label(), true);

    driver.set_cursor(13, 1);
    driver.write_str("LAYER ", false);
    driver.write_char((b'0' + state.highest_layer()) as char, true);

    driver.set_cursor(15, 3);
    driver.write_str("CAPS", state.led_indicator().caps_lock());

    if state.clock_edit_active() {
        let (x, y, len) = underline(state.clock_config().field);
        line_h(driver, x, y, len);
    }

    // Separators closing off the inverted encoder and layer fields.
    line_v(driver, 101, 0, 8);
    line_v(driver, 113, 8, 8);
}

/// Screen span `(x, y, len)` of the underline cursor for each editable
/// field.
pub const fn underline(field: ClockField) -> (u8, u8, u8) {
    match field {
        ClockField::Hour => (0, 25, 10),
        ClockField::Minute => (18, 25, 10),
        ClockField::Year => (0, 9, 24),
        ClockField::Month => (30, 9, 10),
        ClockField::Day => (48, 9, 10),
    }
}

/// 12-hour `hh:mmam`/`hh:mmpm` rendering of the current time, or of the
/// in-progress edit values while the encoder is in clock-set mode.
pub fn time_string<S: KeyboardState>(state: &S) -> String<8> {
    let (hour, minute) = if state.encoder_mode() == EncoderMode::ClockSet {
        let config = state.clock_config();
        (config.hour as u16, config.minute as u16)
    } else {
        (state.minute_of_day() / 60, state.minute_of_day() % 60)
    };

    let is_pm = hour / 12 > 0;
    let mut hour = hour % 12;
    if hour == 0 {
        hour = 12;
    }

    let mut out = String::new();
    let _ = write!(out, "{:02}:{:02}{}", hour, minute, if is_pm { "pm" } else { "am" });
    out
}

/// Fixed-width `YYYY-MM-DD` rendering. The stored year counts from 1980.
pub fn date_string<S: KeyboardState>(state: &S) -> String<11> {
    let (year, month, day) = if state.encoder_mode() == EncoderMode::ClockSet {
        let config = state.clock_config();
        (config.year, config.month, config.day)
    } else {
        let date = state.date();
        (date.year, date.month, date.day)
    };

    let mut out = String::new();
    let _ = write!(out, "{:04}-{:02}-{:02}", year as u16 + 1980, month, day);
    out
}
