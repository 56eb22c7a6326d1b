//! Default status screen: layer, encoder mode, lock and modifier
//! indicators, the current time and a live matrix bitmap.

use crate::driver::OledDriver;
use crate::state::KeyboardState;

use super::{clock, line_h, line_v};

/// Top-left corner of the matrix bitmap box.
const MATRIX_X: u8 = 0;
const MATRIX_Y: u8 = 18;

pub(crate) fn draw<D: OledDriver, S: KeyboardState>(driver: &mut D, state: &S) {
    driver.write_str("LAYER ", false);
    driver.write_char((b'0' + state.highest_layer()) as char, true);

    driver.write_str(" ENC ", false);
    driver.write_str(state.encoder_mode().label(), true);

    let leds = state.led_indicator();
    driver.set_cursor(18, 0);
    driver.write_str("CAP", leds.caps_lock());
    driver.set_cursor(18, 1);
    driver.write_str("SCR", leds.scroll_lock());

    let mods = state.modifiers();
    driver.set_cursor(6, 3);
    driver.write_str("S", mods.shift());
    driver.advance();
    driver.write_str("C", mods.ctrl());
    driver.advance();
    driver.write_str("A", mods.alt());
    driver.advance();
    driver.write_str("G", mods.gui());
    driver.advance();

    driver.write_str(&clock::time_string(state), false);

    // One pixel per key, inset inside the outline box.
    for row in 0..S::MATRIX_ROWS {
        let bits = state.matrix_row(row);
        for col in 0..S::MATRIX_COLS {
            let on = bits & (1 << col) != 0;
            driver.write_pixel(MATRIX_X + col as u8 + 2, MATRIX_Y + row as u8 + 2, on);
        }
    }

    // Outline.
    line_h(driver, MATRIX_X, MATRIX_Y, 19);
    line_h(driver, MATRIX_X, MATRIX_Y + 9, 19);
    line_v(driver, MATRIX_X, MATRIX_Y, 9);
    line_v(driver, MATRIX_X + 19, MATRIX_Y, 9);

    // Tick marking where the OLED sits in the physical layout.
    line_h(driver, MATRIX_X + 14, MATRIX_Y + 2, 3);

    // Separators closing off the inverted layer and encoder fields.
    line_v(driver, 35, 0, 8);
    line_v(driver, 71, 0, 8);
}
