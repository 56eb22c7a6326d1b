#![allow(dead_code)]

use embassy_time::Duration;
use keyview::state::{ClockConfig, Date, EncoderMode, KeyboardState, LedIndicator, Modifiers};
use keyview::{OledBuffer, OledConfig, OledDriver, OledScreen};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Advance the mock clock.
pub fn advance_ms(ms: u64) {
    embassy_time::MockDriver::get().advance(Duration::from_millis(ms));
}

/// Scriptable keyboard state for driving the screen in tests.
#[derive(Clone)]
pub struct TestState {
    pub layer: u8,
    pub modifiers: Modifiers,
    pub leds: LedIndicator,
    pub matrix: [u32; 6],
    pub wpm: u16,
    pub encoder_mode: EncoderMode,
    pub minute_of_day: u16,
    pub date: Date,
    pub clock: ClockConfig,
    pub clock_edit: bool,
}

impl Default for TestState {
    fn default() -> Self {
        Self {
            layer: 0,
            modifiers: Modifiers::new(),
            leds: LedIndicator::new(),
            matrix: [0; 6],
            wpm: 0,
            encoder_mode: EncoderMode::Volume,
            minute_of_day: 780,
            date: Date {
                year: 44,
                month: 3,
                day: 5,
            },
            clock: ClockConfig::default(),
            clock_edit: false,
        }
    }
}

impl KeyboardState for TestState {
    const MATRIX_ROWS: usize = 6;
    const MATRIX_COLS: usize = 16;

    fn highest_layer(&self) -> u8 {
        self.layer
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn led_indicator(&self) -> LedIndicator {
        self.leds
    }

    fn matrix_row(&self, row: usize) -> u32 {
        self.matrix[row]
    }

    fn wpm(&self) -> u16 {
        self.wpm
    }

    fn encoder_mode(&self) -> EncoderMode {
        self.encoder_mode
    }

    fn minute_of_day(&self) -> u16 {
        self.minute_of_day
    }

    fn date(&self) -> Date {
        self.date
    }

    fn clock_config(&self) -> ClockConfig {
        self.clock
    }

    fn clock_edit_active(&self) -> bool {
        self.clock_edit
    }
}

/// Driver wrapper recording the calls the renderer makes.
pub struct SpyDriver {
    pub buffer: OledBuffer,
    pub clears: usize,
    pub raw_writes: Vec<Vec<u8>>,
    pub power_calls: Vec<bool>,
}

impl SpyDriver {
    pub fn new() -> Self {
        Self {
            buffer: OledBuffer::new(),
            clears: 0,
            raw_writes: Vec::new(),
            power_calls: Vec::new(),
        }
    }
}

impl OledDriver for SpyDriver {
    fn clear(&mut self) {
        self.clears += 1;
        self.buffer.clear();
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.buffer.set_cursor(col, row);
    }

    fn advance(&mut self) {
        self.buffer.advance();
    }

    fn write_char(&mut self, c: char, invert: bool) {
        self.buffer.write_char(c, invert);
    }

    fn write_pixel(&mut self, x: u8, y: u8, on: bool) {
        self.buffer.write_pixel(x, y, on);
    }

    fn write_raw(&mut self, data: &[u8]) {
        self.raw_writes.push(data.to_vec());
        self.buffer.write_raw(data);
    }

    fn set_power(&mut self, on: bool) {
        self.power_calls.push(on);
        self.buffer.set_power(on);
    }

    fn is_on(&self) -> bool {
        self.buffer.is_on()
    }
}

pub fn new_screen() -> OledScreen<OledBuffer> {
    OledScreen::new(OledBuffer::new(), OledConfig::default())
}

pub fn new_spy_screen() -> OledScreen<SpyDriver> {
    OledScreen::new(SpyDriver::new(), OledConfig::default())
}

/// Number of lit pixels inside one 6x8 text cell.
pub fn cell_lit(buffer: &OledBuffer, col: u8, row: u8) -> usize {
    let mut lit = 0;
    for dy in 0..8 {
        for dx in 0..6 {
            if buffer.pixel(col * 6 + dx, row * 8 + dy) {
                lit += 1;
            }
        }
    }
    lit
}
