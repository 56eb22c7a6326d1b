//! Keyboard-side state read by the display: display and encoder modes, HID
//! indicator and modifier flags, and the compact wall-clock types.

use bitfield_struct::bitfield;

/// What the OLED currently shows.
///
/// The mode is owned by [`crate::OledScreen`] and changed by host
/// key-processing code via [`crate::OledScreen::set_mode`]. Switching modes
/// clears the display buffer on the next repaint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OledMode {
    /// Status screen: layer, encoder mode, lock and modifier indicators,
    /// time and the live matrix bitmap.
    #[default]
    Default,
    /// Big clock screen, also used for setting the clock.
    Time,
    /// Typing-speed-driven bongo cat animation.
    Bongo,
    /// Display kept off; wakeup requests are ignored.
    Off,
}

impl From<u8> for OledMode {
    fn from(mode: u8) -> Self {
        match mode {
            1 => OledMode::Time,
            2 => OledMode::Bongo,
            3 => OledMode::Off,
            _ => OledMode::Default,
        }
    }
}

/// Function assigned to the rotary encoder, shown on the status and clock
/// screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderMode {
    #[default]
    Volume,
    Media,
    Scroll,
    Brightness,
    Backlight,
    ClockSet,
    Custom0,
    Custom1,
    Custom2,
}

impl EncoderMode {
    /// Three-character label rendered next to `ENC`.
    pub const fn label(&self) -> &'static str {
        match self {
            EncoderMode::Volume => "VOL",
            EncoderMode::Media => "MED",
            EncoderMode::Scroll => "SCR",
            EncoderMode::Brightness => "BRT",
            EncoderMode::Backlight => "BKL",
            EncoderMode::ClockSet => "CLK",
            EncoderMode::Custom0 => "CS0",
            EncoderMode::Custom1 => "CS1",
            EncoderMode::Custom2 => "CS2",
        }
    }
}

impl From<u8> for EncoderMode {
    fn from(mode: u8) -> Self {
        match mode {
            1 => EncoderMode::Media,
            2 => EncoderMode::Scroll,
            3 => EncoderMode::Brightness,
            4 => EncoderMode::Backlight,
            5 => EncoderMode::ClockSet,
            6 => EncoderMode::Custom0,
            7 => EncoderMode::Custom1,
            8 => EncoderMode::Custom2,
            _ => EncoderMode::Volume,
        }
    }
}

/// Indicators defined in the HID spec 11.1
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct LedIndicator {
    #[bits(1)]
    pub num_lock: bool,
    #[bits(1)]
    pub caps_lock: bool,
    #[bits(1)]
    pub scroll_lock: bool,
    #[bits(1)]
    pub compose: bool,
    #[bits(1)]
    pub kana: bool,
    #[bits(3)]
    _reserved: u8,
}

impl LedIndicator {
    pub const NUM_LOCK: Self = Self::new().with_num_lock(true);
    pub const CAPS_LOCK: Self = Self::new().with_caps_lock(true);
    pub const SCROLL_LOCK: Self = Self::new().with_scroll_lock(true);
}

/// Held-modifier byte in HID report order.
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct Modifiers {
    #[bits(1)]
    pub left_ctrl: bool,
    #[bits(1)]
    pub left_shift: bool,
    #[bits(1)]
    pub left_alt: bool,
    #[bits(1)]
    pub left_gui: bool,
    #[bits(1)]
    pub right_ctrl: bool,
    #[bits(1)]
    pub right_shift: bool,
    #[bits(1)]
    pub right_alt: bool,
    #[bits(1)]
    pub right_gui: bool,
}

impl Modifiers {
    /// Either ctrl key held.
    pub const fn ctrl(&self) -> bool {
        self.left_ctrl() || self.right_ctrl()
    }

    /// Either shift key held.
    pub const fn shift(&self) -> bool {
        self.left_shift() || self.right_shift()
    }

    /// Either alt key held.
    pub const fn alt(&self) -> bool {
        self.left_alt() || self.right_alt()
    }

    /// Either gui key held.
    pub const fn gui(&self) -> bool {
        self.left_gui() || self.right_gui()
    }
}

/// Calendar date in the compact on-device encoding: the year is counted
/// from 1980, as in FAT timestamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Date {
    pub year: u8,
    pub month: u8,
    pub day: u8,
}

/// Field selected for editing on the clock screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockField {
    #[default]
    Hour,
    Minute,
    Year,
    Month,
    Day,
}

impl From<u8> for ClockField {
    fn from(field: u8) -> Self {
        match field {
            1 => ClockField::Minute,
            2 => ClockField::Year,
            3 => ClockField::Month,
            4 => ClockField::Day,
            _ => ClockField::Hour,
        }
    }
}

/// In-progress clock edit values, owned and mutated by host encoder
/// handling while a clock-set session is active. The year uses the same
/// 1980 offset as [`Date`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    pub hour: u8,
    pub minute: u8,
    pub year: u8,
    pub month: u8,
    pub day: u8,
    /// Field the underline cursor sits under.
    pub field: ClockField,
}

/// Live keyboard state sampled by the renderer on every repaint.
///
/// The host implements this against whatever owns the real state; the
/// display never caches any of it.
pub trait KeyboardState {
    /// Matrix dimensions shown by the status-screen bitmap.
    const MATRIX_ROWS: usize;
    const MATRIX_COLS: usize;

    /// Highest active layer.
    fn highest_layer(&self) -> u8;

    /// Currently held modifiers.
    fn modifiers(&self) -> Modifiers;

    /// Host lock-LED state.
    fn led_indicator(&self) -> LedIndicator;

    /// Bitmask of pressed keys in one matrix row, bit `n` = column `n`.
    fn matrix_row(&self, row: usize) -> u32;

    /// Current typing speed in words per minute.
    fn wpm(&self) -> u16;

    /// Current rotary encoder assignment.
    fn encoder_mode(&self) -> EncoderMode;

    /// Wall-clock time as minutes since midnight.
    fn minute_of_day(&self) -> u16;

    /// Wall-clock calendar date.
    fn date(&self) -> Date;

    /// Clock values being edited. Only meaningful while
    /// [`Self::clock_edit_active`] returns true or the encoder is in
    /// [`EncoderMode::ClockSet`].
    fn clock_config(&self) -> ClockConfig;

    /// Whether a clock-set session is active. While it is, the clock screen
    /// preempts the current display mode.
    fn clock_edit_active(&self) -> bool;
}
