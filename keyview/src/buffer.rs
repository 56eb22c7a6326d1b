//! 128x32 page-major framebuffer with a fixed character-cell text grid.
//!
//! The buffer uses the SSD1306 memory layout (one byte per 8-pixel column
//! segment, pages top to bottom), so [`OledBuffer::as_bytes`] can be flushed
//! verbatim to the common OLED controllers and raw sprite data in the same
//! format can be block-copied in. Text rendering draws through
//! `embedded-graphics` into a 21x4 grid of 6x8 cells.

use core::convert::Infallible;

use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::driver::OledDriver;

/// Display width in pixels.
pub const WIDTH: usize = 128;
/// Display height in pixels.
pub const HEIGHT: usize = 32;
/// Number of 8-pixel-tall pages.
pub const PAGES: usize = HEIGHT / 8;
/// Length of the raw buffer in bytes.
pub const BUFFER_BYTES: usize = WIDTH * PAGES;

/// Width of one text cell in pixels (5-pixel glyph plus 1 spacing).
const CELL_WIDTH: u8 = 6;
/// Height of one text cell in pixels.
const CELL_HEIGHT: u8 = 8;
/// Number of text columns.
pub const TEXT_COLS: u8 = (WIDTH / CELL_WIDTH as usize) as u8;
/// Number of text rows.
pub const TEXT_ROWS: u8 = (HEIGHT / CELL_HEIGHT as usize) as u8;

/// Owned framebuffer implementing [`OledDriver`].
///
/// The power flag is logical: the host reads [`OledBuffer::is_on`] after
/// polling and drives the panel's on/off command accordingly.
pub struct OledBuffer {
    buf: [u8; BUFFER_BYTES],
    cursor_col: u8,
    cursor_row: u8,
    on: bool,
}

impl OledBuffer {
    pub const fn new() -> Self {
        Self {
            buf: [0; BUFFER_BYTES],
            cursor_col: 0,
            cursor_row: 0,
            on: true,
        }
    }

    /// Raw page-major contents, ready to flush to the display controller.
    pub fn as_bytes(&self) -> &[u8; BUFFER_BYTES] {
        &self.buf
    }

    /// Read back a single pixel; out-of-range coordinates read as off.
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        if (x as usize) < WIDTH && (y as usize) < HEIGHT {
            self.buf[(y as usize / 8) * WIDTH + x as usize] & (1 << (y % 8)) != 0
        } else {
            false
        }
    }

    fn set_bit(&mut self, x: usize, y: usize, on: bool) {
        let byte = &mut self.buf[(y / 8) * WIDTH + x];
        if on {
            *byte |= 1 << (y % 8);
        } else {
            *byte &= !(1 << (y % 8));
        }
    }

    fn paint_cell(&mut self, c: char, invert: bool) {
        let x = self.cursor_col as i32 * CELL_WIDTH as i32;
        let y = self.cursor_row as i32 * CELL_HEIGHT as i32;
        let (fg, bg) = if invert {
            (BinaryColor::Off, BinaryColor::On)
        } else {
            (BinaryColor::On, BinaryColor::Off)
        };
        for dy in 0..CELL_HEIGHT as i32 {
            for dx in 0..CELL_WIDTH as i32 {
                let (px, py) = ((x + dx) as usize, (y + dy) as usize);
                if px < WIDTH && py < HEIGHT {
                    self.set_bit(px, py, bg.is_on());
                }
            }
        }
        let style = MonoTextStyleBuilder::new().font(&FONT_5X8).text_color(fg).build();
        let mut utf8 = [0u8; 4];
        let _ = Text::with_baseline(c.encode_utf8(&mut utf8), Point::new(x, y), style, Baseline::Top).draw(self);
    }
}

impl Default for OledBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for OledBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for OledBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..WIDTH as i32).contains(&point.x) && (0..HEIGHT as i32).contains(&point.y) {
                self.set_bit(point.x as usize, point.y as usize, color.is_on());
            }
        }
        Ok(())
    }
}

impl OledDriver for OledBuffer {
    fn clear(&mut self) {
        self.buf = [0; BUFFER_BYTES];
        self.cursor_col = 0;
        self.cursor_row = 0;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.cursor_col = col;
        self.cursor_row = row;
    }

    fn advance(&mut self) {
        self.cursor_col += 1;
        if self.cursor_col >= TEXT_COLS {
            self.cursor_col = 0;
            self.cursor_row = (self.cursor_row + 1) % TEXT_ROWS;
        }
    }

    fn write_char(&mut self, c: char, invert: bool) {
        self.paint_cell(c, invert);
        self.advance();
    }

    fn write_pixel(&mut self, x: u8, y: u8, on: bool) {
        if (x as usize) < WIDTH && (y as usize) < HEIGHT {
            self.set_bit(x as usize, y as usize, on);
        }
    }

    fn write_raw(&mut self, data: &[u8]) {
        let n = data.len().min(BUFFER_BYTES);
        self.buf[..n].copy_from_slice(&data[..n]);
    }

    fn set_power(&mut self, on: bool) {
        self.on = on;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pixel_roundtrip() {
        let mut buffer = OledBuffer::new();
        buffer.write_pixel(0, 0, true);
        buffer.write_pixel(127, 31, true);
        assert!(buffer.pixel(0, 0));
        assert!(buffer.pixel(127, 31));
        assert_eq!(buffer.as_bytes()[0], 0x01);
        buffer.write_pixel(0, 0, false);
        assert!(!buffer.pixel(0, 0));
        // Out of range is ignored, not wrapped.
        buffer.write_pixel(128, 0, true);
        buffer.write_pixel(0, 32, true);
        assert!(!buffer.pixel(128, 0));
    }

    #[test]
    fn test_raw_write_is_clamped() {
        let mut buffer = OledBuffer::new();
        buffer.write_raw(&[0xFF; BUFFER_BYTES + 64]);
        assert!(buffer.as_bytes().iter().all(|&b| b == 0xFF));
        buffer.write_raw(&[0x00; 8]);
        assert_eq!(&buffer.as_bytes()[..8], &[0x00; 8]);
        assert_eq!(buffer.as_bytes()[8], 0xFF);
    }

    #[test]
    fn test_cursor_wraps_at_grid_edge() {
        let mut buffer = OledBuffer::new();
        buffer.set_cursor(TEXT_COLS - 1, TEXT_ROWS - 1);
        buffer.write_char('x', false);
        // Wrapped back to the origin cell.
        buffer.write_char('y', false);
        assert!((0..6).any(|x| (0..8).any(|y| buffer.pixel(x, y))));
    }

    #[test]
    fn test_inverted_cell_fills_background() {
        let mut buffer = OledBuffer::new();
        buffer.write_char(' ', true);
        // A blank inverted cell is fully lit.
        for y in 0..8 {
            for x in 0..6 {
                assert!(buffer.pixel(x, y), "pixel {},{} off", x, y);
            }
        }
        let mut plain = OledBuffer::new();
        plain.write_char(' ', false);
        assert!((0..8).all(|y| (0..6).all(|x| !plain.pixel(x, y))));
    }

    #[test]
    fn test_clear_resets_cursor_and_contents() {
        let mut buffer = OledBuffer::new();
        buffer.set_cursor(5, 2);
        buffer.write_char('A', false);
        OledDriver::clear(&mut buffer);
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
        buffer.write_char('A', false);
        // Drawn at the origin after clear.
        assert!((0..6).any(|x| (0..8).any(|y| buffer.pixel(x, y))));
    }
}
