//! Core display operations
//!
//! [`Display`] frames bus transactions into SSD1306 commands and data
//! streams, and layers a text cursor on top: page 0-7, pixel column 0-127,
//! newline handling, and automatic wrap at the right edge.
//!
//! The tracked cursor always mirrors the controller's hardware addressing
//! state. The controller cannot report its own position, so every cursor
//! mutation immediately issues the matching position-set commands.

use embedded_hal::delay::DelayNs;

use crate::command::{
    CONTROL_COMMAND, CONTROL_DATA, INIT_SEQUENCE, SET_COLUMN_HIGH, SET_COLUMN_LOW, SET_CONTRAST,
    SET_PAGE_START,
};
use crate::config::Config;
use crate::error::Error;
use crate::font::{self, Font5x7, GlyphTable};
use crate::interface::BusInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Page rows on a 128x64 panel
pub const PAGES: u8 = 8;

/// Pixel columns on a 128x64 panel
pub const COLUMNS: u8 = 128;

/// Width of one character cell: 5 glyph columns plus 1 spacing column
pub const CELL_WIDTH: u8 = 6;

/// Last column at which a full character cell still fits.
///
/// A glyph starting at 122 writes columns 122-127 exactly; anything past
/// that wraps to the next page first. The check runs before rendering, so
/// columns 123-127 are never used as a start position.
const WRAP_THRESHOLD: u8 = 122;

/// Settle time after power-on before the controller accepts commands
const POWER_ON_DELAY_MS: u32 = 100;

/// Text-mode driver for the SSD1306 over a two-wire bus
///
/// Generic over the bus seam and the glyph source so both can be swapped
/// for mocks in tests.
///
/// ## Type Parameters
///
/// * `I` - Bus interface implementing [`BusInterface`]
/// * `F` - Glyph source implementing [`GlyphTable`], [`Font5x7`] by default
pub struct Display<I, F = Font5x7>
where
    I: BusInterface,
    F: GlyphTable,
{
    /// Bus interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Glyph source
    font: F,
    /// Current page row (0-7), mirrors the hardware page register
    page: u8,
    /// Current pixel column (0-127), mirrors the hardware column register
    column: u8,
}

impl<I> Display<I>
where
    I: BusInterface,
{
    /// Create a new Display with the built-in 5x7 font
    pub fn new(interface: I, config: Config) -> Self {
        Self::with_font(interface, config, Font5x7)
    }
}

impl<I, F> Display<I, F>
where
    I: BusInterface,
    F: GlyphTable,
{
    /// Create a new Display with a custom glyph source
    pub fn with_font(interface: I, config: Config, font: F) -> Self {
        Self {
            interface,
            config,
            font,
            page: 0,
            column: 0,
        }
    }

    /// Initialize the controller for 128x64 page-addressed operation
    ///
    /// Waits out the power-on settle time, then replays the fixed startup
    /// sequence with the configured contrast. Leaves the cursor at (0, 0),
    /// matching the controller's reset addressing state.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        delay.delay_ms(POWER_ON_DELAY_MS);

        log::debug!("initializing SSD1306 at {:#04x}", self.config.address);
        for &(command, argument) in INIT_SEQUENCE {
            self.send_command(command)?;
            if let Some(argument) = argument {
                let argument = if command == SET_CONTRAST {
                    self.config.contrast
                } else {
                    argument
                };
                self.send_command(argument)?;
            }
        }

        self.page = 0;
        self.column = 0;
        Ok(())
    }

    /// Turn every pixel off
    ///
    /// Writes 128 zero bytes to each of the 8 pages. The cursor is left at
    /// (7, 0), where the last page write began; the hardware column
    /// auto-increment is not mirrored because no rendering depends on it.
    pub fn clear(&mut self) -> DisplayResult<I> {
        log::debug!("clearing display");
        for page in 0..PAGES {
            self.set_position(page, 0)?;
            self.begin_data()?;
            for _ in 0..COLUMNS {
                self.send_data_byte(0x00)?;
            }
            self.end_data()?;
        }
        Ok(())
    }

    /// Move the cursor to an absolute (page, column) position
    ///
    /// Updates the tracked cursor and pushes the new position to hardware
    /// as the three page-addressing commands.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPosition` if page > 7 or column > 127; the
    /// cursor and hardware state are left untouched.
    pub fn set_position(&mut self, page: u8, column: u8) -> DisplayResult<I> {
        if page >= PAGES || column >= COLUMNS {
            return Err(Error::InvalidPosition { page, column });
        }
        self.page = page;
        self.column = column;

        self.send_command(SET_PAGE_START | (page & 0x07))?;
        self.send_command(SET_COLUMN_LOW | (column & 0x0F))?;
        self.send_command(SET_COLUMN_HIGH | (column >> 4))?;
        Ok(())
    }

    /// Current cursor position as (page, column)
    pub fn cursor(&self) -> (u8, u8) {
        (self.page, self.column)
    }

    /// Render one ASCII byte at the cursor
    ///
    /// `'\n'` moves to the start of the next page (wrapping from page 7
    /// back to page 0, overwriting the top of the screen). Any other byte
    /// wraps the same way first if a full cell no longer fits, then blits
    /// 5 glyph columns plus 1 spacing column and advances the cursor by 6.
    /// Bytes outside 0x20-0x7E render as a space.
    pub fn write_char(&mut self, c: u8) -> DisplayResult<I> {
        if c == b'\n' {
            return self.newline();
        }

        if self.column > WRAP_THRESHOLD {
            self.newline()?;
        }

        let glyph = self.font.glyph(font::sanitize(c));
        self.begin_data()?;
        for column in glyph {
            self.send_data_byte(column)?;
        }
        self.send_data_byte(0x00)?;
        self.end_data()?;

        self.column += CELL_WIDTH;
        Ok(())
    }

    /// Render a string byte-wise at the cursor
    ///
    /// Equivalent to [`write_char`](Self::write_char) over each byte in
    /// order, stopping at the first bus error.
    pub fn write_str(&mut self, s: &str) -> DisplayResult<I> {
        for c in s.bytes() {
            self.write_char(c)?;
        }
        Ok(())
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the underlying bus interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Reset the column and advance to the next page, pushing the new
    /// position to hardware
    fn newline(&mut self) -> DisplayResult<I> {
        let next_page = (self.page + 1) % PAGES;
        self.set_position(next_page, 0)
    }

    /// Send one command byte in its own framed transaction
    fn send_command(&mut self, command: u8) -> DisplayResult<I> {
        self.interface.start().map_err(Error::Interface)?;
        self.interface
            .send_address(self.config.address)
            .map_err(Error::Interface)?;
        self.interface
            .send_byte(CONTROL_COMMAND)
            .map_err(Error::Interface)?;
        self.interface.send_byte(command).map_err(Error::Interface)?;
        self.interface.stop().map_err(Error::Interface)
    }

    /// Open a pixel-data transaction
    ///
    /// Every byte sent until [`end_data`](Self::end_data) is written to
    /// display RAM at the hardware cursor, which auto-increments the
    /// column within the current page.
    fn begin_data(&mut self) -> DisplayResult<I> {
        self.interface.start().map_err(Error::Interface)?;
        self.interface
            .send_address(self.config.address)
            .map_err(Error::Interface)?;
        self.interface
            .send_byte(CONTROL_DATA)
            .map_err(Error::Interface)
    }

    /// Send one pixel-data byte inside an open data transaction
    fn send_data_byte(&mut self, byte: u8) -> DisplayResult<I> {
        self.interface.send_byte(byte).map_err(Error::Interface)
    }

    /// Close a pixel-data transaction
    fn end_data(&mut self) -> DisplayResult<I> {
        self.interface.stop().map_err(Error::Interface)
    }
}
