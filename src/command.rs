//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306 OLED
//! display controller, the I2C control bytes that frame them, and the fixed
//! power-on initialization sequence.
//!
//! ## Command Structure
//!
//! Every transaction on the two-wire bus follows the pattern:
//! 1. Start condition
//! 2. Device address (write mode)
//! 3. Control byte: [`CONTROL_COMMAND`] for a command, [`CONTROL_DATA`] for
//!    a run of pixel data
//! 4. Command byte(s) or data byte(s)
//! 5. Stop condition
//!
//! Commands that take an argument receive it as a second command
//! transaction; this driver issues one transaction per byte, matching the
//! controller's single-byte command framing.

/// Default 7-bit I2C address of the SSD1306 (SA0 low)
///
/// Encoded on the wire as 0x78 once shifted left with the write bit clear.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte marking the next byte as a command (Co=0, D/C#=0)
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte marking all following bytes as pixel data (Co=0, D/C#=1)
pub const CONTROL_DATA: u8 = 0x40;

// Fundamental commands

/// Set contrast control command (0x81)
///
/// Requires 1 argument byte (0x00-0xFF, reset 0x7F).
pub const SET_CONTRAST: u8 = 0x81;

/// Normal (non-inverted) display mode command (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Display off / sleep mode command (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on command (0xAF)
///
/// Must follow charge pump enable; the panel stays dark otherwise.
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing commands

/// Set memory addressing mode command (0x20)
///
/// Requires 1 argument byte: 0x00 horizontal, 0x01 vertical,
/// 0x02 page addressing. This driver uses page addressing only.
pub const SET_ADDRESSING_MODE: u8 = 0x20;

/// Page addressing mode argument for [`SET_ADDRESSING_MODE`]
pub const PAGE_ADDRESSING: u8 = 0x02;

/// Page start address command base (0xB0)
///
/// OR the page number (0-7) into the low three bits.
pub const SET_PAGE_START: u8 = 0xB0;

/// Column start address, lower nibble, command base (0x00)
///
/// OR the low four bits of the column into the low nibble.
pub const SET_COLUMN_LOW: u8 = 0x00;

/// Column start address, higher nibble, command base (0x10)
///
/// OR the high three bits of the column into the low nibble.
pub const SET_COLUMN_HIGH: u8 = 0x10;

// Hardware configuration commands

/// Set display start line command base (0x40), line 0
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap command, column 127 mapped to SEG0 (0xA1)
pub const SEGMENT_REMAP: u8 = 0xA1;

/// Set multiplex ratio command (0xA8)
///
/// Requires 1 argument byte: ratio minus one (0x3F for 64 rows).
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// COM output scan direction command, remapped (0xC8)
pub const COM_SCAN_REMAP: u8 = 0xC8;

/// Set display offset command (0xD3)
///
/// Requires 1 argument byte: vertical shift (0 for no offset).
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration command (0xDA)
///
/// Requires 1 argument byte (0x12 for the 128x64 alternative layout).
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving commands

/// Set display clock divide ratio / oscillator frequency command (0xD5)
///
/// Requires 1 argument byte (0x80 is the datasheet reset value).
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period command (0xD9)
///
/// Requires 1 argument byte (0xF1 with the charge pump enabled).
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level command (0xDB)
///
/// Requires 1 argument byte (0x40, ~0.77 x VCC).
pub const SET_VCOMH_LEVEL: u8 = 0xDB;

/// Charge pump setting command (0x8D)
///
/// Requires 1 argument byte: [`CHARGE_PUMP_ON`] to enable. Must be issued
/// before [`DISPLAY_ON`].
pub const CHARGE_PUMP: u8 = 0x8D;

/// Charge pump enable argument for [`CHARGE_PUMP`]
pub const CHARGE_PUMP_ON: u8 = 0x14;

/// Power-on initialization sequence for a 128x64 panel in page addressing
/// mode, as (command, optional argument) pairs in issue order.
///
/// The order is mandated by the controller: the charge pump is enabled
/// before [`DISPLAY_ON`], and the addressing mode is fixed before any
/// position-set command. Contrast is listed with the reset value; the
/// driver substitutes the configured value when it replays the table.
pub const INIT_SEQUENCE: &[(u8, Option<u8>)] = &[
    (DISPLAY_OFF, None),
    (SET_CLOCK_DIVIDE, Some(0x80)),
    (SET_MULTIPLEX_RATIO, Some(0x3F)),
    (SET_DISPLAY_OFFSET, Some(0x00)),
    (SET_START_LINE, None),
    (CHARGE_PUMP, Some(CHARGE_PUMP_ON)),
    (SET_ADDRESSING_MODE, Some(PAGE_ADDRESSING)),
    (SEGMENT_REMAP, None),
    (COM_SCAN_REMAP, None),
    (SET_COM_PINS, Some(0x12)),
    (SET_CONTRAST, Some(0x7F)),
    (SET_PRECHARGE, Some(0xF1)),
    (SET_VCOMH_LEVEL, Some(0x40)),
    (NORMAL_DISPLAY, None),
    (DISPLAY_ON, None),
];
