//! SSD1306 OLED Text Driver
//!
//! A page-addressed ASCII text driver for the SSD1306 display controller on
//! 128x64 monochrome panels, driven over a two-wire (I2C) bus.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support (delay only; the bus is driven at the
//!   register level through a platform trait)
//! - Framebuffer-less: glyphs stream straight to display RAM
//! - Persistent text cursor with newline handling and automatic line wrap
//! - Built-in 5x7 ASCII font, swappable via the [`GlyphTable`] trait
//! - Bounded status-flag waits surfacing as [`InterfaceError::Timeout`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use ssd1306_text::{Builder, BusPeripheral, Display, TwoWireInterface};
//!
//! # struct MockBus;
//! # impl BusPeripheral for MockBus {
//! #     fn assert_start(&mut self) {}
//! #     fn assert_stop(&mut self) {}
//! #     fn write_data(&mut self, _byte: u8) {}
//! #     fn start_condition_sent(&mut self) -> bool { true }
//! #     fn address_acknowledged(&mut self) -> bool { true }
//! #     fn clear_address_match(&mut self) {}
//! #     fn transmit_buffer_empty(&mut self) -> bool { true }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let bus = MockBus;
//! # let mut delay = MockDelay;
//! // `bus` wraps an I2C peripheral that platform startup code has already
//! // clocked, configured, and left idle.
//! let interface = TwoWireInterface::new(bus);
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init(&mut delay);
//! let _ = display.clear();
//! let _ = display.set_position(0, 0);
//! let _ = display.write_str("HELLO\nWORLD");
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations and text rendering
pub mod display;
/// Error types for the driver
pub mod error;
/// Glyph lookup and the built-in 5x7 font
pub mod font;
/// Hardware interface abstraction
pub mod interface;

pub use config::{Builder, Config, DEFAULT_CONTRAST};
pub use display::{CELL_WIDTH, COLUMNS, Display, PAGES};
pub use error::{BuilderError, Error};
pub use font::{Font5x7, GLYPH_WIDTH, GlyphTable};
pub use interface::{
    BusInterface, BusPeripheral, DEFAULT_POLL_ATTEMPTS, InterfaceError, TwoWireInterface,
};
