//! Error types for the driver
//!
//! This module defines error types for configuration building
//! ([`BuilderError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus
//!   signaling errors
//!
//! ## Example
//!
//! ```
//! use ssd1306_text::{Builder, BuilderError};
//!
//! // Address wider than 7 bits
//! let result = Builder::new().address(0xFF).build();
//! assert!(matches!(result, Err(BuilderError::InvalidAddress { .. })));
//! ```

use crate::interface::BusInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: BusInterface> {
    /// Bus interface error
    ///
    /// Wraps the underlying error from the [`BusInterface`] implementation,
    /// typically a timed-out status wait.
    Interface(I::Error),
    /// Cursor target outside the addressable area
    ///
    /// Pages run 0-7 and columns 0-127 on a 128x64 panel.
    InvalidPosition {
        /// Page row requested
        page: u8,
        /// Pixel column requested
        column: u8,
    },
}

impl<I: BusInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::InvalidPosition { page, column } => {
                write!(f, "Invalid position: page={page}, column={column}")
            }
        }
    }
}

impl<I: BusInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is
/// created.
#[derive(Debug)]
pub enum BuilderError {
    /// Device address does not fit in 7 bits
    InvalidAddress {
        /// Address requested
        address: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidAddress { address } => {
                write!(f, "Invalid device address {address:#04x} (must fit in 7 bits)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
