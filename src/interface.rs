//! Hardware interface abstraction
//!
//! This module provides the [`BusInterface`] trait and the [`TwoWireInterface`]
//! struct for raw transaction signaling on the I2C bus the SSD1306 hangs off.
//!
//! ## Hardware Requirements
//!
//! The driver needs a two-wire bus peripheral that is already clocked,
//! configured, and idle. Platform startup code owns that setup; this crate
//! only polls and pokes the peripheral through the [`BusPeripheral`] trait:
//! - assert start/stop conditions
//! - write one byte to the data register
//! - observe start-condition-sent, address-acknowledged, and
//!   transmit-buffer-empty conditions
//! - clear the address-match condition after an address acknowledgment
//!
//! ## Blocking model
//!
//! Every transfer step is a busy-wait on a peripheral status condition,
//! executed on the single thread of control. Waits are bounded by a poll
//! budget so a dead bus surfaces as [`InterfaceError::Timeout`] instead of
//! hanging forever; setting the budget to 0 restores the unbounded wait of
//! bare-metal use, where no recovery path exists anyway.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_text::{BusInterface, BusPeripheral, TwoWireInterface};
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
//! let mut interface = TwoWireInterface::new(MockBus);
//!
//! // One complete command transaction
//! let _ = interface.start();
//! let _ = interface.send_address(0x3C);
//! let _ = interface.send_byte(0x00);
//! let _ = interface.send_byte(0xAE);
//! let _ = interface.stop();
//! ```

use core::fmt::Debug;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Raw two-wire bus peripheral as the platform layer exposes it
///
/// Models the register-level conditions the driver polls. Implementations
/// wrap the platform's I2C peripheral registers; they are expected to be
/// infallible at this level (a fault shows up as a condition that never
/// asserts, not as an error return).
pub trait BusPeripheral {
    /// Request a start condition on the bus
    fn assert_start(&mut self);

    /// Request a stop condition on the bus
    ///
    /// The bus releases asynchronously; no completion condition exists.
    fn assert_stop(&mut self);

    /// Write one byte to the peripheral's data register
    fn write_data(&mut self, byte: u8);

    /// Whether the start condition has been established
    fn start_condition_sent(&mut self) -> bool;

    /// Whether the addressed device acknowledged its address
    fn address_acknowledged(&mut self) -> bool;

    /// Clear the address-match condition
    ///
    /// On peripherals of this family the condition latches after an address
    /// acknowledgment and stalls all further transfers until a status read
    /// clears it. Must be called once per address phase.
    fn clear_address_match(&mut self);

    /// Whether the transmit buffer can accept another byte
    ///
    /// True means the byte was accepted for transmission, not that it has
    /// been fully clocked out.
    fn transmit_buffer_empty(&mut self) -> bool;
}

/// Trait for the transaction-level bus seam
///
/// This trait abstracts the start/address/byte/stop signaling the
/// [`Display`](crate::display::Display) is generic over, allowing the
/// rendering layers to be tested against a recording mock with no
/// peripheral behind it.
pub trait BusInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Assert a start condition and wait for it to be established
    ///
    /// # Errors
    ///
    /// Returns an error if the condition does not assert within the
    /// implementation's wait budget.
    fn start(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Transmit the 7-bit device address in write mode
    ///
    /// The implementation must:
    /// 1. Encode the address into the 8-bit address byte (shifted left,
    ///    write bit clear)
    /// 2. Wait for the address acknowledgment
    /// 3. Clear the address-match condition
    ///
    /// # Errors
    ///
    /// Returns an error if the device never acknowledges.
    fn send_address(&mut self, address: u8) -> InterfaceResult<(), Self::Error>;

    /// Transmit one byte and wait for the transmit buffer to drain
    ///
    /// # Errors
    ///
    /// Returns an error if the transmit buffer never empties.
    fn send_byte(&mut self, byte: u8) -> InterfaceResult<(), Self::Error>;

    /// Assert a stop condition (fire-and-forget)
    ///
    /// # Errors
    ///
    /// Infallible for the provided implementation; the signature allows
    /// fallible custom interfaces.
    fn stop(&mut self) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceError {
    /// A bus status condition did not assert within the poll budget
    ///
    /// Covers both a stalled peripheral and a device that never
    /// acknowledges; the two are indistinguishable at this layer.
    Timeout,
}

impl core::fmt::Display for InterfaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Timeout => write!(f, "Timeout waiting for bus condition"),
        }
    }
}

impl core::error::Error for InterfaceError {}

/// Default poll budget for status-condition waits
///
/// Large enough to outlast any legitimate bus stretch at 100 kHz; small
/// enough to return in well under a second on typical targets.
pub const DEFAULT_POLL_ATTEMPTS: u32 = 100_000;

/// Transaction-level implementation of [`BusInterface`] over a raw
/// [`BusPeripheral`]
///
/// ## Type Parameters
///
/// * `B` - Bus peripheral implementing [`BusPeripheral`]
pub struct TwoWireInterface<B> {
    /// Raw bus peripheral
    bus: B,
    /// Poll budget per status wait (0 = unbounded)
    poll_attempts: u32,
}

impl<B> TwoWireInterface<B>
where
    B: BusPeripheral,
{
    /// Create a new interface over an already-configured, idle peripheral
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            poll_attempts: DEFAULT_POLL_ATTEMPTS,
        }
    }

    /// Set the poll budget per status wait
    ///
    /// Default is [`DEFAULT_POLL_ATTEMPTS`]. Set to 0 to disable the bound
    /// and block indefinitely, matching the raw hardware behavior.
    pub fn set_poll_attempts(&mut self, attempts: u32) -> &mut Self {
        self.poll_attempts = attempts;
        self
    }

    /// Get the current poll budget
    pub fn poll_attempts(&self) -> u32 {
        self.poll_attempts
    }

    /// Release the underlying bus peripheral
    pub fn release(self) -> B {
        self.bus
    }

    /// Spin until `ready` reports true or the poll budget runs out
    fn wait_until(
        &mut self,
        mut ready: impl FnMut(&mut B) -> bool,
    ) -> InterfaceResult<(), InterfaceError> {
        let mut attempts = 0u32;
        loop {
            if ready(&mut self.bus) {
                return Ok(());
            }
            attempts = attempts.saturating_add(1);
            if self.poll_attempts > 0 && attempts >= self.poll_attempts {
                return Err(InterfaceError::Timeout);
            }
        }
    }
}

impl<B> BusInterface for TwoWireInterface<B>
where
    B: BusPeripheral,
{
    type Error = InterfaceError;

    fn start(&mut self) -> InterfaceResult<(), Self::Error> {
        self.bus.assert_start();
        self.wait_until(|bus| bus.start_condition_sent())
    }

    fn send_address(&mut self, address: u8) -> InterfaceResult<(), Self::Error> {
        // Write mode: address in the high 7 bits, direction bit clear.
        self.bus.write_data(address << 1);
        self.wait_until(|bus| bus.address_acknowledged())?;
        self.bus.clear_address_match();
        Ok(())
    }

    fn send_byte(&mut self, byte: u8) -> InterfaceResult<(), Self::Error> {
        self.bus.write_data(byte);
        self.wait_until(|bus| bus.transmit_buffer_empty())
    }

    fn stop(&mut self) -> InterfaceResult<(), Self::Error> {
        self.bus.assert_stop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Scripted peripheral: each condition reports true after a set number
    /// of polls, and every register access is recorded.
    #[derive(Debug, Default)]
    struct MockBus {
        start_ready_after: u32,
        ack_after: u32,
        txe_after: u32,
        start_polls: u32,
        ack_polls: u32,
        txe_polls: u32,
        starts: u32,
        stops: u32,
        address_clears: u32,
        written: Vec<u8>,
    }

    impl BusPeripheral for MockBus {
        fn assert_start(&mut self) {
            self.starts += 1;
        }

        fn assert_stop(&mut self) {
            self.stops += 1;
        }

        fn write_data(&mut self, byte: u8) {
            self.written.push(byte);
        }

        fn start_condition_sent(&mut self) -> bool {
            self.start_polls += 1;
            self.start_polls > self.start_ready_after
        }

        fn address_acknowledged(&mut self) -> bool {
            self.ack_polls += 1;
            self.ack_polls > self.ack_after
        }

        fn clear_address_match(&mut self) {
            self.address_clears += 1;
        }

        fn transmit_buffer_empty(&mut self) -> bool {
            self.txe_polls += 1;
            self.txe_polls > self.txe_after
        }
    }

    #[test]
    fn test_default_poll_attempts() {
        assert_eq!(DEFAULT_POLL_ATTEMPTS, 100_000);
    }

    #[test]
    fn test_set_poll_attempts() {
        let mut interface = TwoWireInterface::new(MockBus::default());
        assert_eq!(interface.poll_attempts(), DEFAULT_POLL_ATTEMPTS);

        interface.set_poll_attempts(5_000);
        assert_eq!(interface.poll_attempts(), 5_000);

        interface.set_poll_attempts(0);
        assert_eq!(interface.poll_attempts(), 0);
    }

    #[test]
    fn test_start_waits_for_condition() {
        let mut interface = TwoWireInterface::new(MockBus {
            start_ready_after: 3,
            ..MockBus::default()
        });
        assert_eq!(interface.start(), Ok(()));
        let bus = interface.release();
        assert_eq!(bus.starts, 1);
        assert_eq!(bus.start_polls, 4);
    }

    #[test]
    fn test_send_address_encodes_write_byte_and_clears_match() {
        let mut interface = TwoWireInterface::new(MockBus::default());
        assert_eq!(interface.send_address(0x3C), Ok(()));
        let bus = interface.release();
        assert_eq!(bus.written, [0x78]);
        assert_eq!(bus.address_clears, 1);
    }

    #[test]
    fn test_send_byte_writes_data_register() {
        let mut interface = TwoWireInterface::new(MockBus::default());
        assert_eq!(interface.send_byte(0xA5), Ok(()));
        assert_eq!(interface.release().written, [0xA5]);
    }

    #[test]
    fn test_stop_is_fire_and_forget() {
        let mut interface = TwoWireInterface::new(MockBus::default());
        assert_eq!(interface.stop(), Ok(()));
        let bus = interface.release();
        assert_eq!(bus.stops, 1);
        // No condition polled on the way out.
        assert_eq!(bus.start_polls + bus.ack_polls + bus.txe_polls, 0);
    }

    #[test]
    fn test_stuck_start_condition_times_out() {
        let mut interface = TwoWireInterface::new(MockBus {
            start_ready_after: u32::MAX,
            ..MockBus::default()
        });
        interface.set_poll_attempts(10);
        assert_eq!(interface.start(), Err(InterfaceError::Timeout));
    }

    #[test]
    fn test_missing_acknowledgment_times_out_without_clearing_match() {
        let mut interface = TwoWireInterface::new(MockBus {
            ack_after: u32::MAX,
            ..MockBus::default()
        });
        interface.set_poll_attempts(10);
        assert_eq!(interface.send_address(0x3C), Err(InterfaceError::Timeout));
        assert_eq!(interface.release().address_clears, 0);
    }

    #[test]
    fn test_full_command_transaction_register_order() {
        let mut interface = TwoWireInterface::new(MockBus::default());
        assert_eq!(interface.start(), Ok(()));
        assert_eq!(interface.send_address(0x3C), Ok(()));
        assert_eq!(interface.send_byte(0x00), Ok(()));
        assert_eq!(interface.send_byte(0xAE), Ok(()));
        assert_eq!(interface.stop(), Ok(()));
        let bus = interface.release();
        assert_eq!(bus.starts, 1);
        assert_eq!(bus.written, [0x78, 0x00, 0xAE]);
        assert_eq!(bus.stops, 1);
    }
}
