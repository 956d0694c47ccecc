//! Display configuration types and builder

use crate::command::DEFAULT_ADDRESS;
pub use crate::error::BuilderError;

/// Default contrast value (controller reset value)
pub const DEFAULT_CONTRAST: u8 = 0x7F;

/// Display configuration
///
/// Holds the configurable parameters for the SSD1306 controller. The panel
/// geometry (128x64, 8 pages) and the init sequence are fixed; only the
/// device address and contrast vary between boards. Use [`Builder`] to
/// create a Config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// 7-bit I2C device address
    pub address: u8,
    /// Contrast value sent during initialization
    pub contrast: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            contrast: DEFAULT_CONTRAST,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1306_text::Builder;
///
/// let config = match Builder::new().contrast(0xCF).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.address, 0x3C);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    /// 7-bit I2C device address
    address: Option<u8>,
    /// Contrast value sent during initialization
    contrast: Option<u8>,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 7-bit device address
    ///
    /// Default is 0x3C (SA0 low); boards strapping SA0 high use 0x3D.
    pub fn address(mut self, address: u8) -> Self {
        self.address = Some(address);
        self
    }

    /// Set the contrast value sent during initialization
    pub fn contrast(mut self, contrast: u8) -> Self {
        self.contrast = Some(contrast);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidAddress` if the address does not fit
    /// in 7 bits.
    pub fn build(self) -> Result<Config, BuilderError> {
        let address = self.address.unwrap_or(DEFAULT_ADDRESS);
        if address > 0x7F {
            return Err(BuilderError::InvalidAddress { address });
        }
        Ok(Config {
            address,
            contrast: self.contrast.unwrap_or(DEFAULT_CONTRAST),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.address, 0x3C);
        assert_eq!(config.contrast, 0x7F);
    }

    #[test]
    fn test_builder_defaults_match_config_default() {
        let built = Builder::new().build();
        assert_eq!(built.ok(), Some(Config::default()));
    }

    #[test]
    fn test_builder_overrides() {
        let config = Builder::new().address(0x3D).contrast(0xCF).build();
        assert_eq!(
            config.ok(),
            Some(Config {
                address: 0x3D,
                contrast: 0xCF
            })
        );
    }

    #[test]
    fn test_builder_rejects_wide_address() {
        let result = Builder::new().address(0x80).build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidAddress { address: 0x80 })
        ));
    }
}
