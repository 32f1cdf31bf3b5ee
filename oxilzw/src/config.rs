//! Dictionary-size configuration.

use crate::error::{LzwError, Result};

/// Smallest supported dictionary (8-bit exponent).
pub const MIN_DICT_ENTRIES: u64 = 256;

/// Largest supported dictionary (12-bit exponent).
pub const MAX_DICT_ENTRIES: u64 = 4096;

/// LZW configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Dictionary-size exponent: the dictionary holds at most `2^dict_bits`
    /// entries before it is reset.
    pub dict_bits: u8,
}

impl LzwConfig {
    /// Standard configuration: 12-bit codes, 4096-entry dictionary.
    pub const DEFAULT: Self = Self { dict_bits: 12 };

    /// Create a configuration with the given dictionary-size exponent.
    ///
    /// The value is not checked here; see [`LzwConfig::validate`].
    pub fn new(dict_bits: u8) -> Self {
        Self { dict_bits }
    }

    /// Maximum number of dictionary entries (`2^dict_bits`).
    ///
    /// Saturates at `u64::MAX` for exponents that do not fit.
    pub fn max_entries(&self) -> u64 {
        1u64.checked_shl(u32::from(self.dict_bits)).unwrap_or(u64::MAX)
    }

    /// Check that the dictionary size lies in `256..=4096`.
    pub fn validate(&self) -> Result<()> {
        let size = self.max_entries();
        if !(MIN_DICT_ENTRIES..=MAX_DICT_ENTRIES).contains(&size) {
            return Err(LzwError::ConfigurationError { size });
        }
        Ok(())
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
