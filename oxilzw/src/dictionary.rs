//! LZW dictionary (code table) management.

use crate::Code;
use crate::config::LzwConfig;
use crate::error::Result;
use log::debug;

/// Number of single-byte entries every dictionary starts with.
pub const INITIAL_ENTRIES: usize = 256;

/// Adaptive code table for decoding.
///
/// Keys are always the dense range `0..len()`, so the table is a plain
/// vector indexed by code. Codes `0..256` map to their own byte value and are
/// never modified; a reset truncates back to them.
#[derive(Debug, Clone)]
pub struct LzwDictionary {
    /// Code table: code -> byte sequence.
    table: Vec<Vec<u8>>,
    /// Size at which the next insertion resets the table.
    max_entries: usize,
}

impl LzwDictionary {
    /// Create a new dictionary holding the 256 single-byte entries.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        let max_entries = config.max_entries() as usize;

        let mut table = Vec::with_capacity(max_entries);
        table.extend((0..=u8::MAX).map(|byte| vec![byte]));

        Ok(Self { table, max_entries })
    }

    /// Restore the initial 256-entry identity mapping.
    pub fn reset(&mut self) {
        self.table.truncate(INITIAL_ENTRIES);
    }

    /// Append an entry at the next free code and return that code.
    ///
    /// A full table is reset first, so the entry lands at code 256.
    pub fn insert(&mut self, entry: Vec<u8>) -> Code {
        if self.is_full() {
            debug!("dictionary reached {} entries, resetting", self.table.len());
            self.reset();
        }

        let code = self.table.len() as Code;
        self.table.push(entry);
        code
    }

    /// Get the byte sequence for a code.
    pub fn get(&self, code: Code) -> Option<&[u8]> {
        self.table.get(usize::from(code)).map(Vec::as_slice)
    }

    /// Check whether a code currently has an entry.
    pub fn contains(&self, code: Code) -> bool {
        usize::from(code) < self.table.len()
    }

    /// Number of entries, which is also the next code to be assigned.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always `false`: the single-byte entries cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Check if the next insertion will reset the table.
    pub fn is_full(&self) -> bool {
        self.table.len() >= self.max_entries
    }

    /// Configured maximum size.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}
