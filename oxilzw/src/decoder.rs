//! LZW decoder (decompression).
//!
//! The decoder replays the encoder's dictionary growth one code behind it:
//! every code after the first adds `previous entry + first byte of current
//! entry` to the table. A code that is not yet in the table can only be the
//! entry the encoder has just created, which is `previous + previous[0]`.

use crate::Code;
use crate::config::LzwConfig;
use crate::dictionary::LzwDictionary;
use crate::error::{LzwError, Result};
use log::{debug, trace, warn};

/// Counters collected over one decoding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Codes consumed, including the seed.
    pub codes: usize,
    /// Codes resolved with the duplicate-first-byte rule.
    pub self_references: usize,
    /// Number of dictionary resets.
    pub resets: usize,
    /// Bytes produced.
    pub output_len: usize,
}

/// LZW decoder for decompression.
#[derive(Debug, Clone)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    dict: LzwDictionary,
    /// Previously decoded code; `None` until the seed code arrives.
    prev_code: Option<Code>,
    /// Run statistics.
    stats: DecodeStats,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    ///
    /// Fails with [`LzwError::ConfigurationError`] for dictionary sizes
    /// outside `256..=4096`.
    pub fn new(config: LzwConfig) -> Result<Self> {
        let dict = LzwDictionary::new(config)?;
        Ok(Self {
            dict,
            prev_code: None,
            stats: DecodeStats::default(),
        })
    }

    /// Decode a complete code stream.
    ///
    /// Each call is an independent run: the decoder is reset first. An empty
    /// stream decodes to an empty output.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oxilzw::{LzwConfig, LzwDecoder};
    ///
    /// let mut decoder = LzwDecoder::new(LzwConfig::DEFAULT).unwrap();
    /// // 'A', then the code being defined from "A": "AA".
    /// let output = decoder.decode(&[65, 256]).unwrap();
    /// assert_eq!(output, b"AAA");
    /// ```
    pub fn decode(&mut self, codes: &[Code]) -> Result<Vec<u8>> {
        self.reset();

        let mut output = Vec::with_capacity(codes.len() * 2);
        for &code in codes {
            self.decode_code(code, &mut output)?;
        }

        debug!(
            "decoded {} codes into {} bytes ({} self-references, {} resets)",
            self.stats.codes, self.stats.output_len, self.stats.self_references, self.stats.resets
        );
        Ok(output)
    }

    /// Decode a single code, appending its expansion to `output`.
    ///
    /// The first code after a reset of the decoder is the seed and must be a
    /// single-byte code.
    pub fn decode_code(&mut self, code: Code, output: &mut Vec<u8>) -> Result<()> {
        let Some(prev_code) = self.prev_code else {
            return self.decode_seed(code, output);
        };

        let next_code = self.dict.len();
        let prev_entry = self
            .dict
            .get(prev_code)
            .ok_or(LzwError::InternalInconsistency { code: prev_code })?;

        let mut new_entry = Vec::with_capacity(prev_entry.len() + 1);
        new_entry.extend_from_slice(prev_entry);

        let (written, self_reference) = match self.dict.get(code) {
            Some(entry) => {
                new_entry.push(entry[0]);
                output.extend_from_slice(entry);
                (entry.len(), false)
            }
            None => {
                if usize::from(code) != next_code {
                    warn!("code {code} is past the next free code {next_code}");
                }
                trace!("code {code} resolved from previous code {prev_code}");
                new_entry.push(new_entry[0]);
                output.extend_from_slice(&new_entry);
                self.stats.self_references += 1;
                (new_entry.len(), true)
            }
        };

        if self.dict.is_full() {
            self.stats.resets += 1;
        }
        let inserted = self.dict.insert(new_entry);

        self.prev_code = Some(if self_reference { inserted } else { code });
        self.stats.codes += 1;
        self.stats.output_len += written;
        Ok(())
    }

    fn decode_seed(&mut self, code: Code, output: &mut Vec<u8>) -> Result<()> {
        let entry = self.dict.get(code).ok_or(LzwError::UnknownSeedCode(code))?;
        output.extend_from_slice(entry);

        self.prev_code = Some(code);
        self.stats.codes += 1;
        self.stats.output_len += entry.len();
        Ok(())
    }

    /// Reset the decoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
        self.prev_code = None;
        self.stats = DecodeStats::default();
    }

    /// Statistics of the current (or last completed) run.
    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// Read-only view of the dictionary.
    pub fn dictionary(&self) -> &LzwDictionary {
        &self.dict
    }
}
