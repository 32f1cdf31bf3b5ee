//! # OxiLZW: Pure Rust 12-bit LZW Decoder
//!
//! This crate decodes LZW streams made of fixed-width 12-bit codes packed
//! MSB-first, two codes per three bytes, with an adaptive dictionary that is
//! reset to its 256 single-byte entries whenever it reaches its maximum size.
//!
//! ## Pipeline
//!
//! ```text
//! raw bytes ──▶ extract_codes ──▶ [Code] ──▶ LzwDecoder::decode ──▶ bytes
//! ```
//!
//! - **Code extraction** ([`extract_codes`]): whole 3-byte groups yield two
//!   codes each; the buffer tail follows fixed compatibility rules (see the
//!   [`extract_codes`] docs).
//! - **Adaptive decoding** ([`LzwDecoder`]): rebuilds the dictionary in step
//!   with the encoder, including the self-reference case where a code names
//!   the entry that is being defined.
//!
//! ## Example
//!
//! ```rust
//! use oxilzw::{decompress, LzwConfig};
//!
//! // Codes 65 'A', 256 "AA" packed into three bytes.
//! let packed = [0x04, 0x11, 0x00];
//! let text = decompress(&packed, LzwConfig::DEFAULT).unwrap();
//! assert_eq!(text, b"AAA");
//! ```
//!
//! ## Features
//!
//! - `parallel`: [`decompress_batch`] decodes independent inputs on the rayon
//!   thread pool.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitstream_msb;
mod config;
mod decoder;
mod dictionary;
mod error;
mod extractor;

pub use bitstream_msb::CODE_BITS;
pub use config::{LzwConfig, MAX_DICT_ENTRIES, MIN_DICT_ENTRIES};
pub use decoder::{DecodeStats, LzwDecoder};
pub use dictionary::{INITIAL_ENTRIES, LzwDictionary};
pub use error::{LzwError, Result};
pub use extractor::{extract_codes, read_codes};

use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A dictionary index as read from the packed stream.
///
/// Regular codes fit in 12 bits; the compatibility tail rules can produce
/// 16-bit values.
pub type Code = u16;

/// Decode an already extracted code stream.
///
/// # Example
///
/// ```rust
/// use oxilzw::{decompress_codes, LzwConfig};
///
/// let text = decompress_codes(&[65, 66, 67], LzwConfig::DEFAULT).unwrap();
/// assert_eq!(text, b"ABC");
/// ```
pub fn decompress_codes(codes: &[Code], config: LzwConfig) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new(config)?;
    decoder.decode(codes)
}

/// Decompress a packed byte buffer.
///
/// The configuration is validated before the buffer is touched.
///
/// # Parameters
///
/// - `data`: packed 12-bit code stream
/// - `config`: dictionary configuration
///
/// # Returns
///
/// The reconstructed byte sequence.
pub fn decompress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new(config)?;
    let codes = extract_codes(data)?;
    decoder.decode(&codes)
}

/// Decompress the file at `path`.
///
/// Fails with [`LzwError::SourceUnavailable`] if the file cannot be read.
pub fn decompress_file(path: impl AsRef<Path>, config: LzwConfig) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new(config)?;
    let codes = read_codes(path)?;
    decoder.decode(&codes)
}

/// Decompress several independent buffers in parallel.
///
/// Every input gets its own decoder; results keep the input order.
///
/// # Example
///
/// ```rust
/// use oxilzw::{decompress_batch, LzwConfig};
///
/// let inputs: [Vec<u8>; 2] = [vec![0x04, 0x10, 0x42], vec![0x04, 0x11, 0x00]];
/// let results = decompress_batch(&inputs, LzwConfig::DEFAULT);
/// assert_eq!(results[0].as_ref().unwrap(), b"AB");
/// assert_eq!(results[1].as_ref().unwrap(), b"AAA");
/// ```
#[cfg(feature = "parallel")]
pub fn decompress_batch<T>(inputs: &[T], config: LzwConfig) -> Vec<Result<Vec<u8>>>
where
    T: AsRef<[u8]> + Sync,
{
    inputs
        .par_iter()
        .map(|input| decompress(input.as_ref(), config))
        .collect()
}
