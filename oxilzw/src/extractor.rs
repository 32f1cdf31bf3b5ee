//! Code extraction: raw bytes to the ordered code stream.
//!
//! Every whole group of three bytes yields two 12-bit codes
//! (`b0 << 4 | b1 >> 4`, then `(b1 & 0x0F) << 8 | b2`). The tail of the buffer
//! is handled as follows:
//!
//! | `len`            | tail handling                                          |
//! |------------------|--------------------------------------------------------|
//! | 0                | no codes                                               |
//! | 1                | [`LzwError::TruncatedStream`]                          |
//! | 2                | one 16-bit code `b0 << 8 \| b1`                        |
//! | `len % 3 == 1`   | last two bytes replace the final triple's second code  |
//! | `len % 3 == 2`   | the trailing pair yields one 12-bit code (4 pad bits)  |

use crate::Code;
use crate::bitstream_msb::MsbBitReader;
use crate::error::{LzwError, Result};
use log::{debug, trace, warn};
use std::path::Path;

/// Extract the code stream from a packed byte buffer.
///
/// # Example
///
/// ```rust
/// use oxilzw::extract_codes;
///
/// let codes = extract_codes(&[0x04, 0x10, 0x42]).unwrap();
/// assert_eq!(codes, vec![65, 66]);
/// ```
pub fn extract_codes(data: &[u8]) -> Result<Vec<Code>> {
    let len = data.len();
    match len {
        0 => return Ok(Vec::new()),
        1 => return Err(LzwError::TruncatedStream { len }),
        2 => {
            // Not a 12-bit layout; kept for compatibility with existing files.
            let code = u16::from_be_bytes([data[0], data[1]]);
            warn!("2-byte input decoded as a single 16-bit code {code}");
            return Ok(vec![code]);
        }
        _ => {}
    }

    let whole = len - len % 3;
    let mut codes = Vec::with_capacity(whole / 3 * 2 + 1);

    let mut reader = MsbBitReader::new(&data[..whole]);
    while let Some(code) = reader.read_code() {
        codes.push(code);
    }
    trace!("{} bits read from {} whole groups", reader.bits_read(), whole / 3);

    match len % 3 {
        1 => {
            // The final triple's second code collapses with the leftover byte.
            codes.pop();
            codes.push(u16::from_be_bytes([data[len - 2], data[len - 1]]));
        }
        2 => {
            let tail = &data[whole..];
            codes.push((u16::from(tail[0]) << 4) | (u16::from(tail[1]) >> 4));
        }
        _ => {}
    }

    debug!("extracted {} codes from {} bytes", codes.len(), len);
    Ok(codes)
}

/// Read a compressed file and extract its code stream.
///
/// Fails with [`LzwError::SourceUnavailable`] if the file cannot be read.
pub fn read_codes(path: impl AsRef<Path>) -> Result<Vec<Code>> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| LzwError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    extract_codes(&data)
}
