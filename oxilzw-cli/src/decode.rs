//! Decode command implementation.

use log::info;
use oxilzw::{LzwConfig, LzwDecoder, LzwError, read_codes};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Summary of one decoding run.
#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dictionary_size: u64,
    pub codes: usize,
    pub self_references: usize,
    pub resets: usize,
    pub decoded_bytes: usize,
}

/// Decode `input` and write the raw decoded bytes to `output`.
///
/// The output file is only created once decoding has succeeded.
pub fn cmd_decode(
    input: &Path,
    output: &Path,
    bits: u8,
) -> Result<DecodeReport, Box<dyn std::error::Error>> {
    let config = LzwConfig::new(bits);
    let mut decoder = LzwDecoder::new(config)?;

    let codes = read_codes(input)?;
    let decoded = decoder.decode(&codes)?;
    std::fs::write(output, &decoded).map_err(LzwError::from)?;

    let stats = decoder.stats();
    info!(
        "{} -> {}: {} codes, {} bytes",
        input.display(),
        output.display(),
        stats.codes,
        decoded.len()
    );

    Ok(DecodeReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        dictionary_size: config.max_entries(),
        codes: stats.codes,
        self_references: stats.self_references,
        resets: stats.resets,
        decoded_bytes: decoded.len(),
    })
}
