//! Reference encoder for producing packed test streams.
//!
//! The encoder keeps a copy of the decoder's table and replays the decoder's
//! growth and reset rules after every emitted code, so whatever it emits is
//! decodable by construction.

#![allow(dead_code)]

use oxilzw::{Code, LzwConfig};
use std::collections::HashMap;

/// Encoder whose table tracks `LzwDecoder`'s table step for step.
pub struct MirrorEncoder {
    /// Code table, identical to the decoder's after each step.
    table: Vec<Vec<u8>>,
    /// Reverse lookup: byte sequence -> code.
    reverse: HashMap<Vec<u8>, Code>,
    /// Size at which the next insertion resets the table.
    max_entries: usize,
}

impl MirrorEncoder {
    pub fn new(config: LzwConfig) -> Self {
        let mut encoder = Self {
            table: Vec::new(),
            reverse: HashMap::new(),
            max_entries: config.max_entries() as usize,
        };
        encoder.reset();
        encoder
    }

    fn reset(&mut self) {
        self.table.clear();
        self.reverse.clear();
        for byte in 0..=u8::MAX {
            self.table.push(vec![byte]);
            self.reverse.insert(vec![byte], Code::from(byte));
        }
    }

    /// Longest table entry that prefixes `rest`, reached by extending one
    /// byte at a time.
    fn longest_match(&self, rest: &[u8]) -> (Code, usize) {
        let mut len = 1;
        let mut code = self.reverse[&rest[..1]];
        while len < rest.len() {
            match self.reverse.get(&rest[..=len]) {
                Some(&longer) => {
                    code = longer;
                    len += 1;
                }
                None => break,
            }
        }
        (code, len)
    }

    /// Encode `input` into a code stream.
    pub fn encode(&mut self, input: &[u8]) -> Vec<Code> {
        self.reset();

        let Some(&first) = input.first() else {
            return Vec::new();
        };
        let mut codes = vec![Code::from(first)];
        let mut prev = Code::from(first);
        let mut pos = 1;

        while pos < input.len() {
            let rest = &input[pos..];
            let full = self.table.len() >= self.max_entries;
            let prev_entry = self.table[usize::from(prev)].clone();

            // On a resetting step only single-byte codes survive the reset,
            // so the next step can still look up its previous code.
            let (code, len, self_reference) = if full {
                (Code::from(rest[0]), 1, false)
            } else {
                let (code, len) = self.longest_match(rest);
                let mut candidate = prev_entry.clone();
                candidate.push(prev_entry[0]);
                if candidate.len() > len && rest.starts_with(&candidate) {
                    (self.table.len() as Code, candidate.len(), true)
                } else {
                    (code, len, false)
                }
            };

            let first_byte = if self_reference {
                prev_entry[0]
            } else {
                self.table[usize::from(code)][0]
            };
            let mut new_entry = prev_entry;
            new_entry.push(first_byte);

            if full {
                self.reset();
            }
            let key = self.table.len() as Code;
            self.reverse.insert(new_entry.clone(), key);
            self.table.push(new_entry);

            prev = if self_reference { key } else { code };
            codes.push(code);
            pos += len;
        }

        codes
    }
}

/// Pack codes two per three bytes; an odd final code takes two bytes with
/// four zero padding bits. A lone code is written as a 16-bit value.
pub fn pack_codes(codes: &[Code]) -> Vec<u8> {
    if let [code] = codes {
        return code.to_be_bytes().to_vec();
    }

    let mut out = Vec::with_capacity(codes.len() * 3 / 2 + 2);
    let mut pairs = codes.chunks_exact(2);
    for pair in &mut pairs {
        let (a, b) = (pair[0], pair[1]);
        out.push((a >> 4) as u8);
        out.push((((a & 0x0F) << 4) | (b >> 8)) as u8);
        out.push(b as u8);
    }
    if let &[a] = pairs.remainder() {
        out.push((a >> 4) as u8);
        out.push(((a & 0x0F) << 4) as u8);
    }
    out
}

/// Encode and pack `input`.
pub fn compress(input: &[u8], config: LzwConfig) -> Vec<u8> {
    let codes = MirrorEncoder::new(config).encode(input);
    pack_codes(&codes)
}

/// Uniform data - all bytes are the same.
pub fn uniform(size: usize) -> Vec<u8> {
    vec![0xAA; size]
}

/// Pseudo-random data from a fixed-seed LCG.
pub fn random(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

/// Text-like data.
pub fn text_like(size: usize) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. \
                 Pack my box with five dozen liquor jugs. \
                 How vexingly quick daft zebras jump! ";
    text.iter().copied().cycle().take(size).collect()
}

/// Diagonal modulo pattern, `width * height` bytes.
pub fn modulo_pattern(width: u64, height: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) % 256) as u8);
        }
    }
    data
}

/// Diagonal gradient pattern, `width * height` bytes.
pub fn gradient_pattern(width: u64, height: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) / 4) as u8);
        }
    }
    data
}
