//! MSB-first bit stream reading for packed 12-bit codes.
//!
//! Codes are packed big-endian across byte boundaries: three bytes carry two
//! codes, the first code in the high 12 bits.

/// Width of a packed code in bits.
pub const CODE_BITS: u8 = 12;

/// MSB-first bit reader over a byte slice.
#[derive(Debug)]
pub(crate) struct MsbBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Current byte position.
    byte_pos: usize,
    /// Bit buffer (MSB-first).
    buffer: u32,
    /// Number of valid bits in buffer (from LSB side).
    bits_in_buffer: u8,
    /// Total bits read.
    total_bits_read: u64,
}

impl<'a> MsbBitReader<'a> {
    /// Create a new MSB bit reader.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Pull whole bytes until at least `count` bits are buffered.
    ///
    /// Returns `false` if the input runs out first.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> bool {
        while self.bits_in_buffer < count && self.byte_pos < self.data.len() {
            let byte = self.data[self.byte_pos];
            self.byte_pos += 1;

            self.buffer = (self.buffer << 8) | u32::from(byte);
            self.bits_in_buffer += 8;
        }

        self.bits_in_buffer >= count
    }

    /// Read `count` bits (1..=16), or `None` once the input is exhausted.
    pub fn read_bits(&mut self, count: u8) -> Option<u16> {
        debug_assert!((1..=16).contains(&count));

        if !self.fill_buffer(count) {
            return None;
        }

        let shift = self.bits_in_buffer - count;
        let mask = (1u32 << count) - 1;
        let value = (self.buffer >> shift) & mask;

        self.bits_in_buffer -= count;
        self.total_bits_read += u64::from(count);

        Some(value as u16)
    }

    /// Read one 12-bit code.
    #[inline]
    pub fn read_code(&mut self) -> Option<u16> {
        self.read_bits(CODE_BITS)
    }

    /// Get total bits read.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }
}
