/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use tracing::warn;

/// Accumulates boolean samples into bytes, most significant bit first.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitPacker {
    acc: u8,
    fill: u8,
}

impl BitPacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the completed byte once the eighth sample lands.
    pub fn push(&mut self, on: bool) -> Option<u8> {
        if on {
            self.acc |= 0x80 >> self.fill;
        }
        self.fill += 1;

        if self.fill < 8 {
            return None;
        }

        let byte = self.acc;
        self.acc = 0;
        self.fill = 0;
        Some(byte)
    }

    /// Discards a partially filled byte and returns how many samples it held.
    ///
    /// A sample stream that is not a multiple of 8 long never flushes its
    /// tail; the target runtimes only read whole bytes.
    pub fn truncate_trailing_bits(self) -> u8 {
        self.fill
    }
}

pub fn pack_bits<I: IntoIterator<Item = bool>>(samples: I) -> Vec<u8> {
    pack_bits_with_capacity(samples, 0)
}

/// Like [`pack_bits`], reserving room for `expected` samples up front.
pub fn pack_bits_with_capacity<I>(samples: I, expected: usize) -> Vec<u8>
where
    I: IntoIterator<Item = bool>,
{
    let samples = samples.into_iter();
    let mut out = Vec::with_capacity(expected.max(samples.size_hint().0) / 8);
    let mut packer = BitPacker::new();

    for on in samples {
        if let Some(byte) = packer.push(on) {
            out.push(byte);
        }
    }

    let dropped = packer.truncate_trailing_bits();
    if dropped != 0 {
        warn!(dropped, "sample count is not a multiple of 8, trailing bits dropped");
    }

    out
}

/// Packs 4-bit values two per byte, the first of each pair in the low nibble.
pub fn pack_nibbles(values: &[u8]) -> Vec<u8> {
    let pairs = values.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        warn!("odd number of nibbles, trailing value dropped");
    }

    pairs
        .map(|pair| (pair[0] & 0x0F) | ((pair[1] & 0x0F) << 4))
        .collect()
}
