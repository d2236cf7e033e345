//! Two 4-bit samples in one block.
//!
//! Layout, low to high: `s0` in bits 0..4, `s1` in bits 4..8.

use crate::codec::{GroupCodec, MAX_4B};

/// Packs two 4-bit samples into a single block.
///
/// Both samples are truncated to their low nibble: `s0` by masking, `s1`
/// because the shift pushes its high bits out of the byte. Truncation is
/// local to each sample, so out-of-range input never bleeds into the other.
///
/// ```rust
/// use bit_packers::pack_2x4b;
///
/// assert_eq!(pack_2x4b([0b0111, 0b1110]), 0b1110_0111);
/// ```
#[inline]
pub const fn pack_2x4b(vs: [u8; 2]) -> u8 {
    (vs[1] << 4) | (vs[0] & 0x0F)
}

#[inline]
pub const fn unpack_2x4b(block: u8) -> [u8; 2] {
    [block & 0x0F, block >> 4]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pair;

impl GroupCodec for Pair {
    const SAMPLE_BITS: u32 = 4;
    const SAMPLES: usize = 2;
    const BLOCKS: usize = 1;
    const MAX_SAMPLE: u8 = MAX_4B;

    type Group = [u8; 2];
    type Packed = u8;

    #[inline]
    fn pack(group: [u8; 2]) -> u8 {
        pack_2x4b(group)
    }

    #[inline]
    fn unpack(packed: u8) -> [u8; 2] {
        unpack_2x4b(packed)
    }
}
