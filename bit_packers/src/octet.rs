//! Eight 7-bit samples in seven blocks.
//!
//! `s1..=s7` occupy the low seven bits of blocks 0..7. The top bit of block
//! `i` holds bit `6 - i` of `s0`, so reading the top bits of blocks 0..7 in
//! order spells `s0` from its most significant bit down.

use crate::codec::{GroupCodec, MAX_7B};

/// Packs eight 7-bit samples into seven blocks.
///
/// Only `s0` is masked. `s1..=s7` must already be `<= 127`; bit 7 of any of
/// them is OR-ed into the bit reserved for `s0`.
///
/// ```rust
/// use bit_packers::pack_8x7b;
///
/// let packed = pack_8x7b([0b0010010, 1, 2, 3, 4, 5, 6, 7]);
/// assert_eq!(packed, [1, 2, 0x80 | 3, 4, 5, 0x80 | 6, 7]);
/// ```
#[inline]
pub const fn pack_8x7b(vs: [u8; 8]) -> [u8; 7] {
    let mut out = [0u8; 7];
    let mut i = 0;
    while i < 7 {
        out[i] = vs[i + 1] | ((vs[0] << (i as u32 + 1)) & 0x80);
        i += 1;
    }
    out
}

/// Unpacks seven blocks into eight 7-bit samples. Every output is `<= 127`.
#[inline]
pub const fn unpack_8x7b(vs: [u8; 7]) -> [u8; 8] {
    let mut out = [0u8; 8];
    let mut i = 0;
    while i < 7 {
        out[0] |= (vs[i] & 0x80) >> (i as u32 + 1);
        out[i + 1] = vs[i] & 0x7F;
        i += 1;
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Octet;

impl GroupCodec for Octet {
    const SAMPLE_BITS: u32 = 7;
    const SAMPLES: usize = 8;
    const BLOCKS: usize = 7;
    const MAX_SAMPLE: u8 = MAX_7B;

    type Group = [u8; 8];
    type Packed = [u8; 7];

    #[inline]
    fn pack(group: [u8; 8]) -> [u8; 7] {
        pack_8x7b(group)
    }

    #[inline]
    fn unpack(packed: [u8; 7]) -> [u8; 8] {
        unpack_8x7b(packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNPACKED: [u8; 8] = [
        0b0001_0010,
        0b0010_0101,
        0b0011_0110,
        0b0100_1001,
        0b0101_1010,
        0b0110_1100,
        0b0111_1110,
        0b0001_1111,
    ];

    const PACKED: [u8; 7] = [
        0b0010_0101,
        0b0011_0110,
        0b1100_1001,
        0b0101_1010,
        0b0110_1100,
        0b1111_1110,
        0b0001_1111,
    ];

    #[test]
    fn known_vector() {
        assert_eq!(pack_8x7b(UNPACKED), PACKED);
        assert_eq!(unpack_8x7b(PACKED), UNPACKED);
    }

    #[test]
    fn sample0_msb_goes_to_first_block() {
        assert_eq!(pack_8x7b([0b100_0000, 0, 0, 0, 0, 0, 0, 0])[0], 0x80);
        assert_eq!(pack_8x7b([0b000_0001, 0, 0, 0, 0, 0, 0, 0])[6], 0x80);
    }

    #[test]
    fn roundtrip_sample0() {
        for s0 in 0..=MAX_7B {
            for rest in [0, 0b101_0101, MAX_7B] {
                let mut group = [rest; 8];
                group[0] = s0;
                assert_eq!(unpack_8x7b(pack_8x7b(group)), group);
            }
        }
    }

    #[test]
    fn roundtrip_each_low_sample() {
        for v in 0..=MAX_7B {
            for pos in 1..8 {
                let mut group = [0b110_0110, 0, 0, 0, 0, 0, 0, 0];
                group[pos] = v;
                assert_eq!(unpack_8x7b(pack_8x7b(group)), group);
            }
        }
    }

    #[test]
    fn high_sample0_bit_is_dropped() {
        let mut masked = UNPACKED;
        let mut raw = UNPACKED;
        raw[0] |= 0x80;
        masked[0] &= 0x7F;
        assert_eq!(pack_8x7b(raw), pack_8x7b(masked));
    }

    // s1..=s7 are not masked, so bit 7 lands in s0's slot.
    #[test]
    fn out_of_range_low_sample_overlaps_sample0() {
        let packed = pack_8x7b([0, 0x80, 0, 0, 0, 0, 0, 0]);
        assert_eq!(packed, [0x80, 0, 0, 0, 0, 0, 0]);
        assert_eq!(unpack_8x7b(packed), [0b100_0000, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn unpack_stays_in_range() {
        for b in 0..=u8::MAX {
            let mut blocks = [0u8; 7];
            for (i, slot) in blocks.iter_mut().enumerate() {
                *slot = b.wrapping_add(i as u8 * 37);
            }
            assert!(unpack_8x7b(blocks).iter().all(|&v| v <= MAX_7B));
            assert_eq!(pack_8x7b(unpack_8x7b(blocks)), blocks);
        }
    }

    #[test]
    fn usable_in_const_context() {
        const ROUNDTRIP: [u8; 8] = unpack_8x7b(pack_8x7b(UNPACKED));
        assert_eq!(ROUNDTRIP, UNPACKED);
    }
}
