//! Four 6-bit samples in three blocks.
//!
//! `s1`, `s2` and `s3` occupy the low six bits of blocks 0, 1 and 2. The
//! remaining high two bits of each block carry `s0`, most significant pair
//! first:
//!
//! ```text
//! block 0: [s0 5:4][   s1   ]
//! block 1: [s0 3:2][   s2   ]
//! block 2: [s0 1:0][   s3   ]
//! ```

use crate::codec::{GroupCodec, MAX_6B};

/// Packs four 6-bit samples into three blocks.
///
/// Only `s0` is masked. `s1..=s3` must already be `<= 63`: a larger value
/// sets bits that belong to `s0` and the group no longer round-trips. Use
/// [`Quad::try_pack`](crate::GroupCodec::try_pack) when the input is not
/// known to be in range.
///
/// ```rust
/// use bit_packers::{pack_4x6b, unpack_4x6b};
///
/// let packed = pack_4x6b([0b100111, 0b011010, 0b111110, 0b010001]);
/// assert_eq!(packed, [0b10011010, 0b01111110, 0b11010001]);
/// assert_eq!(unpack_4x6b(packed), [0b100111, 0b011010, 0b111110, 0b010001]);
/// ```
#[inline]
pub const fn pack_4x6b(vs: [u8; 4]) -> [u8; 3] {
    [
        vs[1] | ((vs[0] << 2) & 0xC0),
        vs[2] | ((vs[0] << 4) & 0xC0),
        vs[3] | ((vs[0] << 6) & 0xC0),
    ]
}

/// Unpacks three blocks into four 6-bit samples. Every output is `<= 63`.
#[inline]
pub const fn unpack_4x6b(vs: [u8; 3]) -> [u8; 4] {
    let mut v0 = 0u8;
    let mut i = 0;
    while i < 3 {
        v0 |= (vs[i] & 0xC0) >> ((i as u32 + 1) * 2);
        i += 1;
    }

    [v0, vs[0] & 0x3F, vs[1] & 0x3F, vs[2] & 0x3F]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Quad;

impl GroupCodec for Quad {
    const SAMPLE_BITS: u32 = 6;
    const SAMPLES: usize = 4;
    const BLOCKS: usize = 3;
    const MAX_SAMPLE: u8 = MAX_6B;

    type Group = [u8; 4];
    type Packed = [u8; 3];

    #[inline]
    fn pack(group: [u8; 4]) -> [u8; 3] {
        pack_4x6b(group)
    }

    #[inline]
    fn unpack(packed: [u8; 3]) -> [u8; 4] {
        unpack_4x6b(packed)
    }
}
