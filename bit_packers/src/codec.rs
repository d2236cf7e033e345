//! Sample ranges and the [`GroupCodec`] trait shared by the three codecs.
//!
//! The free functions (`pack_2x4b`, `pack_4x6b`, ...) are the primary API.
//! `GroupCodec` exists so framing code can be written once and instantiated
//! for [`Pair`](crate::Pair), [`Quad`](crate::Quad) or [`Octet`](crate::Octet).
//!
//! ```rust
//! use bit_packers::{GroupCodec, Quad};
//!
//! let packed = Quad::try_pack([39, 26, 62, 17]).unwrap();
//! assert_eq!(Quad::unpack(packed), [39, 26, 62, 17]);
//!
//! assert!(Quad::try_pack([0, 64, 0, 0]).is_err());
//! ```

use crate::BitPackError;

pub const MIN_4B: u8 = 0;
pub const MAX_4B: u8 = (1 << 4) - 1;

pub const MIN_6B: u8 = 0;
pub const MAX_6B: u8 = (1 << 6) - 1;

pub const MIN_7B: u8 = 0;
pub const MAX_7B: u8 = (1 << 7) - 1;

type Result<T> = core::result::Result<T, BitPackError>;

/// A fixed-size group of narrow samples packed into fixed-size blocks.
pub trait GroupCodec {
    /// Width of one sample in bits.
    const SAMPLE_BITS: u32;
    /// Samples per group.
    const SAMPLES: usize;
    /// Blocks per packed group.
    const BLOCKS: usize;
    /// Largest sample value that survives a round trip.
    const MAX_SAMPLE: u8;

    type Group: Copy + AsRef<[u8]>;
    type Packed: Copy;

    /// Unchecked pack. See the codec's free function for what happens to
    /// out-of-range samples.
    fn pack(group: Self::Group) -> Self::Packed;

    fn unpack(packed: Self::Packed) -> Self::Group;

    /// Returns `true` if every sample lies within `MIN..=MAX_SAMPLE`.
    fn fits(group: &Self::Group) -> bool {
        group.as_ref().iter().all(|&v| v <= Self::MAX_SAMPLE)
    }

    /// Packs `group` after checking every sample against `MAX_SAMPLE`.
    ///
    /// Out-of-range samples are reported, never masked: the error carries the
    /// first offending index.
    fn try_pack(group: Self::Group) -> Result<Self::Packed> {
        let overflow = group
            .as_ref()
            .iter()
            .enumerate()
            .find(|&(_, &v)| v > Self::MAX_SAMPLE);

        match overflow {
            Some((index, &value)) => Err(BitPackError::SampleOverflow {
                index,
                value,
                bits: Self::SAMPLE_BITS,
            }),
            None => Ok(Self::pack(group)),
        }
    }
}
