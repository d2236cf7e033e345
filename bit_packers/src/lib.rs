//! # bit_packers
//!
//! A `no_std` compatible set of fixed-group bit packers. Each codec squeezes a
//! small group of narrow samples into 8-bit blocks with no padding:
//!
//! | Codec     | Samples | Bits each | Blocks |
//! |-----------|---------|-----------|--------|
//! | [`Pair`]  | 2       | 4         | 1      |
//! | [`Quad`]  | 4       | 6         | 3      |
//! | [`Octet`] | 8       | 7         | 7      |
//!
//! ```rust
//! use bit_packers::{pack_2x4b, pack_8x7b, unpack_2x4b, unpack_8x7b};
//!
//! let block = pack_2x4b([0x7, 0xE]);
//! assert_eq!(block, 0xE7);
//! assert_eq!(unpack_2x4b(block), [0x7, 0xE]);
//!
//! // 8 bytes of 7-bit text become 7 bytes
//! let text = *b"packing!";
//! let packed = pack_8x7b(text);
//! assert_eq!(unpack_8x7b(packed), text);
//! ```
//!
//! ## Out-of-range samples
//!
//! None of the functions fail. [`pack_2x4b`] truncates each sample to four
//! bits. [`pack_4x6b`] and [`pack_8x7b`] mask only the first sample; the rest
//! must already fit, otherwise their high bits overwrite the first sample's
//! slot. [`GroupCodec::try_pack`] checks the whole group first.
//!

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::BitPackError;

pub mod codec;
pub use codec::{GroupCodec, MAX_4B, MAX_6B, MAX_7B, MIN_4B, MIN_6B, MIN_7B};

mod octet;
mod pair;
mod quad;

pub use octet::{Octet, pack_8x7b, unpack_8x7b};
pub use pair::{Pair, pack_2x4b, unpack_2x4b};
pub use quad::{Quad, pack_4x6b, unpack_4x6b};
