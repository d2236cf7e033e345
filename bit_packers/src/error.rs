#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitPackError {
    #[cfg_attr(
        feature = "std",
        error("Sample {index} has value {value}, which does not fit in {bits} bits")
    )]
    SampleOverflow { index: usize, value: u8, bits: u32 },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitPackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitPackError::SampleOverflow { index, value, bits } => write!(
                f,
                "Sample {} has value {}, which does not fit in {} bits",
                index, value, bits
            ),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::error::Error for BitPackError {}
