use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BitstreamError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("not enough bits at bit {position}: wanted {wanted}, {remaining} remaining")]
    NotEnoughBits {
        position: u64,
        wanted: u32,
        remaining: u64,
    },
    #[error("bit range {bit_offset}+{width} is outside of a {buf_bits} bits buffer")]
    OutOfRange {
        bit_offset: u64,
        width: u32,
        buf_bits: u64,
    },
    #[error("invalid field width: {0}")]
    InvalidWidth(u32),
    #[error("value {value:#x} does not fit in {width} bits")]
    ValueTooWide { value: u32, width: u32 },
}

pub type BitstreamResult<T> = Result<T, BitstreamError>;
