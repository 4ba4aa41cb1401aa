use std::io;

use codec_bitstream::errors::BitstreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Eac3Error {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("sync word not found at byte offset {offset}, got {found:#06x}")]
    SyncNotFound { offset: u64, found: u16 },
    #[error("unsupported bitstream id {bsid} at byte offset {offset}")]
    UnsupportedStreamId { offset: u64, bsid: u8 },
    #[error("truncated frame at byte offset {offset}: needs {needed} bytes, only {available} left")]
    TruncatedFrame {
        offset: u64,
        needed: usize,
        available: usize,
    },
    #[error("invalid frame size code {code} at byte offset {offset}")]
    InvalidFrameSize { offset: u64, code: u16 },
    #[error("reserved stream type {stream_type} at byte offset {offset}")]
    ReservedStreamType { offset: u64, stream_type: u8 },
    #[error("malformed header at byte offset {offset}: {source}")]
    MalformedHeader {
        offset: u64,
        #[source]
        source: BitstreamError,
    },
    #[error("channel map field detection failed: {0}")]
    FieldDetectionFailed(String),
    #[error(
        "channel map offset drift at byte offset {offset}: locked at bit {expected}, frame has {found:?}"
    )]
    OffsetDriftDetected {
        offset: u64,
        expected: u32,
        found: Option<u32>,
    },
    #[error("patch of frame at byte offset {offset} failed: {source}")]
    PatchFailed {
        offset: u64,
        #[source]
        source: BitstreamError,
    },
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl Eac3Error {
    /// byte offset in the input stream the failure is attached to, if any
    pub fn offset(&self) -> Option<u64> {
        match self {
            Eac3Error::SyncNotFound { offset, .. }
            | Eac3Error::UnsupportedStreamId { offset, .. }
            | Eac3Error::TruncatedFrame { offset, .. }
            | Eac3Error::InvalidFrameSize { offset, .. }
            | Eac3Error::ReservedStreamType { offset, .. }
            | Eac3Error::MalformedHeader { offset, .. }
            | Eac3Error::OffsetDriftDetected { offset, .. }
            | Eac3Error::PatchFailed { offset, .. } => Some(*offset),
            Eac3Error::Io(_)
            | Eac3Error::FieldDetectionFailed(_)
            | Eac3Error::InvalidOptions(_) => None,
        }
    }
}

pub type Eac3Result<T> = Result<T, Eac3Error>;
