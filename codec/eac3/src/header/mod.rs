use codec_bitstream::reader::BitstreamReader;
use utils::traits::reader::BitwiseReadFrom;

use crate::errors::{Eac3Error, Eac3Result};

pub mod ac3;
pub mod eac3;
pub mod sync_info;


pub use ac3::Ac3Bsi;
pub use eac3::Eac3Bsi;
pub use sync_info::SyncInfo;

pub const SYNC_WORD: u16 = 0x0B77;

/// trailing checksum word, present at the end of every syncframe
pub const CHECKSUM_BYTES: usize = 2;

pub mod stream_type {
    pub const INDEPENDENT: u8 = 0b00;
    pub const DEPENDENT: u8 = 0b01;
    pub const AC3_CONVERTED: u8 = 0b10;
    pub const RESERVED: u8 = 0b11;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum FrameType {
    Independent,
    Dependent,
    LegacyConvertedAC3,
}

impl FrameType {
    pub fn from_stream_type(value: u8) -> Option<Self> {
        match value {
            stream_type::INDEPENDENT => Some(Self::Independent),
            stream_type::DEPENDENT => Some(Self::Dependent),
            stream_type::AC3_CONVERTED => Some(Self::LegacyConvertedAC3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum FrameSyntax {
    Ac3,
    Eac3,
}

/// bit position of an optional header field together with the value it carried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderField<T> {
    pub bit_offset: u32,
    pub value: T,
}

#[derive(Debug, Clone)]
pub enum FrameHeader {
    Ac3(Ac3Bsi),
    Eac3(Eac3Bsi),
}

impl FrameHeader {
    /// decode the leading header fields of a whole frame, `offset` is only used for errors
    pub fn read_from(info: &SyncInfo, data: &[u8], offset: u64) -> Eac3Result<Self> {
        let body = &data[..data.len().saturating_sub(CHECKSUM_BYTES)];
        let mut reader = BitstreamReader::new(body);
        let header = match info.syntax {
            FrameSyntax::Ac3 => Ac3Bsi::read_from(&mut reader).map(FrameHeader::Ac3),
            FrameSyntax::Eac3 => Eac3Bsi::read_from(&mut reader).map(FrameHeader::Eac3),
        };
        header.map_err(|source| Eac3Error::MalformedHeader { offset, source })
    }

    pub fn bsid(&self) -> u8 {
        match self {
            FrameHeader::Ac3(bsi) => bsi.bsid,
            FrameHeader::Eac3(bsi) => bsi.bsid,
        }
    }

    pub fn as_eac3(&self) -> Option<&Eac3Bsi> {
        match self {
            FrameHeader::Eac3(bsi) => Some(bsi),
            FrameHeader::Ac3(_) => None,
        }
    }
}
