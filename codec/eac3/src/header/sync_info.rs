use byteorder::{BigEndian, ByteOrder};

use crate::errors::{Eac3Error, Eac3Result};

use super::{FrameSyntax, FrameType, SYNC_WORD};

/// bytes needed ahead of a frame to know its syntax, type and length
pub const SYNC_INFO_BYTES: usize = 6;

pub const MAX_AC3_BSID: u8 = 10;
pub const EAC3_BSID: u8 = 16;

pub const MIN_EAC3_FRAME_BYTES: usize = 10;

/// AC-3 syncframe sizes in 16-bit words, indexed by [fscod][frmsizecod]
const AC3_FRAME_SIZE_WORDS: [[u16; 38]; 3] = [
    // 48 kHz
    [
        64, 64, 80, 80, 96, 96, 112, 112, 128, 128, 160, 160, 192, 192, 224, 224, 256, 256, 320,
        320, 384, 384, 448, 448, 512, 512, 640, 640, 768, 768, 896, 896, 1024, 1024, 1152, 1152,
        1280, 1280,
    ],
    // 44.1 kHz
    [
        69, 70, 87, 88, 104, 105, 121, 122, 139, 140, 174, 175, 208, 209, 243, 244, 278, 279, 348,
        349, 417, 418, 487, 488, 557, 558, 696, 697, 835, 836, 975, 976, 1114, 1115, 1253, 1254,
        1393, 1394,
    ],
    // 32 kHz
    [
        96, 96, 120, 120, 144, 144, 168, 168, 192, 192, 240, 240, 288, 288, 336, 336, 384, 384, 480,
        480, 576, 576, 672, 672, 768, 768, 960, 960, 1152, 1152, 1344, 1344, 1536, 1536, 1728, 1728,
        1920, 1920,
    ],
];

/// AC-3 syncframe length in bytes, `None` for reserved or out of table codes
pub fn ac3_frame_bytes(sample_rate_code: u8, frame_size_code: u8) -> Option<usize> {
    AC3_FRAME_SIZE_WORDS
        .get(sample_rate_code as usize)
        .and_then(|row| row.get(frame_size_code as usize))
        .map(|words| *words as usize * 2)
}

/// E-AC-3 syncframe length in bytes from the 11 bits `frmsiz` word count
#[inline]
pub fn eac3_frame_bytes(frame_size_code: u16) -> usize {
    (frame_size_code as usize + 1) * 2
}

/// What can be learned about a frame from its first [`SYNC_INFO_BYTES`] bytes:
/// enough to classify it and to jump to the next sync word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncInfo {
    pub syntax: FrameSyntax,
    pub frame_type: FrameType,
    pub bsid: u8,
    pub frame_bytes: usize,
}

impl SyncInfo {
    pub fn read_from(prefix: &[u8; SYNC_INFO_BYTES], offset: u64) -> Eac3Result<Self> {
        let sync_word = BigEndian::read_u16(&prefix[0..2]);
        if sync_word != SYNC_WORD {
            return Err(Eac3Error::SyncNotFound {
                offset,
                found: sync_word,
            });
        }

        let bsid = prefix[5] >> 3;
        if bsid <= MAX_AC3_BSID {
            let sample_rate_code = prefix[4] >> 6;
            let frame_size_code = prefix[4] & 0b11_1111;
            let frame_bytes = ac3_frame_bytes(sample_rate_code, frame_size_code)
                .filter(|bytes| *bytes > 0)
                .ok_or(Eac3Error::InvalidFrameSize {
                    offset,
                    code: prefix[4] as u16,
                })?;
            return Ok(Self {
                syntax: FrameSyntax::Ac3,
                frame_type: FrameType::Independent,
                bsid,
                frame_bytes,
            });
        }

        if bsid != EAC3_BSID {
            return Err(Eac3Error::UnsupportedStreamId { offset, bsid });
        }

        let stream_type = prefix[2] >> 6;
        let frame_type = FrameType::from_stream_type(stream_type)
            .ok_or(Eac3Error::ReservedStreamType {
                offset,
                stream_type,
            })?;
        let frame_size_code = (((prefix[2] & 0b111) as u16) << 8) | prefix[3] as u16;
        let frame_bytes = eac3_frame_bytes(frame_size_code);
        if frame_bytes < MIN_EAC3_FRAME_BYTES {
            return Err(Eac3Error::InvalidFrameSize {
                offset,
                code: frame_size_code,
            });
        }

        Ok(Self {
            syntax: FrameSyntax::Eac3,
            frame_type,
            bsid,
            frame_bytes,
        })
    }
}
