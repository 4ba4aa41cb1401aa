use codec_bitstream::{
    errors::{BitstreamError, BitstreamResult},
    reader::BitstreamReader,
};
use utils::traits::reader::BitwiseReadFrom;

use super::{HeaderField, stream_type::DEPENDENT};

pub const DUAL_MONO_ACMOD: u8 = 0b000;

/// second-channel loudness and compression words, only carried when acmod is 1+1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualMonoFields {
    pub dialnorm2: u8,                         // 5 bits
    pub compression2: Option<HeaderField<u8>>, // compr2e + 8 bits compr2
}

/// E-AC-3 bit stream information, decoded up to and including the custom
/// channel map. Optional fields keep the bit position (relative to the frame
/// start) they were read from.
///
/// ```text
/// syncword(16) strmtyp(2) substreamid(3) frmsiz(11) fscod(2) fscod2|numblkscod(2)
/// acmod(3) lfeon(1) bsid(5) dialnorm(5) compre(1) [compr(8)]
/// [acmod == 0: dialnorm2(5) compr2e(1) [compr2(8)]]
/// [strmtyp == 1: chanmape(1) [chanmap(16)]]
/// ```
#[derive(Debug, Clone)]
pub struct Eac3Bsi {
    pub stream_type: u8,                       // 2 bits
    pub substream_id: u8,                      // 3 bits
    pub frame_size_code: u16,                  // 11 bits
    pub sample_rate_code: u8,                  // 2 bits
    pub sample_rate_code2_or_blocks: u8,       // 2 bits, fscod2 when fscod == 3
    pub audio_coding_mode: u8,                 // 3 bits
    pub lfe_on: bool,                          // 1 bit
    pub bsid: u8,                              // 5 bits
    pub dialnorm: u8,                          // 5 bits
    pub compression: Option<HeaderField<u8>>,  // compre + 8 bits compr
    pub dual_mono: Option<DualMonoFields>,
    pub channel_map: Option<HeaderField<u16>>, // chanmape + 16 bits chanmap
}

impl Eac3Bsi {
    pub fn is_dependent(&self) -> bool {
        self.stream_type == DEPENDENT
    }
}

/// read a presence bit and, when set, the `BITS` wide field it gates
fn read_flagged<const BITS: u32, T>(
    reader: &mut BitstreamReader<'_>,
) -> BitstreamResult<Option<HeaderField<T>>>
where
    T: bitstream_io::Integer,
{
    if !reader.read_bit()? {
        return Ok(None);
    }
    let bit_offset = reader.position_in_bits() as u32;
    let value = reader.read::<BITS, T>()?;
    Ok(Some(HeaderField { bit_offset, value }))
}

impl<'a> BitwiseReadFrom<BitstreamReader<'a>> for Eac3Bsi {
    type Error = BitstreamError;
    fn read_from(reader: &mut BitstreamReader<'a>) -> Result<Self, Self::Error> {
        reader.skip(16)?; // syncword
        let stream_type = reader.read::<2, u8>()?;
        let substream_id = reader.read::<3, u8>()?;
        let frame_size_code = reader.read::<11, u16>()?;
        let sample_rate_code = reader.read::<2, u8>()?;
        let sample_rate_code2_or_blocks = reader.read::<2, u8>()?;
        let audio_coding_mode = reader.read::<3, u8>()?;
        let lfe_on = reader.read_bit()?;
        let bsid = reader.read::<5, u8>()?;
        let dialnorm = reader.read::<5, u8>()?;
        let compression = read_flagged::<8, u8>(reader)?;

        let dual_mono = if audio_coding_mode == DUAL_MONO_ACMOD {
            let dialnorm2 = reader.read::<5, u8>()?;
            let compression2 = read_flagged::<8, u8>(reader)?;
            Some(DualMonoFields {
                dialnorm2,
                compression2,
            })
        } else {
            None
        };

        let channel_map = if stream_type == DEPENDENT {
            read_flagged::<16, u16>(reader)?
        } else {
            None
        };

        Ok(Self {
            stream_type,
            substream_id,
            frame_size_code,
            sample_rate_code,
            sample_rate_code2_or_blocks,
            audio_coding_mode,
            lfe_on,
            bsid,
            dialnorm,
            compression,
            dual_mono,
            channel_map,
        })
    }
}
