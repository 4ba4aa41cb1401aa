use codec_bitstream::{errors::BitstreamError, reader::BitstreamReader};
use utils::traits::reader::BitwiseReadFrom;

/// Leading fields of an AC-3 syncframe. These frames are only classified and
/// copied through, so nothing past `acmod` is decoded.
#[derive(Debug, Clone)]
pub struct Ac3Bsi {
    pub crc1: u16,             // 16 bits
    pub sample_rate_code: u8,  // 2 bits, fscod
    pub frame_size_code: u8,   // 6 bits, frmsizecod
    pub bsid: u8,              // 5 bits
    pub bsmod: u8,             // 3 bits
    pub audio_coding_mode: u8, // 3 bits, acmod
}

impl<'a> BitwiseReadFrom<BitstreamReader<'a>> for Ac3Bsi {
    type Error = BitstreamError;
    fn read_from(reader: &mut BitstreamReader<'a>) -> Result<Self, Self::Error> {
        reader.skip(16)?; // syncword
        let crc1 = reader.read::<16, u16>()?;
        let sample_rate_code = reader.read::<2, u8>()?;
        let frame_size_code = reader.read::<6, u8>()?;
        let bsid = reader.read::<5, u8>()?;
        let bsmod = reader.read::<3, u8>()?;
        let audio_coding_mode = reader.read::<3, u8>()?;
        Ok(Self {
            crc1,
            sample_rate_code,
            frame_size_code,
            bsid,
            bsmod,
            audio_coding_mode,
        })
    }
}
