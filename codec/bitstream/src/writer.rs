use utils::bits::{fits_in_bits, low_bits_mask};

use crate::errors::{BitstreamError, BitstreamResult};

/// Overwrites fixed-width bit fields of a byte buffer in place.
///
/// The buffer is never grown or shrunk: each write masks the covered bits out of
/// every byte it touches and ORs the new value in, bits outside the field keep
/// their original value.
#[derive(Debug)]
pub struct BitPatcher<'a> {
    buf: &'a mut [u8],
}

impl<'a> BitPatcher<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf }
    }

    pub fn bits_len(&self) -> u64 {
        self.buf.len() as u64 * 8
    }

    /// write the low `width` bits of `value` MSB-first starting at `bit_offset`
    pub fn overwrite(&mut self, bit_offset: u64, width: u32, value: u32) -> BitstreamResult<()> {
        if width == 0 || width > 32 {
            return Err(BitstreamError::InvalidWidth(width));
        }
        if !fits_in_bits(value, width) {
            return Err(BitstreamError::ValueTooWide { value, width });
        }
        let buf_bits = self.bits_len();
        if bit_offset
            .checked_add(width as u64)
            .is_none_or(|end| end > buf_bits)
        {
            return Err(BitstreamError::OutOfRange {
                bit_offset,
                width,
                buf_bits,
            });
        }

        let mut remaining = width;
        let mut position = bit_offset;
        while remaining > 0 {
            let byte_index = (position / 8) as usize;
            let bit_in_byte = (position % 8) as u32;
            let take = (8 - bit_in_byte).min(remaining);
            let shift = 8 - bit_in_byte - take;
            let chunk = ((value >> (remaining - take)) & low_bits_mask(take)) as u8;
            let mask = (low_bits_mask(take) as u8) << shift;
            self.buf[byte_index] = (self.buf[byte_index] & !mask) | (chunk << shift);
            remaining -= take;
            position += take as u64;
        }

        tracing::trace!(
            "overwrote {} bits at bit {} with {:#x}",
            width,
            bit_offset,
            value
        );
        Ok(())
    }
}
