use std::io;

use bitstream_io::BitRead;

use crate::errors::{BitstreamError, BitstreamResult};

/// MSB-first reader over a byte slice that keeps track of how many bits were consumed,
/// so header walkers can report where each field starts
pub struct BitstreamReader<'a> {
    reader: bitstream_io::BitReader<io::Cursor<&'a [u8]>, bitstream_io::BigEndian>,
    buf_length: usize,
    position: u64,
}

impl<'a> BitstreamReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        let reader = bitstream_io::BitReader::endian(io::Cursor::new(buf), bitstream_io::BigEndian);
        Self {
            reader,
            buf_length: buf.len(),
            position: 0,
        }
    }

    /// reader positioned `bit_offset` bits into `buf`
    pub fn at(buf: &'a [u8], bit_offset: u64) -> BitstreamResult<Self> {
        let mut reader = Self::new(buf);
        let mut left = bit_offset;
        while left > 0 {
            let step = left.min(u32::MAX as u64) as u32;
            reader.skip(step)?;
            left -= step as u64;
        }
        Ok(reader)
    }

    pub fn position_in_bits(&self) -> u64 {
        self.position
    }

    pub fn remaining_bits(&self) -> u64 {
        (self.buf_length as u64 * 8).saturating_sub(self.position)
    }

    fn ensure(&self, wanted: u32) -> BitstreamResult<()> {
        let remaining = self.remaining_bits();
        if (wanted as u64) > remaining {
            return Err(BitstreamError::NotEnoughBits {
                position: self.position,
                wanted,
                remaining,
            });
        }
        Ok(())
    }

    pub fn read_bit(&mut self) -> BitstreamResult<bool> {
        self.ensure(1)?;
        let bit = self.reader.read_bit()?;
        self.position += 1;
        Ok(bit)
    }

    pub fn read<const BITS: u32, I>(&mut self) -> BitstreamResult<I>
    where
        I: bitstream_io::Integer,
    {
        self.ensure(BITS)?;
        let value = self.reader.read::<BITS, I>()?;
        self.position += BITS as u64;
        Ok(value)
    }

    pub fn read_var<I>(&mut self, bits: u32) -> BitstreamResult<I>
    where
        I: bitstream_io::Integer + Sized,
    {
        self.ensure(bits)?;
        let value = self.reader.read_var::<I>(bits)?;
        self.position += bits as u64;
        Ok(value)
    }

    pub fn skip(&mut self, bits: u32) -> BitstreamResult<()> {
        self.ensure(bits)?;
        self.reader.skip(bits)?;
        self.position += bits as u64;
        Ok(())
    }
}

/// read `width` bits starting at `bit_offset` without keeping a reader around
pub fn peek_bits(buf: &[u8], bit_offset: u64, width: u32) -> BitstreamResult<u32> {
    if width == 0 || width > 32 {
        return Err(BitstreamError::InvalidWidth(width));
    }
    let mut reader = BitstreamReader::at(buf, bit_offset)?;
    reader.read_var::<u32>(width)
}
