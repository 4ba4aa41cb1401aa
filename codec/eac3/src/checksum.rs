use byteorder::{BigEndian, ByteOrder};

use crate::header::CHECKSUM_BYTES;

/// x^16 + x^15 + x^2 + 1
pub const CRC16_POLY: u16 = 0x8005;

/// checksum coverage starts right after the sync word
const COVERAGE_START: usize = 2;

const fn crc16_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut n = 0;
    while n < 256 {
        let mut crc = (n as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ CRC16_POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[n] = crc;
        n += 1;
    }
    table
}

static CRC16_TABLE: [u16; 256] = crc16_table();

/// MSB-first CRC-16 over `data`, continuing from `crc`
pub fn crc16(data: &[u8], crc: u16) -> u16 {
    data.iter().fold(crc, |crc, byte| {
        CRC16_TABLE[((crc >> 8) as u8 ^ byte) as usize] ^ (crc << 8)
    })
}

/// Recompute the trailing checksum word of a whole syncframe in place and return it.
/// Frames too short to hold sync and checksum are left untouched.
pub fn refresh_checksum(frame: &mut [u8]) -> Option<u16> {
    if frame.len() < COVERAGE_START + CHECKSUM_BYTES {
        return None;
    }
    let checksum_at = frame.len() - CHECKSUM_BYTES;
    let crc = crc16(&frame[COVERAGE_START..checksum_at], 0);
    BigEndian::write_u16(&mut frame[checksum_at..], crc);
    Some(crc)
}

pub fn checksum_word(frame: &[u8]) -> Option<u16> {
    frame
        .len()
        .checked_sub(CHECKSUM_BYTES)
        .filter(|at| *at >= COVERAGE_START)
        .map(|at| BigEndian::read_u16(&frame[at..]))
}

/// a frame whose checksum word matches its content leaves a zero remainder
pub fn checksum_is_valid(frame: &[u8]) -> bool {
    frame.len() >= COVERAGE_START + CHECKSUM_BYTES && crc16(&frame[COVERAGE_START..], 0) == 0
}
