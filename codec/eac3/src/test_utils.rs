use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::{checksum::refresh_checksum, header::SYNC_WORD};

/// Synthetic E-AC-3 syncframe: a real BSI prefix up to chanmap, then filler
/// bytes and a valid checksum word.
#[derive(Debug, Clone)]
pub(crate) struct Eac3FrameBuilder {
    pub stream_type: u8,
    pub substream_id: u8,
    pub frame_bytes: usize,
    pub audio_coding_mode: u8,
    pub lfe_on: bool,
    pub dialnorm: u8,
    pub compression: Option<u8>,
    pub compression2: Option<u8>,
    pub channel_map: Option<u16>,
    pub seed: u8,
}

impl Eac3FrameBuilder {
    pub fn independent() -> Self {
        Self {
            stream_type: 0,
            substream_id: 0,
            frame_bytes: 256,
            audio_coding_mode: 7,
            lfe_on: true,
            dialnorm: 27,
            compression: None,
            compression2: None,
            channel_map: None,
            seed: 0x11,
        }
    }

    pub fn dependent(channel_map: Option<u16>) -> Self {
        Self {
            stream_type: 1,
            audio_coding_mode: 2,
            lfe_on: false,
            frame_bytes: 128,
            channel_map,
            seed: 0x5D,
            ..Self::independent()
        }
    }

    pub fn compression(mut self, compression: Option<u8>) -> Self {
        self.compression = compression;
        self
    }

    pub fn seed(mut self, seed: u8) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut writer = BitWriter::endian(Vec::new(), BigEndian);
        writer.write::<16, u16>(SYNC_WORD).unwrap();
        writer.write::<2, u8>(self.stream_type).unwrap();
        writer.write::<3, u8>(self.substream_id).unwrap();
        writer
            .write::<11, u16>((self.frame_bytes / 2 - 1) as u16)
            .unwrap();
        writer.write::<2, u8>(0).unwrap(); // 48 kHz
        writer.write::<2, u8>(0b11).unwrap(); // six blocks
        writer.write::<3, u8>(self.audio_coding_mode).unwrap();
        writer.write_bit(self.lfe_on).unwrap();
        writer.write::<5, u8>(16).unwrap();
        writer.write::<5, u8>(self.dialnorm).unwrap();
        write_flagged_u8(&mut writer, self.compression);
        if self.audio_coding_mode == 0 {
            writer.write::<5, u8>(self.dialnorm).unwrap();
            write_flagged_u8(&mut writer, self.compression2);
        }
        if self.stream_type == 1 {
            match self.channel_map {
                Some(channel_map) => {
                    writer.write_bit(true).unwrap();
                    writer.write::<16, u16>(channel_map).unwrap();
                }
                None => writer.write_bit(false).unwrap(),
            }
        }
        // mixmdate, infomdate and the rest of the frame are opaque here
        writer.byte_align().unwrap();
        let mut data = writer.into_writer();

        let mut i: u8 = 0;
        while data.len() < self.frame_bytes - 2 {
            data.push(self.seed.wrapping_add(i.wrapping_mul(37)));
            i = i.wrapping_add(1);
        }
        data.extend_from_slice(&[0, 0]);
        refresh_checksum(&mut data).unwrap();
        data
    }
}

fn write_flagged_u8(writer: &mut BitWriter<Vec<u8>, BigEndian>, value: Option<u8>) {
    match value {
        Some(value) => {
            writer.write_bit(true).unwrap();
            writer.write::<8, u8>(value).unwrap();
        }
        None => writer.write_bit(false).unwrap(),
    }
}

/// 256 bytes AC-3 syncframe at 48 kHz (frmsizecod 8, bsid 8)
pub(crate) fn ac3_frame(seed: u8) -> Vec<u8> {
    let mut data = vec![0x0B, 0x77, 0xA5, 0x5A, 0b0000_1000, 0b0100_0000, 0b1110_0000];
    let mut i: u8 = 0;
    while data.len() < 256 {
        data.push(seed ^ i);
        i = i.wrapping_add(1);
    }
    data
}

pub(crate) fn concat(frames: &[Vec<u8>]) -> Vec<u8> {
    frames.iter().flatten().copied().collect()
}

pub(crate) fn scan_all(bytes: &[u8]) -> Vec<crate::frame::Frame> {
    crate::scanner::FrameScanner::new(bytes)
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

pub(crate) fn single_frame(bytes: &[u8]) -> crate::frame::Frame {
    let mut frames = scan_all(bytes);
    assert_eq!(frames.len(), 1);
    frames.remove(0)
}
