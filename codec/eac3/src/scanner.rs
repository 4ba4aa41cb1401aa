use std::io;

use crate::{
    errors::{Eac3Error, Eac3Result},
    frame::Frame,
    header::{
        FrameHeader, SYNC_WORD,
        sync_info::{SYNC_INFO_BYTES, SyncInfo},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    Finished,
}

/// Splits a byte stream into syncframes.
///
/// Each frame length comes from its header, so the scanner jumps straight to
/// where the next sync word has to be. A missing sync word or a short frame
/// ends the scan with an error, nothing is ever skipped to resynchronize.
#[derive(Debug)]
pub struct FrameScanner<R> {
    inner: R,
    position: u64,
    state: ScanState,
}

impl<R> FrameScanner<R>
where
    R: io::Read,
{
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            position: 0,
            state: ScanState::Scanning,
        }
    }

    /// byte offset of the next frame to be read
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn next_frame(&mut self) -> Eac3Result<Option<Frame>> {
        if self.state == ScanState::Finished {
            return Ok(None);
        }
        let result = self.read_frame();
        if !matches!(result, Ok(Some(_))) {
            self.state = ScanState::Finished;
        }
        result
    }

    fn read_frame(&mut self) -> Eac3Result<Option<Frame>> {
        let offset = self.position;

        let mut prefix = [0u8; SYNC_INFO_BYTES];
        let got = self.read_up_to(&mut prefix)?;
        if got == 0 {
            return Ok(None);
        }
        if got >= 2 {
            let found = u16::from_be_bytes([prefix[0], prefix[1]]);
            if found != SYNC_WORD {
                return Err(Eac3Error::SyncNotFound { offset, found });
            }
        }
        if got < SYNC_INFO_BYTES {
            return Err(Eac3Error::TruncatedFrame {
                offset,
                needed: SYNC_INFO_BYTES,
                available: got,
            });
        }

        let sync_info = SyncInfo::read_from(&prefix, offset)?;

        let mut data = vec![0u8; sync_info.frame_bytes];
        data[..SYNC_INFO_BYTES].copy_from_slice(&prefix);
        let got = self.read_up_to(&mut data[SYNC_INFO_BYTES..])?;
        if got < sync_info.frame_bytes - SYNC_INFO_BYTES {
            return Err(Eac3Error::TruncatedFrame {
                offset,
                needed: sync_info.frame_bytes,
                available: SYNC_INFO_BYTES + got,
            });
        }

        let header = FrameHeader::read_from(&sync_info, &data, offset)?;
        self.position += sync_info.frame_bytes as u64;

        tracing::trace!(
            "frame at {}: {:?} {:?} bsid {}, {} bytes, head {}",
            offset,
            sync_info.syntax,
            sync_info.frame_type,
            sync_info.bsid,
            sync_info.frame_bytes,
            utils::bytes::bytes_to_hex_prefix(&data, 12)
        );

        Ok(Some(Frame {
            offset,
            sync_info,
            header,
            data,
        }))
    }

    /// fill as much of `buf` as the stream allows, returns the byte count read
    fn read_up_to(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(filled)
    }
}

impl<R> Iterator for FrameScanner<R>
where
    R: io::Read,
{
    type Item = Eac3Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame().transpose()
    }
}
