use std::io;

use crate::{errors::Eac3Result, frame::Frame};

/// Writes whole frames in input order, flushing after each one so a failed
/// run leaves only complete frames behind.
#[derive(Debug)]
pub struct StreamAssembler<W> {
    inner: W,
    frames_written: u64,
    bytes_written: u64,
}

impl<W> StreamAssembler<W>
where
    W: io::Write,
{
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            frames_written: 0,
            bytes_written: 0,
        }
    }

    pub fn write_frame(&mut self, frame: &Frame) -> Eac3Result<()> {
        self.inner.write_all(&frame.data)?;
        self.inner.flush()?;
        self.frames_written += 1;
        self.bytes_written += frame.data.len() as u64;
        Ok(())
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
