use serde::Serialize;

use crate::{
    errors::{Eac3Error, Eac3Result},
    frame::Frame,
    header::Eac3Bsi,
};

pub const CHANNEL_MAP_BITS: u32 = 16;
pub const COMPRESSION_BITS: u32 = 8;

/// Where a fixed-width field sits in a frame, in bits from the first bit of the sync word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldLocation {
    pub bit_offset: u32,
    pub bit_width: u32,
}

impl FieldLocation {
    /// chanmap position found by walking the header schema, `None` when chanmape is clear
    pub fn channel_map(bsi: &Eac3Bsi) -> Option<Self> {
        bsi.channel_map.map(|field| Self {
            bit_offset: field.bit_offset,
            bit_width: CHANNEL_MAP_BITS,
        })
    }

    /// compr position, `None` when compre is clear
    pub fn compression(bsi: &Eac3Bsi) -> Option<Self> {
        bsi.compression.map(|field| Self {
            bit_offset: field.bit_offset,
            bit_width: COMPRESSION_BITS,
        })
    }

    pub fn end_bit(&self) -> u64 {
        self.bit_offset as u64 + self.bit_width as u64
    }
}

#[derive(Debug)]
struct Sample {
    offset: u64,
    location: Option<FieldLocation>,
}

/// Collects the channel map position of the first dependent frames and locks
/// it once they all agree. The position itself comes from the header walk,
/// the samples only have to confirm it.
#[derive(Debug)]
pub struct FieldLocator {
    wanted: usize,
    samples: Vec<Sample>,
}

impl FieldLocator {
    pub fn new(wanted: usize) -> Self {
        Self {
            wanted,
            samples: Vec::with_capacity(wanted),
        }
    }

    pub fn wants_more(&self) -> bool {
        self.samples.len() < self.wanted
    }

    pub fn sampled(&self) -> usize {
        self.samples.len()
    }

    /// take `frame` as a sample if it is a dependent frame and more samples are wanted
    pub fn observe(&mut self, frame: &Frame) -> bool {
        if !self.wants_more() || !frame.is_dependent() {
            return false;
        }
        let location = frame.header.as_eac3().and_then(FieldLocation::channel_map);
        tracing::debug!(
            "sampled dependent frame at {}: channel map at {:?}",
            frame.offset,
            location
        );
        self.samples.push(Sample {
            offset: frame.offset,
            location,
        });
        true
    }

    pub fn lock(self) -> Eac3Result<FieldLocation> {
        let Some(first) = self.samples.first() else {
            return Err(Eac3Error::FieldDetectionFailed(
                "no dependent frame found in the stream".to_owned(),
            ));
        };

        if let Some(missing) = self.samples.iter().find(|s| s.location.is_none()) {
            return Err(Eac3Error::FieldDetectionFailed(format!(
                "dependent frame at byte offset {} carries no channel map",
                missing.offset
            )));
        }

        let Some(candidate) = first.location else {
            return Err(Eac3Error::FieldDetectionFailed(format!(
                "dependent frame at byte offset {} carries no channel map",
                first.offset
            )));
        };

        if let Some(other) = self
            .samples
            .iter()
            .find(|s| s.location != Some(candidate))
        {
            return Err(Eac3Error::FieldDetectionFailed(format!(
                "dependent frames disagree: bit {} at byte offset {}, {:?} at byte offset {}",
                candidate.bit_offset,
                first.offset,
                other.location.map(|l| l.bit_offset),
                other.offset
            )));
        }

        tracing::info!(
            "channel map locked at bit {} ({} bits) from {} dependent frames",
            candidate.bit_offset,
            candidate.bit_width,
            self.samples.len()
        );
        Ok(candidate)
    }
}

/// a dependent frame seen after locking has to put its channel map exactly where the lock says
pub fn ensure_no_drift(locked: &FieldLocation, frame: &Frame) -> Eac3Result<()> {
    let found = frame.header.as_eac3().and_then(FieldLocation::channel_map);
    if found != Some(*locked) {
        return Err(Eac3Error::OffsetDriftDetected {
            offset: frame.offset,
            expected: locked.bit_offset,
            found: found.map(|l| l.bit_offset),
        });
    }
    Ok(())
}
