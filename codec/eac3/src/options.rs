use crate::errors::{Eac3Error, Eac3Result};

/// chanmap of a 7.1 dependent substream: Ls, Rs and the Lrs/Rrs pair
pub const DEFAULT_CHANNEL_MAP: u16 = 0x1A00;
pub const DEFAULT_COMPRESSION: u8 = 0xFF;
pub const DEFAULT_SAMPLE_FRAMES: usize = 8;
pub const DEFAULT_MAX_HELD_FRAMES: usize = 256;

#[derive(Debug, Clone)]
pub struct PatchOptions {
    /// dependent frames that must agree on the channel map position before it is locked
    pub sample_frames: usize,
    /// frames that may be held back while sampling before detection gives up
    pub max_held_frames: usize,
    pub channel_map: u16,
    pub compression: u8,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            sample_frames: DEFAULT_SAMPLE_FRAMES,
            max_held_frames: DEFAULT_MAX_HELD_FRAMES,
            channel_map: DEFAULT_CHANNEL_MAP,
            compression: DEFAULT_COMPRESSION,
        }
    }
}

impl PatchOptions {
    pub fn validate(&self) -> Eac3Result<()> {
        if self.sample_frames == 0 {
            return Err(Eac3Error::InvalidOptions(
                "at least one dependent frame has to be sampled".to_owned(),
            ));
        }
        if self.max_held_frames < self.sample_frames {
            return Err(Eac3Error::InvalidOptions(format!(
                "holding back {} frames cannot fit {} sampled dependent frames",
                self.max_held_frames, self.sample_frames
            )));
        }
        Ok(())
    }
}
