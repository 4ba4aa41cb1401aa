use codec_bitstream::{reader::peek_bits, writer::BitPatcher};

use crate::{
    errors::{Eac3Error, Eac3Result},
    frame::Frame,
    header::{CHECKSUM_BYTES, Eac3Bsi, FrameHeader},
    locator::FieldLocation,
    options::PatchOptions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchEntry {
    pub location: FieldLocation,
    pub value: u32,
}

/// Fields to force in one dependent frame.
#[derive(Debug, Clone, Default)]
pub struct PatchPlan {
    entries: Vec<PatchEntry>,
}

impl PatchPlan {
    /// chanmap always goes to the locked location, compr only if this frame has compre set
    pub fn for_frame(locked: FieldLocation, bsi: &Eac3Bsi, options: &PatchOptions) -> Self {
        let mut entries = vec![PatchEntry {
            location: locked,
            value: options.channel_map as u32,
        }];
        if let Some(location) = FieldLocation::compression(bsi) {
            entries.push(PatchEntry {
                location,
                value: options.compression as u32,
            });
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[PatchEntry] {
        &self.entries
    }
}

/// Apply `plan` to the frame bytes in place and refresh the parsed header.
/// Returns whether any bit actually changed. The checksum word is out of reach
/// of every entry, refreshing it is left to the caller.
pub fn apply_plan(frame: &mut Frame, plan: &PatchPlan) -> Eac3Result<bool> {
    let offset = frame.offset;
    let body_len = frame.data.len().saturating_sub(CHECKSUM_BYTES);
    let body = &mut frame.data[..body_len];

    let mut changed = false;
    for entry in plan.entries() {
        let bit_offset = entry.location.bit_offset as u64;
        let width = entry.location.bit_width;
        let before = peek_bits(body, bit_offset, width)
            .map_err(|source| Eac3Error::PatchFailed { offset, source })?;
        if before == entry.value {
            continue;
        }
        BitPatcher::new(body)
            .overwrite(bit_offset, width, entry.value)
            .map_err(|source| Eac3Error::PatchFailed { offset, source })?;
        tracing::trace!(
            "frame at {}: bit {} rewritten {:#x} -> {:#x}",
            offset,
            bit_offset,
            before,
            entry.value
        );
        changed = true;
    }

    if changed {
        frame.header = FrameHeader::read_from(&frame.sync_info, &frame.data, offset)?;
    }
    Ok(changed)
}
