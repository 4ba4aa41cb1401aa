use std::{collections::VecDeque, io};

use serde::Serialize;

use crate::{
    assembler::StreamAssembler,
    checksum::refresh_checksum,
    errors::{Eac3Error, Eac3Result},
    frame::Frame,
    header::{FrameSyntax, FrameType},
    locator::{FieldLocation, FieldLocator, ensure_no_drift},
    options::PatchOptions,
    patcher::{PatchPlan, apply_plan},
    scanner::FrameScanner,
};

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchReport {
    pub channel_map_location: Option<FieldLocation>,
    pub total_frames: u64,
    pub ac3_frames: u64,
    pub independent_frames: u64,
    pub dependent_frames: u64,
    pub converted_frames: u64,
    /// dependent frames whose fields were forced and checksum refreshed
    pub patched_frames: u64,
    /// patched frames where at least one bit differed from the input
    pub rewritten_frames: u64,
    pub compression_forced: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl PatchReport {
    fn count(&mut self, frame: &Frame) {
        self.total_frames += 1;
        match (frame.syntax(), frame.frame_type()) {
            (FrameSyntax::Ac3, _) => self.ac3_frames += 1,
            (FrameSyntax::Eac3, FrameType::Independent) => self.independent_frames += 1,
            (FrameSyntax::Eac3, FrameType::Dependent) => self.dependent_frames += 1,
            (FrameSyntax::Eac3, FrameType::LegacyConvertedAC3) => self.converted_frames += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FramePatchOutcome {
    pub changed: bool,
    pub compression_forced: bool,
    pub checksum: u16,
}

/// Force the channel map (and compr when present) of one dependent frame and
/// refresh its checksum word. Frame length never changes.
pub fn patch_dependent_frame(
    frame: &mut Frame,
    locked: &FieldLocation,
    options: &PatchOptions,
) -> Eac3Result<FramePatchOutcome> {
    ensure_no_drift(locked, frame)?;
    let Some(bsi) = frame.header.as_eac3() else {
        return Ok(FramePatchOutcome::default());
    };

    let compression_forced = bsi.compression.is_some();
    let plan = PatchPlan::for_frame(*locked, bsi, options);
    let changed = apply_plan(frame, &plan)?;
    let checksum = refresh_checksum(&mut frame.data).unwrap_or_default();

    tracing::debug!(
        "dependent frame at {}: changed {}, compr forced {}, checksum {:#06x}",
        frame.offset,
        changed,
        compression_forced,
        checksum
    );
    Ok(FramePatchOutcome {
        changed,
        compression_forced,
        checksum,
    })
}

/// Copy `reader` to `writer` frame by frame, patching every dependent frame.
///
/// Frames are held back until `options.sample_frames` dependent frames have
/// been seen (or the input ends), so a failed detection writes nothing. At most
/// `options.max_held_frames` frames are held, detection fails past that. After
/// the lock, every frame is written as soon as it is processed.
pub fn patch_stream<R, W>(reader: R, writer: W, options: &PatchOptions) -> Eac3Result<PatchReport>
where
    R: io::Read,
    W: io::Write,
{
    options.validate()?;

    let mut scanner = FrameScanner::new(reader);
    let mut locator = FieldLocator::new(options.sample_frames);
    let mut pending = VecDeque::new();
    while locator.wants_more() {
        let Some(frame) = scanner.next_frame()? else {
            break;
        };
        if pending.len() >= options.max_held_frames {
            return Err(Eac3Error::FieldDetectionFailed(format!(
                "only {} of {} dependent frames found in the first {} frames, gave up at byte offset {}",
                locator.sampled(),
                options.sample_frames,
                pending.len(),
                frame.offset
            )));
        }
        locator.observe(&frame);
        pending.push_back(frame);
    }
    tracing::debug!(
        "held back {} frames while sampling {} dependent frames",
        pending.len(),
        locator.sampled()
    );
    let locked = locator.lock()?;

    let mut report = PatchReport {
        channel_map_location: Some(locked),
        ..Default::default()
    };
    let mut assembler = StreamAssembler::new(writer);

    while let Some(frame) = pending.pop_front() {
        process_frame(frame, &locked, options, &mut report, &mut assembler)?;
    }
    while let Some(frame) = scanner.next_frame()? {
        process_frame(frame, &locked, options, &mut report, &mut assembler)?;
    }

    report.bytes_in = scanner.position();
    report.bytes_out = assembler.bytes_written();
    tracing::debug!(
        "{} frames written, {} bytes read, {} bytes written",
        assembler.frames_written(),
        report.bytes_in,
        report.bytes_out
    );
    tracing::info!(
        "frames: total={} ac3={} eac3_independent={} eac3_dependent={} converted={} patched={}",
        report.total_frames,
        report.ac3_frames,
        report.independent_frames,
        report.dependent_frames,
        report.converted_frames,
        report.patched_frames
    );
    Ok(report)
}

fn process_frame<W: io::Write>(
    mut frame: Frame,
    locked: &FieldLocation,
    options: &PatchOptions,
    report: &mut PatchReport,
    assembler: &mut StreamAssembler<W>,
) -> Eac3Result<()> {
    report.count(&frame);
    if frame.is_dependent() {
        let outcome = patch_dependent_frame(&mut frame, locked, options)?;
        report.patched_frames += 1;
        if outcome.changed {
            report.rewritten_frames += 1;
        }
        if outcome.compression_forced {
            report.compression_forced += 1;
        }
    }
    assembler.write_frame(&frame)
}
