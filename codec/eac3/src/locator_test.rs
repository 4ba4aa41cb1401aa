#[cfg(test)]
mod test {
    use crate::{
        errors::Eac3Error,
        locator::{FieldLocation, FieldLocator, ensure_no_drift},
        test_utils::{Eac3FrameBuilder, ac3_frame, concat, scan_all, single_frame},
    };

    const PLAIN_LAYOUT: FieldLocation = FieldLocation {
        bit_offset: 52,
        bit_width: 16,
    };

    #[test]
    fn test_lock_on_agreeing_frames() {
        let bytes = concat(&[
            Eac3FrameBuilder::independent().build(),
            Eac3FrameBuilder::dependent(Some(0x0003)).build(),
            Eac3FrameBuilder::independent().seed(0x20).build(),
            Eac3FrameBuilder::dependent(Some(0xF00F)).seed(0x21).build(),
        ]);
        let mut locator = FieldLocator::new(8);
        let taken: Vec<bool> = scan_all(&bytes)
            .iter()
            .map(|frame| locator.observe(frame))
            .collect();
        assert_eq!(taken, vec![false, true, false, true]);
        assert_eq!(locator.sampled(), 2);
        assert!(locator.wants_more());
        assert_eq!(locator.lock().unwrap(), PLAIN_LAYOUT);
    }

    #[test]
    fn test_stops_sampling_when_full() {
        let bytes = concat(&[
            Eac3FrameBuilder::dependent(Some(0x0003)).build(),
            Eac3FrameBuilder::dependent(Some(0x0003)).build(),
        ]);
        let frames = scan_all(&bytes);
        let mut locator = FieldLocator::new(1);
        assert!(locator.observe(&frames[0]));
        assert!(!locator.wants_more());
        assert!(!locator.observe(&frames[1]));
        assert_eq!(locator.sampled(), 1);
    }

    #[test]
    fn test_disagreeing_frames_fail() {
        let bytes = concat(&[
            Eac3FrameBuilder::dependent(Some(0x0003)).build(),
            Eac3FrameBuilder::dependent(Some(0x0003))
                .compression(Some(0x80))
                .build(),
        ]);
        let mut locator = FieldLocator::new(8);
        for frame in scan_all(&bytes).iter() {
            locator.observe(frame);
        }
        assert!(matches!(
            locator.lock(),
            Err(Eac3Error::FieldDetectionFailed(_))
        ));
    }

    #[test]
    fn test_no_dependent_frame_fails() {
        let bytes = concat(&[ac3_frame(0x01), Eac3FrameBuilder::independent().build()]);
        let mut locator = FieldLocator::new(8);
        for frame in scan_all(&bytes).iter() {
            assert!(!locator.observe(frame));
        }
        assert!(matches!(
            locator.lock(),
            Err(Eac3Error::FieldDetectionFailed(_))
        ));
    }

    #[test]
    fn test_missing_channel_map_fails() {
        let bytes = concat(&[
            Eac3FrameBuilder::dependent(Some(0x0003)).build(),
            Eac3FrameBuilder::dependent(None).build(),
        ]);
        let mut locator = FieldLocator::new(8);
        for frame in scan_all(&bytes).iter() {
            locator.observe(frame);
        }
        match locator.lock() {
            Err(Eac3Error::FieldDetectionFailed(reason)) => {
                assert!(reason.contains("128"), "{}", reason)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_drift_check() {
        let same = single_frame(&Eac3FrameBuilder::dependent(Some(0x1111)).build());
        ensure_no_drift(&PLAIN_LAYOUT, &same).unwrap();

        let shifted = single_frame(
            &Eac3FrameBuilder::dependent(Some(0x1111))
                .compression(Some(0x00))
                .build(),
        );
        assert!(matches!(
            ensure_no_drift(&PLAIN_LAYOUT, &shifted),
            Err(Eac3Error::OffsetDriftDetected {
                offset: 0,
                expected: 52,
                found: Some(60)
            })
        ));

        let disabled = single_frame(&Eac3FrameBuilder::dependent(None).build());
        assert!(matches!(
            ensure_no_drift(&PLAIN_LAYOUT, &disabled),
            Err(Eac3Error::OffsetDriftDetected { found: None, .. })
        ));
    }

    #[test]
    fn test_compression_location() {
        let frame = single_frame(
            &Eac3FrameBuilder::dependent(Some(0x1111))
                .compression(Some(0x12))
                .build(),
        );
        let bsi = frame.header.as_eac3().unwrap();
        let location = FieldLocation::compression(bsi).unwrap();
        assert_eq!(location.bit_offset, 51);
        assert_eq!(location.bit_width, 8);
        assert_eq!(location.end_bit(), 59);
    }
}
