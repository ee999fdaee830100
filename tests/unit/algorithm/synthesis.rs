//! Tests for separation validation, advisories and the row recurrence

#[cfg(test)]
mod tests {
    use autostereogram::StereogramError;
    use autostereogram::algorithm::carrier::Carrier;
    use autostereogram::algorithm::synthesis::{
        Advisory, EyeSeparation, SynthesisConfig, Synthesizer, advisories, synthesize,
        synthesize_dyn,
    };
    use autostereogram::spatial::DepthField;
    use ndarray::{Array2, ArrayD, IxDyn, array};

    fn separation(value: i64) -> EyeSeparation {
        EyeSeparation::new(value).unwrap()
    }

    fn single_row(carrier: [u8; 6], depth: [u8; 6], eye_separation: i64) -> Vec<u8> {
        let depth = DepthField::from_raw(1, 6, depth.to_vec()).unwrap();
        let carrier =
            Carrier::from_array(Array2::from_shape_vec((1, 6), carrier.to_vec()).unwrap());
        let synthesizer = Synthesizer::new(SynthesisConfig::new(separation(eye_separation)));

        synthesizer
            .synthesize_from_carrier(&depth, carrier)
            .unwrap()
            .pixels()
            .iter()
            .copied()
            .collect()
    }

    // Tests zero and negative separations are rejected
    // Verified by accepting zero
    #[test]
    fn test_eye_separation_rejects_non_positive() {
        for value in [0, -3, i64::MIN] {
            let err = EyeSeparation::new(value).unwrap_err();
            assert!(matches!(
                err,
                StereogramError::InvalidParameter {
                    parameter: "eye_separation",
                    ..
                }
            ));
        }
    }

    // Tests positive separations round-trip through get and TryFrom
    // Verified by storing value minus one
    #[test]
    fn test_eye_separation_accepts_positive() {
        assert_eq!(separation(1).get(), 1);
        assert_eq!(EyeSeparation::try_from(15_i64).unwrap().get(), 15);
        assert_eq!(separation(15).to_string(), "15");
    }

    // Tests a separation at or beyond the width is flagged
    // Verified by using a strict greater-than comparison
    #[test]
    fn test_advisory_for_wide_separation() {
        let depth = DepthField::from_raw(1, 4, vec![0, 10, 20, 30]).unwrap();

        assert_eq!(
            advisories(&depth, separation(4)),
            vec![Advisory::SeparationExceedsWidth {
                eye_separation: 4,
                width: 4
            }]
        );
        assert!(advisories(&depth, separation(3)).is_empty());
    }

    // Tests uniform depth fields are flagged
    // Verified by only flagging all-zero fields
    #[test]
    fn test_advisory_for_uniform_depth() {
        let far = DepthField::filled(3, 8, 0).unwrap();
        let near = DepthField::filled(3, 8, 255).unwrap();

        assert_eq!(
            advisories(&far, separation(2)),
            vec![Advisory::UniformDepth { value: 0 }]
        );
        assert_eq!(
            advisories(&near, separation(2)),
            vec![Advisory::UniformDepth { value: 255 }]
        );
    }

    // Tests advisory messages mention the offending values
    // Verified by dropping the width from the message
    #[test]
    fn test_advisory_display() {
        let message = Advisory::SeparationExceedsWidth {
            eye_separation: 20,
            width: 12,
        }
        .to_string();

        assert!(message.contains("20"));
        assert!(message.contains("12"));
        assert!(message.contains("noise"));
    }

    // Tests config builders set seed and scheduling
    // Verified by leaving parallel enabled in sequential()
    #[test]
    fn test_config_builders() {
        let config = SynthesisConfig::new(separation(10));
        assert_eq!(config.seed, None);
        assert!(config.parallel);

        let config = config.with_seed(3).sequential();
        assert_eq!(config.seed, Some(3));
        assert!(!config.parallel);
        assert_eq!(Synthesizer::new(config).config().eye_separation.get(), 10);
    }

    // Tests zero depth leaves the carrier untouched
    // Verified by copying from x - eye_separation regardless of depth
    #[test]
    fn test_zero_depth_is_identity() {
        assert_eq!(
            single_row([10, 20, 30, 40, 50, 60], [0; 6], 2),
            vec![10, 20, 30, 40, 50, 60]
        );
    }

    // Tests maximum depth repeats with period equal to the separation
    // Verified by reading from the original carrier instead of the updated row
    #[test]
    fn test_max_depth_repeats_updated_values() {
        assert_eq!(
            single_row([10, 20, 30, 40, 50, 60], [0, 0, 255, 255, 255, 255], 2),
            vec![10, 20, 10, 20, 10, 20]
        );
    }

    // Tests intermediate depth floors to a smaller shift
    // Verified by rounding the shift to nearest
    #[test]
    fn test_intermediate_depth_shift() {
        // 128 * 2 / 255 floors to 1, 127 * 2 / 255 floors to 0
        assert_eq!(
            single_row([10, 20, 30, 40, 50, 60], [0, 0, 128, 128, 127, 128], 2),
            vec![10, 20, 20, 20, 50, 50]
        );
    }

    // Tests depth in the left margin has no effect
    // Verified by starting the column loop at zero
    #[test]
    fn test_left_margin_ignores_depth() {
        assert_eq!(
            single_row([10, 20, 30, 40, 50, 60], [255, 255, 255, 0, 0, 0], 3),
            vec![10, 20, 30, 40, 50, 60]
        );
    }

    // Tests mismatched carrier dimensions are rejected
    // Verified by removing the dimension check
    #[test]
    fn test_carrier_dimension_mismatch() {
        let depth = DepthField::filled(2, 3, 0).unwrap();
        let carrier = Carrier::from_array(array![[1, 2], [3, 4]]);
        let synthesizer = Synthesizer::new(SynthesisConfig::new(separation(1)));

        let err = synthesizer
            .synthesize_from_carrier(&depth, carrier)
            .unwrap_err();
        assert!(matches!(err, StereogramError::InvalidShape { .. }));
    }

    // Tests the free function validates the separation before synthesizing
    // Verified by clamping negative separations to one
    #[test]
    fn test_synthesize_rejects_invalid_separation() {
        let depth = DepthField::filled(2, 3, 0).unwrap();

        assert!(matches!(
            synthesize(&depth, 0, Some(1)),
            Err(StereogramError::InvalidParameter { .. })
        ));
        assert!(matches!(
            synthesize(&depth, -3, Some(1)),
            Err(StereogramError::InvalidParameter { .. })
        ));
    }

    // Tests the free function records the seed it used
    // Verified by discarding the seed
    #[test]
    fn test_synthesize_records_seed() {
        let depth = DepthField::filled(2, 3, 0).unwrap();

        let seeded = synthesize(&depth, 1, Some(11)).unwrap();
        assert_eq!(seeded.seed(), Some(11));
        assert_eq!(seeded.eye_separation(), 1);

        let unseeded = synthesize(&depth, 1, None).unwrap();
        assert!(unseeded.seed().is_some());
    }

    // Tests multi-channel input is rejected as a shape error
    // Verified by taking the first channel of rank 3 input
    #[test]
    fn test_synthesize_dyn_rejects_color() {
        let color = ArrayD::<u8>::zeros(IxDyn(&[4, 6, 3]));

        assert!(matches!(
            synthesize_dyn(color, 2, Some(0)),
            Err(StereogramError::InvalidShape { .. })
        ));
    }

    // Tests 2D dynamic input is accepted
    // Verified by requiring rank 3
    #[test]
    fn test_synthesize_dyn_accepts_grayscale() {
        let gray = ArrayD::<u8>::zeros(IxDyn(&[4, 6]));
        let stereogram = synthesize_dyn(gray, 2, Some(0)).unwrap();

        assert_eq!(stereogram.dimensions(), (4, 6));
    }
}
