//! Reference scaling checked level by level.
//!
//! For each coefficient the expected output of every input level is the
//! truncated, clamped product `floor(clamp(v * k, 0, 255))`, written out
//! here for a handful of levels so a change in rounding mode shows up as a
//! concrete mismatch.

#[cfg(test)]
mod tests {
    use crate::fixtures;
    use rgbtone_core::Channel;
    use rgbtone_ops::{PixelPipeline, transform::scale_value};

    /// `(coefficient, [(input, expected output)])`.
    const CASES: &[(f64, &[(u8, u8)])] = &[
        (1.0, &[(0, 0), (1, 1), (128, 128), (255, 255)]),
        (0.0, &[(0, 0), (77, 0), (255, 0)]),
        (0.5, &[(1, 0), (3, 1), (151, 75), (255, 127)]),
        (2.0, &[(0, 0), (100, 200), (127, 254), (128, 255), (200, 255)]),
        (-1.0, &[(0, 0), (1, 0), (255, 0)]),
        (1.5, &[(10, 15), (11, 16), (170, 255)]),
        (0.1, &[(9, 0), (10, 1), (255, 25)]),
    ];

    #[test]
    fn test_scalar_reference() {
        for &(k, pairs) in CASES {
            for &(input, expected) in pairs {
                assert_eq!(scale_value(input, k), expected, "{input} * {k}");
            }
        }
    }

    #[test]
    fn test_pipeline_matches_reference_on_every_level() {
        let ramp = fixtures::level_ramp();
        for &(k, pairs) in CASES {
            let result = PixelPipeline::new().run(&ramp, k, 1.0, 1.0).unwrap();
            let red = result.image.channel(Channel::Red);
            // Red holds level i at flat position i.
            for &(input, expected) in pairs {
                assert_eq!(red.data()[input as usize], expected, "{input} * {k}");
            }
            for (i, &v) in red.data().iter().enumerate() {
                assert_eq!(v, scale_value(i as u8, k));
            }
        }
    }
}
