//! Fractional Brownian motion over a [`NoiseField`].
//!
//! Octave `i` samples at frequency `base_frequency · lacunarity^i` with
//! amplitude `amplitude · persistence^i`; the accumulated value is divided by
//! the total amplitude so output stays in roughly [−1, 1] regardless of
//! octave count.

use super::NoiseField;

/// Normalized fBm sum.
///
/// `offset_x`/`offset_y` shift the sampling position before the frequency
/// multiply, which lets one field serve several decorrelated layers.
///
/// Degenerate inputs return 0 rather than dividing by zero: `octaves = 0`,
/// or a parameter combination whose total amplitude is zero or non-finite.
#[allow(clippy::too_many_arguments)]
pub fn fbm(
    field: &NoiseField,
    x: f64,
    y: f64,
    octaves: u32,
    base_frequency: f64,
    persistence: f64,
    lacunarity: f64,
    amplitude: f64,
    offset_x: f64,
    offset_y: f64,
) -> f64 {
    let mut value = 0.0f64;
    let mut total_amplitude = 0.0f64;
    let mut amp = amplitude;
    let mut freq = base_frequency;

    for _ in 0..octaves {
        value += amp * field.sample((x + offset_x) * freq, (y + offset_y) * freq);
        total_amplitude += amp;
        amp *= persistence;
        freq *= lacunarity;
    }

    if total_amplitude == 0.0 || !total_amplitude.is_finite() {
        return 0.0;
    }
    value / total_amplitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_octaves_returns_zero() {
        let f = NoiseField::new(1);
        assert_eq!(fbm(&f, 10.0, 20.0, 0, 0.01, 0.5, 2.0, 1.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn zero_amplitude_returns_zero() {
        let f = NoiseField::new(1);
        assert_eq!(fbm(&f, 10.0, 20.0, 5, 0.01, 0.5, 2.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn single_octave_reduces_to_raw_sample() {
        // With one octave and unit amplitude, fbm is exactly the field
        // sampled at (x·f, y·f) — bit-identical, not approximately.
        let f = NoiseField::new(24601);
        let (x, y, freq) = (123.45, -67.89, 0.0005);
        let direct = f.sample(x * freq, y * freq);
        let summed = fbm(&f, x, y, 1, freq, 0.5, 2.0, 1.0, 0.0, 0.0);
        assert_eq!(summed.to_bits(), direct.to_bits());
    }

    #[test]
    fn output_stays_normalized_across_octave_counts() {
        let f = NoiseField::new(7);
        for octaves in 1..=8 {
            for i in 0..50 {
                let x = i as f64 * 97.3;
                let v = fbm(&f, x, x * 0.7, octaves, 0.002, 0.5, 2.0, 1.0, 0.0, 0.0);
                assert!(v.abs() <= 1.0 + 1e-9, "octaves={octaves}: {v} escapes [-1,1]");
            }
        }
    }

    #[test]
    fn degenerate_persistence_cancellation_is_guarded() {
        // persistence = −1 makes amplitudes alternate 1, −1, … so the total
        // amplitude of an even octave count is exactly zero.
        let f = NoiseField::new(3);
        let v = fbm(&f, 5.0, 5.0, 4, 0.01, -1.0, 2.0, 1.0, 0.0, 0.0);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn offsets_shift_the_field() {
        let f = NoiseField::new(11);
        let a = fbm(&f, 10.0, 10.0, 3, 0.01, 0.5, 2.0, 1.0, 0.0, 0.0);
        let b = fbm(&f, 10.0, 10.0, 3, 0.01, 0.5, 2.0, 1.0, 500.0, -500.0);
        assert_ne!(a, b);
    }
}
