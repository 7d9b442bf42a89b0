//! Cheap weathering approximation.
//!
//! Folded ("ping-pong") noise carves alternating ridge/valley bands without a
//! hydraulic simulation. The band value attenuates the base terrain
//! multiplicatively, weighted by the terrain's own magnitude, so erosion only
//! measurably touches terrain that already has height.

use crate::math::{pingpong, smoothstep};
use crate::noise::{layer_sample, NoiseField};
use crate::params::TerrainParameters;

/// Erosion samples at three times the base frequency.
pub const EROSION_FREQUENCY_RATIO: f64 = 3.0;
/// Pre-smoothstep sample attenuation; erosion reads a low-amplitude field.
pub const EROSION_SAMPLE_AMPLITUDE: f64 = 0.5;
/// Input scale into the fold; controls band count per noise feature.
pub const EROSION_BAND_SCALE: f64 = 3.0;
/// Constant subtracted after folding; the floor below which no band forms.
pub const EROSION_BAND_FLOOR: f64 = 0.3;
/// Sampling offset decorrelating erosion from the other layers on its field.
const EROSION_OFFSET: (f64, f64) = (511.7, 89.2);

/// Erosion band strength at `(x, z)`, ≥ 0.
///
/// Low-amplitude sample → `smoothstep(0, 1, ·)` → power `1 + erosion_softness`
/// → triangle fold → subtract the floor, clamp at zero.
pub fn erosion_band(field: &NoiseField, params: &TerrainParameters, x: f64, z: f64) -> f64 {
    let freq = params.fbm_base_frequency * EROSION_FREQUENCY_RATIO;
    let n = EROSION_SAMPLE_AMPLITUDE
        * layer_sample(field, params, x, z, freq, EROSION_OFFSET.0, EROSION_OFFSET.1);
    let t = smoothstep(0.0, 1.0, n).powf(1.0 + params.erosion_softness.max(0.0));
    (pingpong(t * EROSION_BAND_SCALE, 1.0) - EROSION_BAND_FLOOR).max(0.0)
}

/// Multiplicative attenuation factor for the base terrain, in [0, 1].
///
/// `1 − band · erosion_amount · |base|`: flat areas (base ≈ 0) pass through
/// unchanged, avoiding pathological erosion of plains.
pub fn erosion_factor(band: f64, erosion_amount: f64, base_terrain: f64) -> f64 {
    (1.0 - band * erosion_amount * base_terrain.abs()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_is_non_negative() {
        let f = NoiseField::new(24601);
        let p = TerrainParameters::default();
        for i in 0..300 {
            let x = i as f64 * 137.0 - 2000.0;
            assert!(erosion_band(&f, &p, x, x * 0.3) >= 0.0);
        }
    }

    #[test]
    fn factor_is_identity_on_flat_terrain() {
        assert_eq!(erosion_factor(0.7, 1.0, 0.0), 1.0);
    }

    #[test]
    fn factor_attenuates_elevated_terrain() {
        let factor = erosion_factor(0.5, 1.0, 0.8);
        assert!(factor < 1.0);
        assert!(factor >= 0.0);
    }

    #[test]
    fn factor_never_leaves_unit_interval() {
        // Adversarial magnitudes must clamp, not flip terrain sign.
        assert_eq!(erosion_factor(10.0, 10.0, 10.0), 0.0);
        assert_eq!(erosion_factor(0.0, 5.0, 3.0), 1.0);
    }

    #[test]
    fn softness_widens_the_quiet_zones() {
        // Higher softness raises the exponent, pushing pre-fold values toward
        // zero, so the band can only shrink or stay.
        let f = NoiseField::new(24601);
        let gentle = TerrainParameters { erosion_softness: 0.0, ..Default::default() };
        let soft = TerrainParameters { erosion_softness: 2.0, ..Default::default() };
        let mut shrank = 0;
        for i in 0..200 {
            let x = i as f64 * 157.0;
            let a = erosion_band(&f, &gentle, x, -x * 0.6);
            let b = erosion_band(&f, &soft, x, -x * 0.6);
            if b < a {
                shrank += 1;
            }
        }
        assert!(shrank > 0, "softness had no effect anywhere");
    }
}
