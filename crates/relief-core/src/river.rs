//! Linear river-channel carving.
//!
//! The same folded-noise trick as erosion, but centered on the noise
//! zero-crossings so channels form long connected lines. Rivers are only ever
//! subtracted from the final height, never added.

use crate::math::pingpong;
use crate::noise::{layer_sample, NoiseField};
use crate::params::TerrainParameters;

/// River channels sample at 1.5× the base frequency.
pub const RIVER_FREQUENCY_RATIO: f64 = 1.5;
/// Half-period of the channel fold.
pub const RIVER_HALF_PERIOD: f64 = 0.5;
/// Sampling offset decorrelating rivers from the other layers on its field.
const RIVER_OFFSET: (f64, f64) = (-1009.4, 303.1);

/// Channel depth mask at `(x, z)`, in [0, 0.5].
///
/// `(|n| − 0.5)·2` recenters the sample so the fold's deepest points track
/// noise zero-crossings; `river_width` sets the flat channel floor and
/// `river_falloff` the bank slope. The [0,1] mask is inverted and halved:
/// 0 away from any channel, 0.5 at a channel centerline.
pub fn river_channel(field: &NoiseField, params: &TerrainParameters, x: f64, z: f64) -> f64 {
    let freq = params.fbm_base_frequency * RIVER_FREQUENCY_RATIO;
    let n = layer_sample(field, params, x, z, freq, RIVER_OFFSET.0, RIVER_OFFSET.1);
    let centered = (n.abs() - 0.5) * 2.0;
    let folded = pingpong(centered, RIVER_HALF_PERIOD);

    let bank = if params.river_falloff > 0.0 {
        ((folded - params.river_width) / params.river_falloff).clamp(0.0, 1.0)
    } else {
        // Degenerate falloff: hard channel edge at river_width.
        if folded < params.river_width { 0.0 } else { 1.0 }
    };
    (1.0 - bank) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_mask_is_bounded() {
        let f = NoiseField::new(24601);
        let p = TerrainParameters::default();
        for i in 0..400 {
            let x = i as f64 * 119.0 - 9000.0;
            let c = river_channel(&f, &p, x, x * -0.8);
            assert!((0.0..=0.5).contains(&c), "channel {c} at x={x}");
        }
    }

    #[test]
    fn wider_rivers_cover_no_less_area() {
        // Raising river_width can only deepen/widen the mask at any point.
        let f = NoiseField::new(24601);
        let narrow = TerrainParameters { river_width: 0.02, ..Default::default() };
        let wide = TerrainParameters { river_width: 0.2, ..Default::default() };
        for i in 0..300 {
            let x = i as f64 * 173.0;
            let a = river_channel(&f, &narrow, x, x * 0.45);
            let b = river_channel(&f, &wide, x, x * 0.45);
            assert!(b >= a - 1e-12, "wider river produced weaker channel at x={x}");
        }
    }

    #[test]
    fn zero_falloff_is_a_hard_edge_not_a_nan() {
        let f = NoiseField::new(24601);
        let p = TerrainParameters { river_falloff: 0.0, ..Default::default() };
        for i in 0..200 {
            let x = i as f64 * 211.0;
            let c = river_channel(&f, &p, x, -x);
            assert!(c == 0.0 || c == 0.5, "hard-edge channel must be 0 or 0.5, got {c}");
        }
    }
}
