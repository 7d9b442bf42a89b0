//! Sharp mountain ridges from inverted-absolute fBm.
//!
//! `1 − |noise|` turns the zero-crossings of the underlying field into ridge
//! lines; two chained power curves control peak crispness without producing
//! needle spikes.

use crate::noise::{layer_sample, NoiseField};
use crate::params::TerrainParameters;

/// Ridge layers sample at twice the base frequency.
pub const RIDGE_FREQUENCY_RATIO: f64 = 2.0;
/// Blend weights of the two ridge layers.
pub const RIDGE_BLEND_PRIMARY: f64 = 0.75;
pub const RIDGE_BLEND_SECONDARY: f64 = 0.25;
/// Fixed softening power chained after `ridge_sharpness`; keeps crisp peaks
/// from degenerating into needles.
pub const RIDGE_SOFTEN_POWER: f64 = 0.8;
/// Sampling offset decorrelating the secondary ridge layer.
const RIDGE_SECONDARY_OFFSET: (f64, f64) = (-152.8, 914.6);

/// One ridge layer in [0, 1].
fn ridge_layer(
    field: &NoiseField,
    params: &TerrainParameters,
    x: f64,
    z: f64,
    offset: (f64, f64),
) -> f64 {
    let freq = params.fbm_base_frequency * RIDGE_FREQUENCY_RATIO;
    let n = layer_sample(field, params, x, z, freq, offset.0, offset.1);
    let inverted = (1.0 - n.abs()).max(0.0);
    inverted
        .powf(params.ridge_sharpness.max(0.0))
        .powf(RIDGE_SOFTEN_POWER)
}

/// Combined ridge contribution, already gated by the mountain mask.
///
/// Zero wherever the mask is zero (plains) or `mountain_intensity` is zero,
/// so disabling mountains costs nothing downstream.
pub fn ridge_terrain(
    primary: &NoiseField,
    secondary: &NoiseField,
    params: &TerrainParameters,
    x: f64,
    z: f64,
    mountain_mask: f64,
) -> f64 {
    if params.mountain_intensity == 0.0 || mountain_mask == 0.0 {
        return 0.0;
    }
    let r1 = ridge_layer(primary, params, x, z, (0.0, 0.0));
    let r2 = ridge_layer(secondary, params, x, z, RIDGE_SECONDARY_OFFSET);
    (RIDGE_BLEND_PRIMARY * r1 + RIDGE_BLEND_SECONDARY * r2)
        * params.mountain_intensity
        * mountain_mask
}
