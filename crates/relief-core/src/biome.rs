//! Macro-region classification: the flat-to-mountainous spectrum.
//!
//! One low-frequency scalar, the region mask, is the sole macro-scale driver
//! of "where are the mountains". It feeds both the mountain mask (which gates
//! ridges) and the flatness factor (which suppresses hills/detail and
//! flattens plains).

use crate::math::smoothstep;
use crate::noise::NoiseField;
use crate::params::TerrainParameters;

/// Region-mask frequency as a ratio of `fbm_base_frequency`; macro regions
/// span several base-terrain features.
pub const REGION_FREQUENCY_RATIO: f64 = 0.3;
/// Blend weights of the two region samples.
pub const REGION_BLEND_PRIMARY: f64 = 0.65;
pub const REGION_BLEND_SECONDARY: f64 = 0.35;
/// Exponent of the mountain mask; softens the cutoff at the threshold.
pub const MOUNTAIN_MASK_EXPONENT: f64 = 1.3;
/// Sampling offset decorrelating the secondary region sample.
const REGION_SECONDARY_OFFSET: (f64, f64) = (741.3, -263.9);

/// Macro-region mask in [0, 1]: 0 = deep plains, 1 = fully mountainous.
///
/// Two independently-offset raw low-frequency samples blended 0.65/0.35 and
/// remapped from [−1, 1]. Raw samples on purpose — the mask must stay smooth
/// at macro scale, so it never goes through the fBm octave stack.
pub fn region_mask(
    primary: &NoiseField,
    secondary: &NoiseField,
    params: &TerrainParameters,
    x: f64,
    z: f64,
) -> f64 {
    let f = params.fbm_base_frequency * REGION_FREQUENCY_RATIO;
    let a = primary.sample(x * f, z * f);
    let b = secondary.sample(
        (x + REGION_SECONDARY_OFFSET.0) * f,
        (z + REGION_SECONDARY_OFFSET.1) * f,
    );
    let blended = REGION_BLEND_PRIMARY * a + REGION_BLEND_SECONDARY * b;
    ((blended + 1.0) * 0.5).clamp(0.0, 1.0)
}

/// Gate for the ridge layer: zero below `flatness_threshold`, rising with a
/// smooth (not hard) onset above it.
pub fn mountain_mask(region_mask: f64, flatness_threshold: f64) -> f64 {
    (region_mask - flatness_threshold).max(0.0).powf(MOUNTAIN_MASK_EXPONENT)
}

/// Mask width of the flat-to-normal transition band above the threshold.
pub const FLATNESS_RAMP: f64 = 0.1;

/// Global flattening factor in [0, 1].
///
/// Uniformly `1 − flatness_smooth` everywhere below the flatness threshold,
/// ramping smoothly back to 1 over [`threshold`, `threshold + FLATNESS_RAMP`].
/// Uniform suppression matters: height variation between any two plains
/// points scales by the same factor, so raising `flatness_smooth` can never
/// increase it. With `flatness_smooth = 0` the factor is exactly 1.
pub fn flatness_factor(region_mask: f64, params: &TerrainParameters) -> f64 {
    let s = params.flatness_smooth.clamp(0.0, 1.0);
    if s == 0.0 {
        return 1.0;
    }
    let t = smoothstep(
        params.flatness_threshold,
        params.flatness_threshold + FLATNESS_RAMP,
        region_mask,
    );
    (1.0 - s * (1.0 - t)).clamp(0.0, 1.0)
}
