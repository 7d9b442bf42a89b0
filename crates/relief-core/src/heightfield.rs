//! The height field: four noise layers × one parameter set → `height(x, z)`.
//!
//! `height` is a pure function of `(x, z, parameters, seed)`. The combiner
//! runs its stages in a fixed order because later stages depend on earlier
//! magnitudes; the order and the tuning constants below define the terrain
//! "look" and are part of the output contract.

use crate::biome;
use crate::erosion;
use crate::math::lerp;
use crate::noise::{layer_sample, NoiseField};
use crate::params::TerrainParameters;
use crate::ridge;
use crate::river;

/// Hard fail-safe: any combined height beyond this (or non-finite) collapses
/// to 0 rather than producing degenerate geometry.
pub const MAX_ABS_HEIGHT: f64 = 10_000.0;

// ── Combiner tuning constants ─────────────────────────────────────────────
// Load-bearing: the scenario tests below pin these exact values.

/// Base-terrain blend weights of the two fBm layers.
pub const BASE_BLEND_PRIMARY: f64 = 0.65;
pub const BASE_BLEND_SECONDARY: f64 = 0.35;
/// Altitude-variation shaping: `amp · (noise·1.4 − 0.75)` biases regions
/// toward lowland with occasional highland shelves.
pub const ALTITUDE_NOISE_SCALE: f64 = 1.4;
pub const ALTITUDE_NOISE_BIAS: f64 = -0.75;
/// Valley term scale; valleys subtract at most `valley_depth · 0.3`.
pub const VALLEY_SCALE: f64 = 0.3;

/// Layer frequency ratios relative to `fbm_base_frequency`.
const ALTITUDE_FREQUENCY_RATIO: f64 = 0.5;
const VALLEY_FREQUENCY_RATIO: f64 = 1.2;
const DETAIL_FREQUENCY_RATIO: f64 = 20.0;

/// Per-layer sampling offsets, decorrelating layers that share a field.
const ALTITUDE_OFFSET: (f64, f64) = (433.9, 127.1);
const VALLEY_OFFSET: (f64, f64) = (88.4, -977.2);
const HILLS_OFFSET: (f64, f64) = (-604.1, 451.8);
const DETAIL_OFFSET: (f64, f64) = (216.7, 669.3);

/// An immutable height field: a parameter snapshot plus the four derived
/// noise layers. Construct once per configuration change; share by reference
/// or `Arc` with every consumer. All methods are `&self` and thread-safe.
#[derive(Debug, Clone)]
pub struct HeightField {
    params: TerrainParameters,
    /// Layer assignment: [0] base A / hills / detail, [1] base B / altitude,
    /// [2] region A / ridge A / erosion, [3] region B / ridge B / river / valley.
    fields: [NoiseField; 4],
}

impl HeightField {
    pub fn new(params: TerrainParameters) -> Self {
        let fields = NoiseField::layers(params.seed);
        Self { params, fields }
    }

    pub fn params(&self) -> &TerrainParameters {
        &self.params
    }

    /// Elevation at world `(x, z)`.
    ///
    /// Pure, total, deterministic: defined for all finite inputs, never
    /// panics, and bit-identical across calls, threads, and independently
    /// constructed `HeightField`s with the same `(seed, parameters)`.
    pub fn height(&self, x: f64, z: f64) -> f64 {
        let p = &self.params;
        let [f0, f1, f2, f3] = &self.fields;

        let region = biome::region_mask(f2, f3, p, x, z);
        let mountain = biome::mountain_mask(region, p.flatness_threshold);
        let flatness = biome::flatness_factor(region, p);

        // 1. Base terrain: blended two-layer fBm, optionally eroded.
        let base_a = layer_sample(f0, p, x, z, p.fbm_base_frequency, 0.0, 0.0);
        let base_b = layer_sample(f1, p, x, z, p.fbm_base_frequency, 0.0, 0.0);
        let mut base = BASE_BLEND_PRIMARY * base_a + BASE_BLEND_SECONDARY * base_b;
        if p.erosion_amount != 0.0 {
            let band = erosion::erosion_band(f2, p, x, z);
            base *= erosion::erosion_factor(band, p.erosion_amount, base);
        }

        // 2. Regional highland/lowland offset.
        let altitude = if p.altitude_variation != 0.0 {
            let freq = p.fbm_base_frequency * ALTITUDE_FREQUENCY_RATIO;
            let n = f1.sample((x + ALTITUDE_OFFSET.0) * freq, (z + ALTITUDE_OFFSET.1) * freq);
            p.altitude_variation * (n * ALTITUDE_NOISE_SCALE + ALTITUDE_NOISE_BIAS)
        } else {
            0.0
        };

        // 3. Ridges, gated by the mountain mask.
        let ridges = ridge::ridge_terrain(f2, f3, p, x, z, mountain);

        let mut height = base + altitude + ridges;

        // 4. Smooth lower planes: sign-preserving square/cube blend squashes
        //    small variations near zero while keeping large deviations.
        if p.smooth_lower_planes > 0.0 {
            let squared = height * height.abs();
            let cubed = height * height * height;
            height = lerp(squared, cubed, p.smooth_lower_planes.clamp(0.0, 1.0));
        }

        // 5. Valley depressions (subtractive only).
        if p.valley_depth != 0.0 {
            let freq = p.fbm_base_frequency * VALLEY_FREQUENCY_RATIO;
            let n = layer_sample(f3, p, x, z, freq, VALLEY_OFFSET.0, VALLEY_OFFSET.1);
            height += (n * p.valley_depth * VALLEY_SCALE).min(0.0);
        }

        // 6. Rolling hills, suppressed in flat zones.
        if p.hills_amount != 0.0 {
            let n = layer_sample(f0, p, x, z, p.hills_frequency, HILLS_OFFSET.0, HILLS_OFFSET.1);
            height += n * p.hills_amount * flatness;
        }

        // 7. Fine detail, also suppressed in flat zones.
        if p.detail_amount != 0.0 {
            let freq = p.fbm_base_frequency * DETAIL_FREQUENCY_RATIO;
            let n = layer_sample(f0, p, x, z, freq, DETAIL_OFFSET.0, DETAIL_OFFSET.1);
            height += n * p.detail_amount * flatness;
        }

        // 8. Global flattening pass.
        height *= flatness;

        // 9. Rivers (subtractive only).
        if p.river_amount != 0.0 {
            height -= river::river_channel(f3, p, x, z) * p.river_amount;
        }

        // 10. Vertical scale.
        height *= p.height_scale;

        // 11. Safety clamp against parameter misconfiguration.
        if !height.is_finite() || height.abs() > MAX_ABS_HEIGHT {
            return 0.0;
        }
        height
    }
}
