//! Seeded deterministic 2D noise.
//!
//! Four decorrelated `NoiseField` instances are derived from one world seed
//! at fixed offsets; each synthesis layer draws from its assigned instance so
//! that ridges, rivers, and biome boundaries do not visibly correlate.

pub mod fbm;

use noise::{NoiseFn, Perlin};

use crate::params::TerrainParameters;

/// Seed offsets for the four derived layer fields.
const LAYER_SEED_OFFSETS: [u32; 4] = [0, 1000, 2000, 3000];

/// Largest coordinate magnitude the permutation lookup accepts: the floored
/// coordinate must fit in `isize` (±9.2e18 on 64-bit targets). Samples
/// beyond it are defined as 0.
pub const MAX_SAMPLE_COORD: f64 = 9.0e18;

/// A seeded, immutable 2D scalar noise source.
///
/// `sample` is a pure function of `(seed, x, y)`: identical inputs always
/// produce identical outputs, distinct seeds produce decorrelated fields.
/// The permutation table is fixed at construction, so a `NoiseField` is
/// freely shareable across threads.
#[derive(Clone)]
pub struct NoiseField {
    seed: u32,
    perlin: Perlin,
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish_non_exhaustive()
    }
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self { seed, perlin: Perlin::new(seed) }
    }

    /// The four decorrelated layer instances for a world seed.
    pub fn layers(seed: u32) -> [NoiseField; 4] {
        LAYER_SEED_OFFSETS.map(|off| NoiseField::new(seed.wrapping_add(off)))
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sample the field at `(x, y)`. Output is in ≈[−1, 1].
    ///
    /// Coordinates beyond [`MAX_SAMPLE_COORD`] (including infinities and
    /// NaN) return 0: octave frequency products can overflow for extreme
    /// but valid world positions, and the permutation lookup converts the
    /// floored coordinate to `isize`, which cannot digest them. Zero keeps
    /// the query total and deterministic; downstream the worst case is flat
    /// terrain, matching the output clamp's failure mode.
    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Negated form so NaN also lands in the early return.
        if !(x.abs() <= MAX_SAMPLE_COORD && y.abs() <= MAX_SAMPLE_COORD) {
            return 0.0;
        }
        self.perlin.get([x, y])
    }
}

/// One synthesis-layer sample: fBm when enabled, otherwise a single raw
/// sample at the layer frequency. The raw path is what the golden base-blend
/// wiring test exercises.
#[inline]
pub(crate) fn layer_sample(
    field: &NoiseField,
    params: &TerrainParameters,
    x: f64,
    z: f64,
    frequency: f64,
    offset_x: f64,
    offset_z: f64,
) -> f64 {
    if params.fbm_enabled {
        fbm::fbm(
            field,
            x,
            z,
            params.fbm_octaves,
            frequency,
            params.fbm_persistence,
            params.fbm_lacunarity,
            1.0,
            offset_x,
            offset_z,
        )
    } else {
        field.sample((x + offset_x) * frequency, (z + offset_z) * frequency)
    }
}
