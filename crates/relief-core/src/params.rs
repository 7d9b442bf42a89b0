//! Terrain configuration surface.
//!
//! One `TerrainParameters` value describes a whole world: changing any knob
//! means constructing a new [`crate::HeightField`], never mutating in place,
//! so concurrently-running height queries against the old value stay
//! consistent.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by the preset loader. Height queries and chunk scheduling
/// themselves never fail; malformed numeric configuration is absorbed by the
/// output safety clamp instead.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("invalid terrain preset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable tuning knobs for height synthesis and chunk scheduling.
///
/// Defaults are calibrated for rolling terrain with occasional mountain
/// regions at `height_scale` metres of relief. Range validation is the
/// preset author's responsibility: out-of-range values produce bounded but
/// not meaningful terrain (worst case, the safety clamp yields flat zero).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParameters {
    /// World seed; all four internal noise layers derive from it.
    pub seed: u32,
    /// Final vertical scale applied to the combined unit-space height.
    pub height_scale: f64,

    // ── Macro structure ──────────────────────────────────────────────────
    /// Overall strength of the ridge layer (0 disables mountains).
    pub mountain_intensity: f64,
    /// Region-mask level below which terrain counts as plains (0-1).
    pub flatness_threshold: f64,
    /// How aggressively sub-threshold plains are flattened (0-1).
    pub flatness_smooth: f64,
    /// First power applied to inverted-abs ridge noise; higher = crisper peaks.
    pub ridge_sharpness: f64,
    /// Depth of carved valley depressions.
    pub valley_depth: f64,
    /// Regional highland/lowland offset amplitude.
    pub altitude_variation: f64,
    /// Blend toward squared/cubed height near zero; flattens plains without
    /// touching mountains. 0 disables the shaping entirely.
    pub smooth_lower_planes: f64,

    // ── fBm ──────────────────────────────────────────────────────────────
    /// When false, every synthesis layer degrades to a single raw noise
    /// sample at its layer frequency.
    pub fbm_enabled: bool,
    pub fbm_octaves: u32,
    pub fbm_persistence: f64,
    pub fbm_lacunarity: f64,
    /// Base spatial frequency; all layer frequencies are ratios of this.
    pub fbm_base_frequency: f64,

    // ── Weathering ───────────────────────────────────────────────────────
    /// Multiplicative attenuation of already-elevated base terrain (0-1).
    pub erosion_amount: f64,
    /// Widens erosion bands; exponent becomes `1 + erosion_softness`.
    pub erosion_softness: f64,
    /// Depth of carved river channels (subtractive only).
    pub river_amount: f64,
    /// Channel half-width in folded-noise units.
    pub river_width: f64,
    /// Bank falloff distance in folded-noise units.
    pub river_falloff: f64,

    // ── Mid/fine detail ──────────────────────────────────────────────────
    /// Rolling-hills amplitude; suppressed inside flat zones.
    pub hills_amount: f64,
    /// Absolute spatial frequency of the hills layer.
    pub hills_frequency: f64,
    /// High-frequency fine-detail amplitude; suppressed inside flat zones.
    pub detail_amount: f64,

    // ── Chunking / LOD ───────────────────────────────────────────────────
    /// Side length of one chunk in world units.
    pub chunk_size: f64,
    /// Side length of the whole world extent, centered on the origin.
    pub world_size: f64,
    /// Vertex segments per chunk side at full detail.
    pub segments_per_chunk: u32,
    /// Chunks farther than this (clamp-to-box) are culled when culling is on.
    pub view_distance: f64,
    /// Full detail below this distance.
    pub lod_near: f64,
    /// Half detail below this distance.
    pub lod_medium: f64,
    /// Quarter detail below this distance (and beyond it; quarter is the floor).
    pub lod_far: f64,
    pub enable_view_distance_culling: bool,
    /// When false the whole world is a single chunk.
    pub enable_chunks: bool,
    /// When false every visible chunk gets full segments.
    pub enable_lod: bool,
}

impl Default for TerrainParameters {
    fn default() -> Self {
        Self {
            seed: 42,
            height_scale: 120.0,

            mountain_intensity: 1.0,
            flatness_threshold: 0.45,
            flatness_smooth: 0.55,
            ridge_sharpness: 2.2,
            valley_depth: 0.6,
            altitude_variation: 0.3,
            smooth_lower_planes: 0.4,

            fbm_enabled: true,
            fbm_octaves: 5,
            fbm_persistence: 0.5,
            fbm_lacunarity: 2.0,
            fbm_base_frequency: 0.0005,

            erosion_amount: 0.35,
            erosion_softness: 0.6,
            river_amount: 0.5,
            river_width: 0.08,
            river_falloff: 0.12,

            hills_amount: 0.18,
            hills_frequency: 0.002,
            detail_amount: 0.25,

            chunk_size: 500.0,
            world_size: 5000.0,
            segments_per_chunk: 64,
            view_distance: 1200.0,
            lod_near: 600.0,
            lod_medium: 1200.0,
            lod_far: 2400.0,
            enable_view_distance_culling: true,
            enable_chunks: true,
            enable_lod: true,
        }
    }
}

impl TerrainParameters {
    /// Parse a preset from JSON. Missing fields fall back to defaults, so
    /// partial presets (a few overridden sliders) are valid.
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this preset as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Same preset, different world.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Fresh random seed for "reroll" style workflows.
    pub fn random_seed() -> u32 {
        rand::thread_rng().gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_json() {
        let p = TerrainParameters::default().with_seed(24601);
        let json = p.to_json_string().unwrap();
        let back = TerrainParameters::from_json_str(&json).unwrap();
        assert_eq!(back.seed, 24601);
        assert_eq!(back.fbm_octaves, p.fbm_octaves);
        assert_eq!(back.height_scale, p.height_scale);
    }

    #[test]
    fn partial_preset_fills_defaults() {
        let p = TerrainParameters::from_json_str(r#"{"seed": 7, "mountain_intensity": 2.5}"#)
            .unwrap();
        assert_eq!(p.seed, 7);
        assert_eq!(p.mountain_intensity, 2.5);
        assert_eq!(p.chunk_size, TerrainParameters::default().chunk_size);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TerrainParameters::from_json_str("{not json").is_err());
    }
}
