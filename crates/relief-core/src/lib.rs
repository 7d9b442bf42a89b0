//! Deterministic procedural terrain: height-field synthesis and chunk/LOD
//! scheduling.
//!
//! The engine is pure arithmetic. A [`HeightField`] is built once from a
//! [`TerrainParameters`] value and answers `height(x, z)` queries with no
//! hidden state, so the same coordinate always yields the same elevation —
//! from any thread, in any order. A [`ChunkManager`] turns a viewer position
//! into the set of world chunks worth materializing this frame, with a
//! distance-stepped level of detail per chunk.
//!
//! Mesh building, shading, colliders, and object placement are consumers of
//! these two surfaces, not part of this crate.

pub mod biome;
pub mod chunks;
pub mod erosion;
pub mod grid;
pub mod heightfield;
pub mod math;
pub mod noise;
pub mod params;
pub mod ridge;
pub mod river;

pub use crate::chunks::{Chunk, ChunkCoord, ChunkManager, MaterializationState, VisibleSet};
pub use crate::grid::{sample_grid, HeightGrid};
pub use crate::heightfield::HeightField;
pub use crate::noise::{fbm::fbm, NoiseField};
pub use crate::params::{ParamsError, TerrainParameters};
