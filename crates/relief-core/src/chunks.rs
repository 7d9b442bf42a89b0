//! Chunk partitioning, visibility, and level-of-detail scheduling.
//!
//! The world extent is a square grid of fixed-size chunks centered on the
//! origin. Each scheduling tick takes one viewer position and produces the
//! set of chunks a consumer should have materialized, each with its segment
//! count (LOD) and clamp-to-box distance. The set is replaced wholesale —
//! readers holding the previous `Arc` keep a consistent snapshot — and only
//! when membership or some chunk's LOD actually changed, so a stationary
//! viewer causes zero downstream mesh churn.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::params::TerrainParameters;

/// Upper bound on chunks per world side; a scheduling tick sweeps at most
/// this many candidates squared.
pub const MAX_CHUNKS_PER_SIDE: i32 = 1024;

/// Integer grid coordinates of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    pub fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }
}

/// Consumer-facing materialization state, tracked across ticks via
/// [`ChunkManager::acknowledge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializationState {
    /// Never acknowledged at any LOD; the consumer should build it.
    Pending,
    /// Acknowledged at the currently assigned LOD; nothing to do.
    Materialized,
    /// Acknowledged at a different LOD; the consumer should rebuild it.
    Stale,
}

/// One visible chunk: world-space bounds, viewer distance at the last
/// evaluation, and the assigned vertex segments per side.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub coord: ChunkCoord,
    pub min_x: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_z: f64,
    /// Clamp-to-box distance from the viewer at the last tick.
    pub distance: f64,
    /// Vertex segments per side at the assigned LOD.
    pub segments: u32,
    pub state: MaterializationState,
}

impl Chunk {
    pub fn size(&self) -> f64 {
        self.max_x - self.min_x
    }
}

/// Minimum Euclidean distance from a point to an axis-aligned box (0 inside).
/// Box distance, not center distance: a viewer standing just outside a huge
/// chunk is near it regardless of where its center is.
pub fn clamp_box_distance(
    px: f64,
    pz: f64,
    min_x: f64,
    min_z: f64,
    max_x: f64,
    max_z: f64,
) -> f64 {
    let dx = (min_x - px).max(px - max_x).max(0.0);
    let dz = (min_z - pz).max(pz - max_z).max(0.0);
    (dx * dx + dz * dz).sqrt()
}

/// The visible chunks of one scheduling tick, keyed by coordinate.
/// Never mutated after publication; `ChunkManager` swaps in a fresh value
/// behind `Arc` when the set actually changes.
#[derive(Debug, Default)]
pub struct VisibleSet {
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl VisibleSet {
    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }
}

/// Frame-driven visibility and LOD scheduler.
pub struct ChunkManager {
    params: TerrainParameters,
    current: Arc<VisibleSet>,
    /// Chunk → segments it was last acknowledged (materialized) at.
    acknowledged: HashMap<ChunkCoord, u32>,
}

impl ChunkManager {
    pub fn new(params: TerrainParameters) -> Self {
        Self {
            params,
            current: Arc::new(VisibleSet::default()),
            acknowledged: HashMap::new(),
        }
    }

    pub fn params(&self) -> &TerrainParameters {
        &self.params
    }

    /// The visible set from the most recent tick.
    pub fn visible(&self) -> Arc<VisibleSet> {
        Arc::clone(&self.current)
    }

    /// Chunks per world side. One when chunking is disabled.
    ///
    /// Capped at [`MAX_CHUNKS_PER_SIDE`]: the engine does not validate
    /// configuration, and a zero or tiny `chunk_size` would otherwise turn
    /// the per-tick sweep into billions of candidates. The `as i32` cast
    /// saturates, so a non-finite ratio lands on the cap (or on 1 for NaN).
    pub fn chunks_per_side(&self) -> i32 {
        if !self.params.enable_chunks {
            return 1;
        }
        let ratio = self.params.world_size / self.params.chunk_size;
        (ratio.round() as i32).clamp(1, MAX_CHUNKS_PER_SIDE)
    }

    /// Side length of one chunk; the whole world when chunking is disabled.
    fn effective_chunk_size(&self) -> f64 {
        if self.params.enable_chunks {
            self.params.chunk_size
        } else {
            self.params.world_size
        }
    }

    /// Segment count for a chunk at `distance`: a step function over the
    /// `lod_near` / `lod_medium` / `lod_far` tier table, monotone
    /// non-increasing, taking only the full/half/quarter values (quarter is
    /// the floor beyond `lod_far`).
    pub fn lod_segments(&self, distance: f64) -> u32 {
        let full = self.params.segments_per_chunk.max(1);
        if !self.params.enable_lod {
            return full;
        }
        let tiers = [
            (self.params.lod_near, 1u32),
            (self.params.lod_medium, 2),
            (self.params.lod_far, 4),
        ];
        for (limit, divisor) in tiers {
            if distance < limit {
                return (full / divisor).max(1);
            }
        }
        (full / 4).max(1)
    }

    /// Record that the consumer has materialized `coord` at its currently
    /// assigned LOD. Future ticks report it `Materialized` until its LOD
    /// changes (then `Stale`).
    pub fn acknowledge(&mut self, coord: ChunkCoord) {
        if let Some(chunk) = self.current.get(coord) {
            self.acknowledged.insert(coord, chunk.segments);
        }
    }

    /// Run one scheduling tick for the given viewer position.
    ///
    /// Returns the new visible set. When neither membership nor any chunk's
    /// LOD changed since the previous tick, the returned `Arc` is
    /// pointer-identical to the previous one.
    pub fn tick(&mut self, viewer_x: f64, viewer_z: f64) -> Arc<VisibleSet> {
        let n = self.chunks_per_side();
        let size = self.effective_chunk_size();
        let half_world = size * n as f64 * 0.5;

        // Every candidate is independent; this pass is trivially
        // parallelizable, but world grids are small enough that a serial
        // sweep wins.
        let mut next: HashMap<ChunkCoord, Chunk> = HashMap::new();
        for i in 0..n {
            let min_x = i as f64 * size - half_world;
            for j in 0..n {
                let min_z = j as f64 * size - half_world;
                let (max_x, max_z) = (min_x + size, min_z + size);

                let distance =
                    clamp_box_distance(viewer_x, viewer_z, min_x, min_z, max_x, max_z);
                if self.params.enable_view_distance_culling
                    && distance >= self.params.view_distance
                {
                    continue;
                }

                let coord = ChunkCoord::new(i - n / 2, j - n / 2);
                let segments = self.lod_segments(distance);
                let state = match self.acknowledged.get(&coord) {
                    Some(&acked) if acked == segments => MaterializationState::Materialized,
                    Some(_) => MaterializationState::Stale,
                    None => MaterializationState::Pending,
                };
                next.insert(
                    coord,
                    Chunk { coord, min_x, min_z, max_x, max_z, distance, segments, state },
                );
            }
        }

        // Debounce: membership, LODs, and states unchanged → keep the
        // published set (state can change without movement, via acknowledge).
        let unchanged = next.len() == self.current.len()
            && next.iter().all(|(coord, chunk)| {
                self.current.get(*coord).is_some_and(|prev| {
                    prev.segments == chunk.segments && prev.state == chunk.state
                })
            });
        if !unchanged {
            self.current = Arc::new(VisibleSet { chunks: next });
        }
        Arc::clone(&self.current)
    }
}
