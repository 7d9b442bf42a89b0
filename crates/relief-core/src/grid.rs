//! Chunk height-grid materialization.
//!
//! The engine itself caches nothing; consumers may cache grids freely because
//! `height` is deterministic. This module just performs the bounded
//! `(segments + 1)²` sweep for one chunk at its assigned LOD.

use crate::chunks::Chunk;
use crate::heightfield::HeightField;

#[cfg(feature = "threading")]
use rayon::prelude::*;

/// A materialized vertex grid for one chunk, row-major with `verts_per_side`
/// vertices on each axis (segments + 1). Rows advance along `z`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    pub verts_per_side: usize,
    pub data: Vec<f64>,
}

impl HeightGrid {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.verts_per_side + col]
    }
}

/// Sample the full vertex grid for `chunk` from `field`.
///
/// Vertex `(row, col)` sits at `(min_x + col·step, min_z + row·step)`, with
/// the last vertex landing exactly on the chunk's max bound so adjacent
/// chunks share edge vertices. Output is identical with and without the
/// `threading` feature; rows are independent height queries.
pub fn sample_grid(field: &HeightField, chunk: &Chunk) -> HeightGrid {
    let segments = chunk.segments.max(1) as usize;
    let verts = segments + 1;
    let step_x = (chunk.max_x - chunk.min_x) / segments as f64;
    let step_z = (chunk.max_z - chunk.min_z) / segments as f64;

    let sample_row = |row: usize| -> Vec<f64> {
        let z = chunk.min_z + row as f64 * step_z;
        (0..verts)
            .map(|col| field.height(chunk.min_x + col as f64 * step_x, z))
            .collect()
    };

    #[cfg(feature = "threading")]
    let rows: Vec<Vec<f64>> = (0..verts).into_par_iter().map(sample_row).collect();
    #[cfg(not(feature = "threading"))]
    let rows: Vec<Vec<f64>> = (0..verts).map(sample_row).collect();

    HeightGrid {
        verts_per_side: verts,
        data: rows.into_iter().flatten().collect(),
    }
}
