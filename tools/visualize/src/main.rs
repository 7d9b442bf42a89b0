//! Diagnostic visualizer — writes PNG debug images to data/debug/.
//! Not part of the main pipeline; no tests.

use std::fs;
use std::path::Path;

use relief_core::{ChunkManager, HeightField, TerrainParameters};

const RESOLUTION: u32 = 512;

/// Height → grayscale over the observed range of the rendered window.
fn gray(h: f64, min: f64, max: f64) -> u8 {
    if max <= min {
        return 0;
    }
    (((h - min) / (max - min)).clamp(0.0, 1.0) * 255.0) as u8
}

/// LOD segments → distinct gray level (full = light, quarter = dark).
fn lod_gray(segments: u32, full: u32) -> u8 {
    if segments >= full {
        230
    } else if segments >= full / 2 {
        150
    } else {
        70
    }
}

fn main() {
    let params = TerrainParameters { seed: 42, ..TerrainParameters::default() };

    let out_dir = Path::new("data/debug");
    fs::create_dir_all(out_dir).expect("cannot create data/debug/");

    // ── 1. heightmap.png ─────────────────────────────────────────────────
    println!("Sampling {RESOLUTION}×{RESOLUTION} height window…");
    let field = HeightField::new(params.clone());
    let window = params.world_size;
    let half = window * 0.5;
    let step = window / (RESOLUTION - 1) as f64;

    let mut heights = vec![0.0f64; (RESOLUTION * RESOLUTION) as usize];
    for r in 0..RESOLUTION {
        let z = -half + r as f64 * step;
        for c in 0..RESOLUTION {
            heights[(r * RESOLUTION + c) as usize] =
                field.height(-half + c as f64 * step, z);
        }
    }
    let min = heights.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = heights.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut img = image::GrayImage::new(RESOLUTION, RESOLUTION);
    for r in 0..RESOLUTION {
        for c in 0..RESOLUTION {
            let h = heights[(r * RESOLUTION + c) as usize];
            img.put_pixel(c, r, image::Luma([gray(h, min, max)]));
        }
    }
    img.save(out_dir.join("heightmap.png")).expect("cannot write heightmap.png");
    println!("heightmap.png: range [{min:.1}, {max:.1}]");

    // ── 2. visible_set.png ───────────────────────────────────────────────
    // Chunk grid as seen from the origin: gray level encodes the LOD tier,
    // black marks culled chunks.
    println!("Rendering visible set from origin…");
    let mut mgr = ChunkManager::new(params.clone());
    let set = mgr.tick(0.0, 0.0);

    let n = mgr.chunks_per_side();
    let cell: u32 = 48;
    let side = cell * n as u32;
    let mut lod_img = image::GrayImage::new(side, side);
    for i in 0..n {
        for j in 0..n {
            let coord = relief_core::ChunkCoord::new(i - n / 2, j - n / 2);
            let level = match set.get(coord) {
                Some(chunk) => lod_gray(chunk.segments, params.segments_per_chunk),
                None => 0,
            };
            for px in 0..cell {
                for pz in 0..cell {
                    lod_img.put_pixel(
                        i as u32 * cell + px,
                        j as u32 * cell + pz,
                        image::Luma([level]),
                    );
                }
            }
        }
    }
    lod_img.save(out_dir.join("visible_set.png")).expect("cannot write visible_set.png");
    println!("visible_set.png: {} of {} chunks visible", set.len(), n * n);
}
