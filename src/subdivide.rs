//! Midpoint subdivision of triangle meshes.
//!
//! ```text
//!       i0
//!      /  \
//!    m02--m01
//!    / \  / \
//!  i2--m12---i1
//! ```

use crate::Vertex;
use std::collections::HashMap;

/// Undirected edge between two vertices, stored as `(min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub lo: u32,
    pub hi: u32,
}

impl EdgeKey {
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }
}

#[derive(Default)]
struct Stats {
    created: usize,
    cached: usize,
    coincident: usize,
}

/// Edge midpoints created during a single subdivision pass.
#[derive(Default)]
struct MidpointCache {
    indices: HashMap<EdgeKey, u32>,
    stats: Stats,
}

impl MidpointCache {
    fn midpoint(&mut self, vertices: &mut Vec<Vertex>, a: u32, b: u32) -> u32 {
        let key = EdgeKey::new(a, b);
        if let Some(&index) = self.indices.get(&key) {
            self.stats.cached += 1;
            return index;
        }

        let mid = (vertices[a as usize] + vertices[b as usize]) / 2.0;
        // A vertex already sitting exactly at the midpoint is reused but not
        // recorded, so the next lookup of this edge scans again.
        if let Some(existing) = vertices.iter().position(|&v| v == mid) {
            self.stats.coincident += 1;
            return existing as u32;
        }

        let index = vertices.len() as u32;
        vertices.push(mid);
        self.indices.insert(key, index);
        self.stats.created += 1;
        index
    }
}

/// Splits every triangle into four by inserting edge midpoints.
///
/// Midpoints are shared between triangles that share an edge, so the
/// refined mesh has no seams. With `remove_source_triangles` unset the
/// original triangles are kept in front of the new ones. A trailing partial
/// triangle is ignored.
pub fn subdivide(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    remove_source_triangles: bool,
) {
    let mut cache = MidpointCache::default();
    let factor = if remove_source_triangles { 4 } else { 5 };
    let mut refined = Vec::with_capacity(indices.len() * factor);
    if !remove_source_triangles {
        refined.extend_from_slice(indices);
    }

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0], tri[1], tri[2]);
        let m01 = cache.midpoint(vertices, i0, i1);
        let m12 = cache.midpoint(vertices, i1, i2);
        let m02 = cache.midpoint(vertices, i2, i0);
        refined.extend_from_slice(&[
            i0, m01, m02, //
            i1, m12, m01, //
            i2, m02, m12, //
            m02, m01, m12,
        ]);
    }

    log::debug!(
        "Subdivided {} triangles into {}: {} new midpoints, {} cache hits, {} coincident",
        indices.len() / 3,
        refined.len() / 3,
        cache.stats.created,
        cache.stats.cached,
        cache.stats.coincident,
    );

    indices.clear();
    indices.extend_from_slice(&refined);
}
