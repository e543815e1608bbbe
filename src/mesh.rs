use crate::{
    error::{self, MeshError, MeshResult},
    Icosahedron, Vertex,
};

/// Indexed triangle mesh: a vertex buffer plus a flat list of index triples.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn icosahedron() -> Self {
        let mut mesh = Self::default();
        Icosahedron::append(&mut mesh.vertices, &mut mesh.indices);
        mesh
    }

    /// Icosahedron refined `subdivisions` times and projected onto the unit
    /// sphere. Projection happens once, after the last pass.
    pub fn geosphere(subdivisions: u32) -> Self {
        let mut mesh = Self::icosahedron();
        for _ in 0..subdivisions {
            mesh.subdivide(true);
        }
        mesh.normalize();
        mesh
    }

    pub fn subdivide(&mut self, remove_source_triangles: bool) {
        crate::subdivide(&mut self.vertices, &mut self.indices, remove_source_triangles);
    }

    /// Moves every vertex onto the unit sphere.
    pub fn normalize(&mut self) {
        for v in self.vertices.iter_mut() {
            *v = v.normalize();
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangle(&self, index: usize) -> [u32; 3] {
        let t = &self.indices[index * 3..index * 3 + 3];
        [t[0], t[1], t[2]]
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn validate(&self) -> MeshResult<()> {
        error::validate(&self.vertices, &self.indices)
    }

    pub fn check_unit_sphere(&self, tolerance: f32) -> MeshResult<()> {
        for (index, v) in self.vertices.iter().enumerate() {
            let length = v.length();
            if (length - 1.0).abs() > tolerance {
                return Err(MeshError::NotNormalized { index, length });
            }
        }
        Ok(())
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Vertex positions in any math library that speaks `mint`.
    pub fn positions<T: From<mint::Vector3<f32>>>(&self) -> Vec<T> {
        self.vertices
            .iter()
            .map(|&v| T::from(mint::Vector3::from(v)))
            .collect()
    }
}
