use crate::{Mesh, Vertex, Volume};
use std::cell::OnceCell;

#[derive(Clone, Debug)]
pub struct SphereParameters {
    pub subdivisions: u32,
    pub color: Vertex,
}

impl Default for SphereParameters {
    fn default() -> Self {
        Self {
            subdivisions: 2,
            color: Vertex::new(1.0, 1.0, 0.0),
        }
    }
}

/// Geodesic sphere generated on first access and kept afterwards.
pub struct Sphere {
    params: SphereParameters,
    colors: [Vertex; 1],
    mesh: OnceCell<Mesh>,
}

impl Sphere {
    pub fn new(params: SphereParameters) -> Self {
        Self {
            colors: [params.color],
            params,
            mesh: OnceCell::new(),
        }
    }

    pub fn parameters(&self) -> &SphereParameters {
        &self.params
    }

    pub fn is_generated(&self) -> bool {
        self.mesh.get().is_some()
    }

    pub fn mesh(&self) -> &Mesh {
        self.mesh.get_or_init(|| {
            let mesh = Mesh::geosphere(self.params.subdivisions);
            log::info!(
                "Generated sphere at level {}: {} vertices, {} triangles",
                self.params.subdivisions,
                mesh.vertex_count(),
                mesh.triangle_count(),
            );
            mesh
        })
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(SphereParameters::default())
    }
}

impl Volume for Sphere {
    fn vertices(&self) -> &[Vertex] {
        &self.mesh().vertices
    }

    fn indices(&self, _offset: u32) -> &[u32] {
        &self.mesh().indices
    }

    fn color_data(&self) -> &[Vertex] {
        &self.colors
    }
}
