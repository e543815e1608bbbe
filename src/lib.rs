pub mod error;
mod mesh;
mod shape;
mod sphere;
mod subdivide;
mod volume;

pub use error::{validate, MeshError, MeshResult};
pub use mesh::Mesh;
pub use shape::Icosahedron;
pub use sphere::{Sphere, SphereParameters};
pub use subdivide::{subdivide, EdgeKey};
pub use volume::Volume;

pub type Vertex = glam::Vec3;

/// Tolerance for unit-length checks on generated spheres.
pub const UNIT_EPSILON: f32 = 1e-5;
