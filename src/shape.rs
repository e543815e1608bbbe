use crate::Vertex;

const X: f32 = 0.525731112119133606;
const Z: f32 = 0.850650808352039932;

/// Regular icosahedron inscribed in the unit sphere.
pub struct Icosahedron;

impl Icosahedron {
    pub const VERTICES: [[f32; 3]; 12] = [
        [-X, 0.0, Z],
        [X, 0.0, Z],
        [-X, 0.0, -Z],
        [X, 0.0, -Z],
        [0.0, Z, X],
        [0.0, Z, -X],
        [0.0, -Z, X],
        [0.0, -Z, -X],
        [Z, X, 0.0],
        [-Z, X, 0.0],
        [Z, -X, 0.0],
        [-Z, -X, 0.0],
    ];

    /// Clockwise when seen from outside.
    pub const TRIANGLES: [[u32; 3]; 20] = [
        [0, 4, 1],
        [0, 9, 4],
        [9, 5, 4],
        [4, 5, 8],
        [4, 8, 1],
        [8, 10, 1],
        [8, 3, 10],
        [5, 3, 8],
        [5, 2, 3],
        [2, 7, 3],
        [7, 10, 3],
        [7, 6, 10],
        [7, 11, 6],
        [11, 0, 6],
        [0, 1, 6],
        [6, 1, 10],
        [9, 0, 11],
        [9, 11, 2],
        [9, 2, 5],
        [7, 2, 11],
    ];

    /// Appends the 12 vertices and 20 triangles after any existing content,
    /// with indices shifted by the previous vertex count.
    pub fn append(vertices: &mut Vec<Vertex>, indices: &mut Vec<u32>) {
        let base = vertices.len() as u32;
        indices.extend(
            Self::TRIANGLES
                .iter()
                .flat_map(|tri| tri.iter().map(move |&i| i + base)),
        );
        vertices.extend(Self::VERTICES.iter().map(|&v| Vertex::from(v)));
    }
}
