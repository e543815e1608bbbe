use crate::Vertex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("Index list of length {len} does not end on a whole triangle")]
    IncompleteTriangle { len: usize },

    #[error("Index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("Vertex {index} has length {length}, expected 1")]
    NotNormalized { index: usize, length: f32 },
}

pub type MeshResult<T> = Result<T, MeshError>;

/// Checks that `indices` forms whole triangles referencing existing vertices.
pub fn validate(vertices: &[Vertex], indices: &[u32]) -> MeshResult<()> {
    if indices.len() % 3 != 0 {
        return Err(MeshError::IncompleteTriangle { len: indices.len() });
    }
    match indices
        .iter()
        .position(|&index| index as usize >= vertices.len())
    {
        Some(position) => Err(MeshError::IndexOutOfRange {
            position,
            index: indices[position],
            vertex_count: vertices.len(),
        }),
        None => Ok(()),
    }
}
