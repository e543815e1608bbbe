use crate::Vertex;

/// Geometry producer handed to a renderer.
pub trait Volume {
    fn vertices(&self) -> &[Vertex];
    /// `offset` is the position of this volume's first vertex in a shared
    /// vertex buffer. Producers may ignore it.
    fn indices(&self, offset: u32) -> &[u32];
    fn color_data(&self) -> &[Vertex];

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
    fn index_count(&self) -> usize {
        self.indices(0).len()
    }
    fn color_data_count(&self) -> usize {
        self.color_data().len()
    }
}
