use geosphere::{subdivide, EdgeKey, Icosahedron, Vertex};
use std::collections::{HashMap, HashSet};

fn icosahedron() -> (Vec<Vertex>, Vec<u32>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    Icosahedron::append(&mut vertices, &mut indices);
    (vertices, indices)
}

#[test]
fn one_pass_quadruples_triangles() {
    let (mut vertices, mut indices) = icosahedron();
    subdivide(&mut vertices, &mut indices, true);

    assert_eq!(indices.len(), 240);
    assert!(vertices.len() <= 12 + 30);
    assert_eq!(vertices.len(), 42);
    assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
}

#[test]
fn two_passes_give_320_triangles() {
    let (mut vertices, mut indices) = icosahedron();
    subdivide(&mut vertices, &mut indices, true);
    subdivide(&mut vertices, &mut indices, true);

    assert_eq!(indices.len(), 960);
    assert_eq!(vertices.len(), 42 + 120);
}

#[test]
fn shared_edges_get_one_midpoint() {
    let (mut vertices, mut indices) = icosahedron();
    let source = indices.clone();
    subdivide(&mut vertices, &mut indices, true);

    let mut midpoints: HashMap<EdgeKey, HashSet<u32>> = HashMap::new();
    for (tri, refined) in source.chunks_exact(3).zip(indices.chunks_exact(12)) {
        let (i0, i1, i2) = (tri[0], tri[1], tri[2]);
        // corner triangle (i0, m01, m02) and corner triangle (i1, m12, m01)
        let (m01, m02, m12) = (refined[1], refined[2], refined[4]);
        assert_eq!(&refined[..3], &[i0, m01, m02]);
        assert_eq!(&refined[3..6], &[i1, m12, m01]);
        assert_eq!(&refined[6..9], &[i2, m02, m12]);
        assert_eq!(&refined[9..], &[m02, m01, m12]);

        for (a, b, m) in [(i0, i1, m01), (i1, i2, m12), (i2, i0, m02)] {
            let expected = (vertices[a as usize] + vertices[b as usize]) / 2.0;
            assert_eq!(vertices[m as usize], expected);
            midpoints.entry(EdgeKey::new(a, b)).or_default().insert(m);
        }
    }

    assert_eq!(midpoints.len(), 30);
    assert!(midpoints.values().all(|set| set.len() == 1));
}

#[test]
fn keeping_source_triangles_prepends_them() {
    let (mut vertices, mut indices) = icosahedron();
    let source = indices.clone();
    subdivide(&mut vertices, &mut indices, false);

    assert_eq!(indices.len(), 60 + 240);
    assert_eq!(&indices[..60], source.as_slice());
    assert_eq!(vertices.len(), 42);
}

#[test]
fn trailing_partial_triangle_is_ignored() {
    let mut vertices = vec![Vertex::ZERO, Vertex::X, Vertex::Y];
    let mut indices = vec![0, 1, 2, 0, 1];
    subdivide(&mut vertices, &mut indices, true);

    assert_eq!(indices.len(), 12);
    assert_eq!(vertices.len(), 6);
}

#[test]
fn existing_vertex_at_midpoint_is_reused() {
    let mut vertices = vec![
        Vertex::ZERO,
        Vertex::new(2.0, 0.0, 0.0),
        Vertex::new(0.0, 2.0, 0.0),
        Vertex::new(1.0, 0.0, 0.0),
    ];
    let mut indices = vec![0, 1, 2];
    subdivide(&mut vertices, &mut indices, true);

    assert_eq!(vertices.len(), 6);
    assert_eq!(indices[1], 3);
}

#[test]
fn empty_input_stays_empty() {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    subdivide(&mut vertices, &mut indices, true);
    assert!(vertices.is_empty());
    assert!(indices.is_empty());
}

#[test]
fn index_list_is_updated_in_place() {
    let (mut vertices, mut indices) = icosahedron();
    indices.reserve(1000);
    let ptr = indices.as_ptr();
    subdivide(&mut vertices, &mut indices, true);
    assert_eq!(indices.as_ptr(), ptr);
}
