use heartbloom::data_structures::mesh::MeshData;
use heartbloom::geometry::heart::heart_surface;
use heartbloom::geometry::superellipsoid::{spow, superellipsoid};

fn vertex_distance(position: [f32; 3]) -> f32 {
    (position[0] * position[0] + position[1] * position[1] + position[2] * position[2]).sqrt()
}

#[test]
fn spow_with_exponent_one_is_identity() {
    for x in [-3.5f32, -1.0, -0.25, 0.0, 0.25, 1.0, 42.0] {
        assert_eq!(spow(x, 1.0), x);
    }
}

#[test]
fn spow_preserves_sign_through_fractional_exponents() {
    let cube_root = spow(-8.0, 1.0 / 3.0);
    assert!(
        (cube_root + 2.0).abs() < 1e-5,
        "expected -2, got {cube_root}"
    );
}

#[test]
fn generators_emit_the_expected_grid_counts() {
    let mut mesh = MeshData::new();
    for (stacks, slices) in [(1, 1), (1, 7), (10, 10), (15, 30), (30, 30)] {
        let expected_vertices = ((stacks + 1) * (slices + 1)) as usize;
        let expected_triangles = (stacks * slices * 2) as usize;

        superellipsoid(&mut mesh, 1.0, 0.7, stacks, slices);
        assert_eq!(mesh.vertex_count(), expected_vertices);
        assert_eq!(mesh.triangle_count(), expected_triangles);
        assert_eq!(mesh.indices.len(), expected_triangles * 3);

        heart_surface(&mut mesh, stacks, slices);
        assert_eq!(mesh.vertex_count(), expected_vertices);
        assert_eq!(mesh.triangle_count(), expected_triangles);
    }
}

#[test]
fn every_index_references_an_existing_vertex() {
    let mut mesh = MeshData::new();
    for (stacks, slices) in [(1, 1), (4, 9), (15, 30)] {
        superellipsoid(&mut mesh, 0.5, 2.2, stacks, slices);
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));

        heart_surface(&mut mesh, stacks, slices);
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }
}

#[test]
fn grid_vertices_are_stored_row_major() {
    let (stacks, slices) = (4u32, 6u32);
    let mut mesh = MeshData::new();
    superellipsoid(&mut mesh, 1.0, 1.0, stacks, slices);

    // The UV of each vertex encodes its grid cell, so the flat-index formula
    // is directly observable.
    for i in 0..=stacks {
        for j in 0..=slices {
            let vertex = mesh.vertices[(i * (slices + 1) + j) as usize];
            assert!((vertex.tex_coords[0] - j as f32 / slices as f32).abs() < 1e-6);
            assert!((vertex.tex_coords[1] - i as f32 / stacks as f32).abs() < 1e-6);
        }
    }
}

#[test]
fn superellipsoid_with_unit_exponent_is_a_sphere() {
    let radius = 0.75f32;
    let mut mesh = MeshData::new();
    superellipsoid(&mut mesh, radius, 1.0, 12, 24);

    for vertex in &mesh.vertices {
        let distance = vertex_distance(vertex.position);
        assert!(
            (distance - radius).abs() < 1e-4,
            "vertex {:?} lies at distance {distance}, expected {radius}",
            vertex.position
        );
    }
}

#[test]
fn heart_taper_collapses_at_the_extrusion_ends() {
    let (stacks, slices) = (30u32, 30u32);
    let mut mesh = MeshData::new();
    heart_surface(&mut mesh, stacks, slices);

    for j in 0..=slices {
        let bottom = mesh.vertices[j as usize];
        let top = mesh.vertices[(stacks * (slices + 1) + j) as usize];
        for vertex in [bottom, top] {
            assert!(vertex.position[0].abs() < 1e-5);
            assert!(vertex.position[1].abs() < 1e-5);
        }
    }
}

#[test]
fn startup_superellipsoid_matches_the_expected_buffer_sizes() {
    let mut mesh = MeshData::new();
    superellipsoid(&mut mesh, 0.1, 1.0, 10, 10);

    assert_eq!(mesh.vertex_count(), 121);
    assert_eq!(mesh.triangle_count(), 200);
    assert_eq!(mesh.indices.len(), 600);
    assert!(mesh.indices.iter().all(|&i| i < 121));
}
