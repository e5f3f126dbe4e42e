//! The static 3D heart surface.

use std::f32::consts::PI;

use cgmath::Vector2;

use crate::data_structures::mesh::{MeshData, MeshVertex};
use crate::geometry::tessellate_grid;

/// In-plane scale applied to the raw heart curve, which spans roughly
/// [-16, 16] x [-17, 13] units.
const PLANE_SCALE: f32 = 0.04;
/// Scale of the extrusion axis.
const DEPTH_SCALE: f32 = 0.8;

/// The classic 2D parametric heart curve, unscaled.
///
/// `t` in `[0, 2pi)` walks the curve counter-clockwise starting at the bottom
/// tip; `t = pi` is the dip at the top centre.
pub fn heart_curve(t: f32) -> Vector2<f32> {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    Vector2::new(x, y)
}

/// Generate the heart surface by extruding [`heart_curve`] along z.
///
/// The extrusion axis runs over z in `[-1, 1]` (stacks); at each station the
/// in-plane curve (slices) is scaled by the rounded profile `sqrt(1 - z^2)`,
/// so the solid narrows to a point at both ends instead of forming a straight
/// prism. UV coordinates are the normalized grid indices.
///
/// `mesh` is cleared and fully rewritten; in this demo the heart is never
/// deformed, so the generator runs exactly once at startup. `stacks` and
/// `slices` are assumed to be at least 1.
pub fn heart_surface(mesh: &mut MeshData, stacks: u32, slices: u32) {
    tessellate_grid(mesh, stacks, slices, |i, j| {
        let v = i as f32 / stacks as f32;
        // -1 to 1
        let z = (v - 0.5) * 2.0;

        // Smooth rounded profile instead of linear
        let depth_scale = (1.0 - z * z).max(0.0).sqrt();

        let u = j as f32 / slices as f32 * 2.0 * PI;
        let plane = heart_curve(u);

        MeshVertex {
            position: [
                plane.x * PLANE_SCALE * depth_scale,
                plane.y * PLANE_SCALE * depth_scale,
                z * DEPTH_SCALE,
            ],
            tex_coords: [j as f32 / slices as f32, v],
        }
    });
}
