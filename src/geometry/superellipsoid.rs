//! The deformable superellipsoid surface.
//!
//! A superellipsoid generalizes the sphere/cube/octahedron family through a
//! single shape exponent `s`: `s = 1` is a true sphere, `s` towards 0
//! approaches a cube, larger `s` pinches the surface towards an octahedron
//! and beyond. The demo oscillates `s` every animation tick and regenerates
//! the whole mesh from it.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::data_structures::mesh::{MeshData, MeshVertex};
use crate::geometry::tessellate_grid;

/// Signed power: `sign(base) * |base|^exp`.
///
/// A naive `powf` is NaN for negative bases with fractional exponents; routing
/// the sign around the exponentiation keeps the superellipsoid formulas
/// defined and symmetric for every real `s`.
pub fn spow(base: f32, exp: f32) -> f32 {
    base.abs().powf(exp).copysign(base)
}

/// Generate a closed superellipsoid of radius `r` and shape exponent `s`.
///
/// The surface is parametrized over `phi` in `[-pi/2, pi/2]` (stacks) and
/// `theta` in `[-pi, pi]` (slices):
///
/// ```text
/// x = r * spow(cos(phi), s) * spow(cos(theta), s)
/// y = r * spow(cos(phi), s) * spow(sin(theta), s)
/// z = r * spow(sin(phi), s)
/// ```
///
/// UV coordinates are the normalized grid indices. `mesh` is cleared and
/// fully rewritten on every call; callers wanting a changed shape re-invoke
/// with new parameters and re-upload. `stacks` and `slices` are assumed to be
/// at least 1.
pub fn superellipsoid(mesh: &mut MeshData, r: f32, s: f32, stacks: u32, slices: u32) {
    tessellate_grid(mesh, stacks, slices, |i, j| {
        let phi = -FRAC_PI_2 + i as f32 * PI / stacks as f32;
        let theta = -PI + j as f32 * 2.0 * PI / slices as f32;

        let x = r * spow(phi.cos(), s) * spow(theta.cos(), s);
        let y = r * spow(phi.cos(), s) * spow(theta.sin(), s);
        let z = r * spow(phi.sin(), s);

        MeshVertex {
            position: [x, y, z],
            tex_coords: [j as f32 / slices as f32, i as f32 / stacks as f32],
        }
    });
}
