//! Procedural mesh generation.
//!
//! Both surface generators in this crate produce UV-mapped triangle meshes on
//! a `(stacks + 1) x (slices + 1)` rectangular parameter grid and share the
//! triangulation in [`tessellate_grid`]:
//!
//! - `superellipsoid` builds the deformable signed-power surface that is
//!   regenerated every animation tick
//! - `heart` builds the static extruded heart surface, generated once
//! - `outline` samples the 2D heart curve into placement anchors for the
//!   outline instances

pub mod heart;
pub mod outline;
pub mod superellipsoid;

use crate::data_structures::mesh::{MeshData, MeshVertex};

/// Tessellate a parametric surface over a `(stacks + 1) x (slices + 1)` grid.
///
/// `surface(i, j)` maps grid coordinates (row `i` varies the latitude-like
/// parameter, column `j` the longitude-like one) to a positioned, UV-mapped
/// vertex. Vertices are stored row-major, so cell `(i, j)` lands at flat index
/// `i * (slices + 1) + j`; the triangle pass below relies on that layout.
///
/// Each of the `stacks x slices` grid cells is split into two triangles with
/// the winding `(first, second, first + 1)` and `(second, second + 1,
/// first + 1)`. The vertex loops run inclusive to close the seam, while the
/// triangle loops stay exclusive so no index ever reaches past the last
/// vertex row.
///
/// `mesh` is cleared and fully rewritten; `stacks` and `slices` are assumed
/// to be at least 1.
pub fn tessellate_grid<F>(mesh: &mut MeshData, stacks: u32, slices: u32, mut surface: F)
where
    F: FnMut(u32, u32) -> MeshVertex,
{
    mesh.vertices.clear();
    mesh.indices.clear();
    mesh.vertices
        .reserve(((stacks + 1) * (slices + 1)) as usize);
    mesh.indices.reserve((stacks * slices * 6) as usize);

    for i in 0..=stacks {
        for j in 0..=slices {
            mesh.vertices.push(surface(i, j));
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let first = i * (slices + 1) + j;
            let second = first + slices + 1;

            mesh.indices.push(first);
            mesh.indices.push(second);
            mesh.indices.push(first + 1);

            mesh.indices.push(second);
            mesh.indices.push(second + 1);
            mesh.indices.push(first + 1);
        }
    }
}
