//! CPU- and GPU-side mesh types.
//!
//! A [`MeshData`] is the plain vertex/index representation the procedural
//! generators write into; a [`GpuMesh`] is the uploaded counterpart the render
//! pass draws from. The [`DrawMesh`] trait extends `wgpu::RenderPass` with a
//! convenience draw call for instanced meshes.

use wgpu::util::DeviceExt;

/// Describes the GPU memory layout of a vertex buffer entry.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// A single mesh vertex: 3D position plus texture coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex for MeshVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// CPU-side mesh storage written by the procedural generators.
///
/// Indices always come in complete triangles and every index is smaller than
/// the vertex count. Generators clear and fully rewrite both vectors, so a
/// `MeshData` can be reused as scratch across regenerations without
/// reallocating.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// A mesh uploaded to the GPU: one vertex buffer, one index buffer.
#[derive(Debug)]
pub struct GpuMesh {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}

impl GpuMesh {
    /// Upload a mesh that never changes after creation.
    pub fn new_static(device: &wgpu::Device, name: &str, mesh: &MeshData) -> Self {
        Self::new(device, name, mesh, wgpu::BufferUsages::VERTEX)
    }

    /// Upload a mesh whose vertices will be rewritten via [`Self::write_vertices`].
    ///
    /// Only the vertex buffer gets the `COPY_DST` usage; the triangulation of a
    /// fixed-resolution grid never changes, so the index buffer stays static.
    pub fn new_dynamic(device: &wgpu::Device, name: &str, mesh: &MeshData) -> Self {
        Self::new(
            device,
            name,
            mesh,
            wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        )
    }

    fn new(
        device: &wgpu::Device,
        name: &str,
        mesh: &MeshData,
        vertex_usage: wgpu::BufferUsages,
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{name} Vertex Buffer")),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: vertex_usage,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{name} Index Buffer")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            name: name.to_string(),
            vertex_buffer,
            index_buffer,
            num_elements: mesh.indices.len() as u32,
        }
    }

    /// Rewrite the vertex buffer with freshly generated data.
    ///
    /// The mesh must have been created with [`Self::new_dynamic`] and the new
    /// data must have the same vertex count as the original upload.
    pub fn write_vertices(&self, queue: &wgpu::Queue, mesh: &MeshData) {
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&mesh.vertices));
    }
}

/// Instanced draw calls for [`GpuMesh`], in the style of a render pass extension.
pub trait DrawMesh<'a> {
    fn draw_mesh_instanced(
        &mut self,
        mesh: &'a GpuMesh,
        instances: std::ops::Range<u32>,
        material_bind_group: &'a wgpu::BindGroup,
        camera_bind_group: &'a wgpu::BindGroup,
    );
}

impl<'a, 'b> DrawMesh<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh_instanced(
        &mut self,
        mesh: &'b GpuMesh,
        instances: std::ops::Range<u32>,
        material_bind_group: &'b wgpu::BindGroup,
        camera_bind_group: &'b wgpu::BindGroup,
    ) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.set_bind_group(0, material_bind_group, &[]);
        self.set_bind_group(1, camera_bind_group, &[]);
        self.draw_indexed(0..mesh.num_elements, 0, instances);
    }
}
