//! The render driver: owns all scene state and the per-tick regeneration loop.

use cgmath::{Quaternion, Rad, Rotation3, Vector3};
use instant::Duration;
use wgpu::util::DeviceExt;

use crate::{
    animation::ShapeOscillator,
    context::Context,
    data_structures::{
        instance::{Instance, KIND_HEART, KIND_OUTLINE},
        mesh::{DrawMesh, GpuMesh, MeshData},
        texture::Texture,
    },
    geometry::{heart::heart_surface, outline::heart_outline, superellipsoid::superellipsoid},
    pipelines::textured::material_layout,
    resources,
};

/// Grid resolution and radius of the animated superellipsoid. Fixed, so the
/// dynamic vertex buffer keeps a constant size across regenerations.
const SHAPE_STACKS: u32 = 15;
const SHAPE_SLICES: u32 = 30;
const SHAPE_RADIUS: f32 = 0.08;

/// Grid resolution of the static heart surface.
const HEART_STACKS: u32 = 30;
const HEART_SLICES: u32 = 30;

/// Texture applied to everything; missing on disk is fine, see [`Scene::new`].
const DIFFUSE_TEXTURE: &str = "textures/red.png";

/// The whole renderable scene.
///
/// One dynamic mesh (the morphing superellipsoid, drawn once per outline
/// anchor via instancing), one static mesh (the heart, drawn once with a
/// rotation driven by absolute time), the oscillator and the material.
pub struct Scene {
    shape: MeshData,
    shape_mesh: GpuMesh,
    heart_mesh: GpuMesh,
    outline_count: u32,
    outline_buffer: wgpu::Buffer,
    heart_instance: Instance,
    heart_buffer: wgpu::Buffer,
    oscillator: ShapeOscillator,
    material_bind_group: wgpu::BindGroup,
}

impl Scene {
    pub async fn new(ctx: &Context) -> Self {
        // The deformable mesh starts out at the oscillator's initial exponent
        // and is rewritten in place on every animation tick.
        let oscillator = ShapeOscillator::new();
        let mut shape = MeshData::new();
        superellipsoid(
            &mut shape,
            SHAPE_RADIUS,
            oscillator.exponent(),
            SHAPE_STACKS,
            SHAPE_SLICES,
        );
        let shape_mesh = GpuMesh::new_dynamic(&ctx.device, "superellipsoid", &shape);

        let mut heart = MeshData::new();
        heart_surface(&mut heart, HEART_STACKS, HEART_SLICES);
        let heart_mesh = GpuMesh::new_static(&ctx.device, "heart", &heart);

        // One instance per outline anchor; positions never change after this.
        let outline_instances: Vec<_> = heart_outline()
            .into_iter()
            .map(|position| {
                let mut instance = Instance::new(KIND_OUTLINE);
                instance.position = position;
                instance
            })
            .collect();
        let outline_data: Vec<_> = outline_instances.iter().map(Instance::to_raw).collect();
        let outline_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Outline Instance Buffer"),
                contents: bytemuck::cast_slice(&outline_data),
                usage: wgpu::BufferUsages::VERTEX,
            });
        log::info!("placed {} outline instances", outline_instances.len());

        let heart_instance = Instance::new(KIND_HEART);
        let heart_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Heart Instance Buffer"),
                contents: bytemuck::cast_slice(&[heart_instance.to_raw()]),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            });

        let diffuse_texture =
            match resources::load_texture(DIFFUSE_TEXTURE, &ctx.device, &ctx.queue).await {
                Ok(texture) => texture,
                Err(e) => {
                    log::warn!(
                        "could not load assets/{DIFFUSE_TEXTURE} ({e}), using a solid red fallback"
                    );
                    Texture::solid_color([188, 39, 50, 255], 2, 2, &ctx.device, &ctx.queue)
                }
            };
        let sampler = diffuse_texture
            .sampler
            .clone()
            .unwrap_or_else(|| crate::data_structures::texture::create_default_sampler(&ctx.device));
        let material_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &material_layout(&ctx.device),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&diffuse_texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
            label: Some("material_bind_group"),
        });

        Self {
            shape,
            shape_mesh,
            heart_mesh,
            outline_count: outline_instances.len() as u32,
            outline_buffer,
            heart_instance,
            heart_buffer,
            oscillator,
            material_bind_group,
        }
    }

    /// Advance the animation by one frame.
    ///
    /// `dt` feeds the oscillator, `elapsed` (seconds since startup) drives the
    /// heart's continuous spin about the y axis. The deformable mesh is only
    /// regenerated and re-uploaded on ticks where the exponent changed; the
    /// shape is a pure function of the exponent, so skipping unchanged frames
    /// is not observable.
    pub fn update(&mut self, ctx: &Context, dt: Duration, elapsed: f32) {
        if let Some(exponent) = self.oscillator.advance(dt) {
            superellipsoid(
                &mut self.shape,
                SHAPE_RADIUS,
                exponent,
                SHAPE_STACKS,
                SHAPE_SLICES,
            );
            self.shape_mesh.write_vertices(&ctx.queue, &self.shape);
        }

        self.heart_instance.rotation = Quaternion::from_axis_angle(Vector3::unit_y(), Rad(elapsed));
        ctx.queue.write_buffer(
            &self.heart_buffer,
            0,
            bytemuck::cast_slice(&[self.heart_instance.to_raw()]),
        );
    }

    /// Issue the draw calls for the outline instances and the heart.
    pub fn draw<'a>(&'a self, ctx: &'a Context, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&ctx.pipeline);

        render_pass.set_vertex_buffer(1, self.outline_buffer.slice(..));
        render_pass.draw_mesh_instanced(
            &self.shape_mesh,
            0..self.outline_count,
            &self.material_bind_group,
            &ctx.camera.bind_group,
        );

        render_pass.set_vertex_buffer(1, self.heart_buffer.slice(..));
        render_pass.draw_mesh_instanced(
            &self.heart_mesh,
            0..1,
            &self.material_bind_group,
            &ctx.camera.bind_group,
        );
    }
}
