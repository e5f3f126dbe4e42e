//! heartbloom
//!
//! A small instanced wgpu demo: a spinning procedural heart surface framed by
//! animated superellipsoids placed along a heart-shaped outline curve. The
//! interesting part is procedural: both surfaces are generated on the CPU from
//! parametric formulas, and the superellipsoid is regenerated and re-uploaded
//! while its shape exponent oscillates.
//!
//! High-level modules
//! - `animation`: the two-state oscillator driving the shape exponent
//! - `app`: winit event loop, frame timing and the render pass
//! - `camera`: free-fly camera, controller and uniforms for view/projection
//! - `context`: central GPU and window context that owns device/queue/pipeline
//! - `data_structures`: data models (meshes, instances, textures)
//! - `geometry`: the procedural generators and the outline sampler
//! - `pipelines`: the textured render pipeline and its shader
//! - `resources`: helpers to load texture files
//! - `scene`: the render driver owning all scene state
//!

pub mod animation;
pub mod app;
pub mod camera;
pub mod context;
pub mod data_structures;
pub mod geometry;
pub mod pipelines;
pub mod resources;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use wgpu::*;
pub use winit::event::DeviceEvent;
pub use winit::event::WindowEvent;
