//! Render pipeline definitions.

pub mod textured;
