//! Engine data structures: meshes, textures and instances.
//!
//! This module contains the core data types for scene representation:
//!
//! - `mesh` contains CPU- and GPU-side mesh definitions and draw helpers
//! - `texture` contains GPU texture wrapper and creation utilities
//! - `instance` holds per-instance transformation and attribute data

pub mod instance;
pub mod mesh;
pub mod texture;
