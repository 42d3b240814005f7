//! Core engine types and utilities for Rotorstrike.
//!
//! This crate provides the foundational types used across all engine systems:
//! - Transform and spatial helpers
//! - Frame clock
//! - Entity identity shared by the simulation and the presentation layer

pub mod components;
pub mod math;
pub mod time;
pub mod transform;

pub use components::*;
pub use math::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{EulerRot, Mat4, Quat, Vec3};
pub use hecs::{Entity, World};
