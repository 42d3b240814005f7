//! Kinematics and proximity collision for Rotorstrike.
//!
//! Everything here is plain `glam` math: bodies integrate their own velocity,
//! and hits are center-to-center distance tests.

pub mod collision;
pub mod kinematic;

pub use collision::*;
pub use kinematic::*;
