//! Position/velocity integrator shared by the vehicle and projectiles.

use glam::Vec3;

/// Per-frame multiplicative decay applied to the vehicle's rates.
pub const DEFAULT_DRAG: f32 = 0.95;

/// A point body with linear velocity. No mass, no forces: callers set velocity directly.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KinematicBody {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl KinematicBody {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    pub fn at_rest(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }

    /// Explicit Euler step: `position += velocity * dt`.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Scale velocity by `factor` (one frame of drag).
    pub fn apply_drag(&mut self, factor: f32) {
        self.velocity *= factor;
    }

    /// Set the component of velocity along `axis` (unit length) to `speed`,
    /// leaving the perpendicular components untouched.
    pub fn set_axis_speed(&mut self, axis: Vec3, speed: f32) {
        let current = self.velocity.dot(axis);
        self.velocity += axis * (speed - current);
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// One frame of drag on a scalar rate.
#[inline]
pub fn damp(rate: f32, factor: f32) -> f32 {
    rate * factor
}
