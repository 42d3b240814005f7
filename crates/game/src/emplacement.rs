//! Stationary turrets that keep their aim on the vehicle.

use engine_core::{EntityId, Transform, Vec3Ext};
use glam::Vec3;

/// Below this squared distance the aim direction is undefined.
const MIN_AIM_DISTANCE_SQ: f32 = 1e-12;

/// A fixed turret. Never moves, never collides; only its aim changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Emplacement {
    pub id: EntityId,
    pub position: Vec3,
    /// Heading of the barrel, `atan2(dir.x, dir.z)` of the direction to the target.
    pub aim_yaw: f32,
}

impl Emplacement {
    pub fn new(id: EntityId, position: Vec3) -> Self {
        Self {
            id,
            position,
            aim_yaw: 0.0,
        }
    }

    /// Snap the aim onto `target`. No range, line-of-sight or turn-rate limit.
    /// If the target sits exactly on the emplacement the previous aim is kept.
    pub fn track(&mut self, target: Vec3) {
        let to_target = target - self.position;
        if to_target.length_squared() <= MIN_AIM_DISTANCE_SQ {
            return;
        }
        self.aim_yaw = to_target.normalize().heading();
    }

    /// Turret pose. The barrel runs along the model's local +Z.
    pub fn transform(&self) -> Transform {
        Transform::from_position_yaw(self.position, self.aim_yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn aims_at_diagonal_target() {
        let mut e = Emplacement::new(EntityId(1), Vec3::ZERO);
        e.track(Vec3::new(1.0, 0.0, 1.0));
        assert!((e.aim_yaw - FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn aim_ignores_distance() {
        let mut near = Emplacement::new(EntityId(1), Vec3::ZERO);
        let mut far = Emplacement::new(EntityId(2), Vec3::ZERO);
        near.track(Vec3::new(1.0, 0.0, 1.0));
        far.track(Vec3::new(10.0, 0.0, 10.0));
        assert!((near.aim_yaw - far.aim_yaw).abs() < 1e-6);
    }

    #[test]
    fn aim_uses_horizontal_direction_only() {
        let mut e = Emplacement::new(EntityId(1), Vec3::new(5.0, 0.0, 5.0));
        e.track(Vec3::new(5.0, 30.0, 15.0));
        assert!(e.aim_yaw.abs() < 1e-6);
        e.track(Vec3::new(-5.0, 3.0, 5.0));
        assert!((e.aim_yaw + FRAC_PI_2).abs() < 1e-6);
        e.track(Vec3::new(5.0, 8.0, -5.0));
        assert!((e.aim_yaw.abs() - PI).abs() < 1e-6);
    }

    #[test]
    fn coincident_target_keeps_previous_aim() {
        let mut e = Emplacement::new(EntityId(1), Vec3::new(2.0, 0.0, 2.0));
        e.track(Vec3::new(3.0, 0.0, 3.0));
        let before = e.aim_yaw;
        e.track(Vec3::new(2.0, 0.0, 2.0));
        assert_eq!(e.aim_yaw, before);
        assert!(e.aim_yaw.is_finite());
    }

    #[test]
    fn straight_overhead_target_aims_along_z() {
        // Horizontal part is zero but the 3D direction is defined.
        let mut e = Emplacement::new(EntityId(1), Vec3::ZERO);
        e.aim_yaw = 1.0;
        e.track(Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(e.aim_yaw, 0.0);
    }
}
