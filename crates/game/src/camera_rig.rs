//! Chase camera with a smoothed banking lean.

use engine_core::{lerp, Transform, Vec3Ext};
use glam::Vec3;

use crate::tuning::CameraTuning;
use crate::vehicle::VehicleState;

/// Banking state for the chase camera.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraRig {
    /// Roll currently applied to the camera (radians).
    pub current_bank: f32,
    /// Roll the camera is easing towards.
    pub target_bank: f32,
}

impl CameraRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close `smoothing` of the remaining bank error. Applied once per frame
    /// regardless of frame time, so the easing speed depends on frame rate.
    pub fn update(&mut self, smoothing: f32) {
        self.current_bank = lerp(self.current_bank, self.target_bank, smoothing);
    }

    /// Camera pose for this frame: sits at the yaw-rotated offset from the
    /// vehicle, looks at it, then has its roll replaced by the current bank.
    pub fn pose(&self, vehicle: &VehicleState, tuning: &CameraTuning) -> Transform {
        let target = vehicle.position();
        let mut transform = Transform::from_position(target + tuning.offset.rotate_y(vehicle.yaw));
        transform.look_at(target, Vec3::Y);
        transform.set_roll(self.current_bank);
        transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::EntityId;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_8};

    #[test]
    fn bank_converges_without_overshoot() {
        let mut rig = CameraRig {
            current_bank: 0.0,
            target_bank: FRAC_PI_8,
        };
        let mut gap = (rig.target_bank - rig.current_bank).abs();
        for _ in 0..200 {
            rig.update(0.1);
            let next = (rig.target_bank - rig.current_bank).abs();
            assert!(rig.current_bank <= rig.target_bank);
            if gap > 1e-6 {
                assert!(next < gap);
            }
            gap = next;
        }
        assert!(gap < 1e-6);
    }

    #[test]
    fn one_step_closes_the_smoothing_fraction() {
        let mut rig = CameraRig {
            current_bank: 0.0,
            target_bank: 1.0,
        };
        rig.update(0.15);
        assert!((rig.current_bank - 0.15).abs() < 1e-6);
        rig.update(0.15);
        assert!((rig.current_bank - (0.15 + 0.85 * 0.15)).abs() < 1e-6);
    }

    #[test]
    fn releasing_turn_eases_back_to_level() {
        let mut rig = CameraRig {
            current_bank: -0.4,
            target_bank: 0.0,
        };
        rig.update(0.1);
        assert!((rig.current_bank + 0.36).abs() < 1e-6);
    }

    #[test]
    fn pose_trails_behind_and_above() {
        let vehicle = VehicleState::new(EntityId(0), Vec3::new(0.0, 5.0, 0.0));
        let rig = CameraRig::new();
        let pose = rig.pose(&vehicle, &CameraTuning::default());
        assert!((pose.position - Vec3::new(0.0, 10.0, 10.0)).length() < 1e-5);

        let to_vehicle = (vehicle.position() - pose.position).normalize();
        assert!((pose.forward() - to_vehicle).length() < 1e-4);
        assert!(pose.roll().abs() < 1e-5);
    }

    #[test]
    fn pose_offset_rotates_with_yaw() {
        let mut vehicle = VehicleState::new(EntityId(0), Vec3::new(3.0, 5.0, 3.0));
        vehicle.yaw = FRAC_PI_2;
        let pose = CameraRig::new().pose(&vehicle, &CameraTuning::default());
        assert!((pose.position - Vec3::new(13.0, 10.0, 3.0)).length() < 1e-4);
    }

    #[test]
    fn pose_roll_is_overridden_by_bank() {
        let vehicle = VehicleState::new(EntityId(0), Vec3::new(0.0, 5.0, 0.0));
        let rig = CameraRig {
            current_bank: 0.25,
            target_bank: 0.4,
        };
        let pose = rig.pose(&vehicle, &CameraTuning::default());
        assert!((pose.roll() - 0.25).abs() < 1e-4);
        assert!((pose.position - Vec3::new(0.0, 10.0, 10.0)).length() < 1e-5);
    }
}
