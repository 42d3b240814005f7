//! Small vector helpers on top of glam.

use glam::{Quat, Vec3};

/// Extra operations the simulation needs on `Vec3`.
pub trait Vec3Ext {
    /// Rotate about the world +Y axis by `angle` radians (right-handed).
    fn rotate_y(self, angle: f32) -> Vec3;

    /// Heading angle of the horizontal components, measured from +Z towards +X.
    fn heading(self) -> f32;
}

impl Vec3Ext for Vec3 {
    fn rotate_y(self, angle: f32) -> Vec3 {
        Quat::from_rotation_y(angle) * self
    }

    fn heading(self) -> f32 {
        self.x.atan2(self.z)
    }
}

/// Linear interpolation `a + (b - a) * t`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn rotate_y_quarter_turn_maps_forward_to_left() {
        let v = Vec3::new(0.0, 0.0, -1.0).rotate_y(FRAC_PI_2);
        assert!(approx(v, Vec3::new(-1.0, 0.0, 0.0)), "got {v:?}");
    }

    #[test]
    fn rotate_y_keeps_height_and_length() {
        let v = Vec3::new(3.0, 5.0, 4.0).rotate_y(1.234);
        assert!((v.y - 5.0).abs() < 1e-6);
        assert!((Vec3::new(v.x, 0.0, v.z).length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn rotate_y_half_turn_flips_offset() {
        let v = Vec3::new(0.0, 5.0, 10.0).rotate_y(PI);
        assert!(approx(v, Vec3::new(0.0, 5.0, -10.0)), "got {v:?}");
    }

    #[test]
    fn heading_of_diagonal() {
        assert!((Vec3::new(1.0, 0.0, 1.0).heading() - FRAC_PI_4).abs() < 1e-6);
        assert!((Vec3::new(0.0, 7.0, 1.0).heading()).abs() < 1e-6);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert!((lerp(0.0, 1.0, 0.1) - 0.1).abs() < 1e-7);
    }
}
