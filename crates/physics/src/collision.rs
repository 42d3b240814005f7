//! Center-to-center proximity tests.

use engine_core::EntityId;
use glam::Vec3;

/// Anything with an identity and a point position that can take part in a hit test.
pub trait Body {
    fn id(&self) -> EntityId;
    fn position(&self) -> Vec3;
}

/// True when `a` and `b` are strictly closer than `radius`.
#[inline]
pub fn within_radius(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// Index of the first body within `radius` of `point`, scanning from the back
/// of the slice (highest index first). Reverse order lets the caller remove
/// the returned index without disturbing the ones it has not visited yet.
pub fn first_hit<T: Body>(point: Vec3, bodies: &[T], radius: f32) -> Option<usize> {
    bodies
        .iter()
        .enumerate()
        .rev()
        .find(|(_, body)| within_radius(point, body.position(), radius))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dot(u64, Vec3);

    impl Body for Dot {
        fn id(&self) -> EntityId {
            EntityId(self.0)
        }
        fn position(&self) -> Vec3 {
            self.1
        }
    }

    #[test]
    fn coincident_points_hit() {
        let p = Vec3::new(5.0, 2.0, 5.0);
        assert!(within_radius(p, p, 2.0));
    }

    #[test]
    fn radius_is_exclusive() {
        let a = Vec3::new(5.0, 2.0, 5.0);
        assert!(!within_radius(a, Vec3::new(7.0, 2.0, 5.0), 2.0));
        assert!(!within_radius(a, Vec3::new(8.0, 2.0, 5.0), 2.0));
        assert!(within_radius(a, Vec3::new(6.999, 2.0, 5.0), 2.0));
    }

    #[test]
    fn first_hit_scans_from_the_back() {
        let bodies = vec![
            Dot(1, Vec3::new(0.5, 0.0, 0.0)),
            Dot(2, Vec3::new(50.0, 0.0, 0.0)),
            Dot(3, Vec3::new(-0.5, 0.0, 0.0)),
        ];
        let hit = first_hit(Vec3::ZERO, &bodies, 2.0);
        assert_eq!(hit, Some(2));
        assert_eq!(bodies[2].id(), EntityId(3));
    }

    #[test]
    fn first_hit_none_when_all_far() {
        let bodies = vec![Dot(1, Vec3::new(10.0, 0.0, 0.0))];
        assert_eq!(first_hit(Vec3::ZERO, &bodies, 2.0), None);
        assert_eq!(first_hit::<Dot>(Vec3::ZERO, &[], 2.0), None);
    }
}
