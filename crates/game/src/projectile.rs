//! Missiles: straight-line flight, expiry by distance from the world origin.

use engine_core::{EntityId, Transform, Vec3Ext};
use glam::Vec3;
use physics::{Body, KinematicBody};

/// A live missile. Owned by the simulation's projectile list until it hits or expires.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: EntityId,
    pub body: KinematicBody,
    pub spawn_position: Vec3,
}

impl Projectile {
    pub fn new(id: EntityId, spawn_position: Vec3, velocity: Vec3) -> Self {
        Self {
            id,
            body: KinematicBody::new(spawn_position, velocity),
            spawn_position,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.body.velocity
    }

    /// Move along the launch direction. No drag, no gravity.
    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
    }

    /// True once the projectile is further than `travel_limit` from the world
    /// origin. Measured from the origin, not the launch point, so shots fired
    /// far from the origin run out sooner.
    pub fn should_expire(&self, travel_limit: f32) -> bool {
        self.body.position.length() > travel_limit
    }

    /// How far the projectile has flown since launch.
    pub fn distance_from_spawn(&self) -> f32 {
        self.body.position.distance(self.spawn_position)
    }

    /// Oriented along its flight direction.
    pub fn transform(&self) -> Transform {
        let heading = (-self.body.velocity).heading();
        Transform::from_position_yaw(self.body.position, heading)
    }
}

impl Body for Projectile {
    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Vec3 {
        self.body.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_moves_in_a_straight_line() {
        let mut p = Projectile::new(EntityId(1), Vec3::new(0.0, 5.2, -1.0), Vec3::new(0.0, 0.0, -30.0));
        p.update(0.5);
        assert_eq!(p.position(), Vec3::new(0.0, 5.2, -16.0));
        assert_eq!(p.velocity(), Vec3::new(0.0, 0.0, -30.0));
        assert_eq!(p.spawn_position, Vec3::new(0.0, 5.2, -1.0));
        assert!((p.distance_from_spawn() - 15.0).abs() < 1e-5);
    }

    #[test]
    fn expiry_threshold_is_exclusive() {
        let inside = Projectile::new(EntityId(1), Vec3::new(0.0, 0.0, -99.999), Vec3::ZERO);
        assert!(!inside.should_expire(100.0));

        let at_limit = Projectile::new(EntityId(2), Vec3::new(0.0, 0.0, -100.0), Vec3::ZERO);
        assert!(!at_limit.should_expire(100.0));

        let outside = Projectile::new(EntityId(3), Vec3::new(60.0, 0.0, -80.5), Vec3::ZERO);
        assert!(outside.should_expire(100.0));
    }

    #[test]
    fn expiry_measures_from_origin_not_spawn() {
        // Launched 90 units out: only 10.1 units of flight before expiring.
        let mut p = Projectile::new(EntityId(1), Vec3::new(90.0, 0.0, 0.0), Vec3::new(30.0, 0.0, 0.0));
        assert!(!p.should_expire(100.0));
        p.update(10.1 / 30.0);
        assert!(p.distance_from_spawn() < 100.0);
        assert!(p.should_expire(100.0));
    }

    #[test]
    fn transform_faces_flight_direction() {
        let p = Projectile::new(EntityId(1), Vec3::ZERO, Vec3::new(-30.0, 0.0, 0.0));
        let forward = p.transform().forward();
        assert!((forward - Vec3::NEG_X).length() < 1e-5, "forward {forward:?}");
    }
}
