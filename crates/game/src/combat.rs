//! Projectile vs target resolution.

use engine_core::{EntityId, Transform};
use glam::Vec3;
use physics::{first_hit, Body};

use crate::projectile::Projectile;

/// A static destructible box. Alive while it is in the simulation's target list.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: EntityId,
    pub position: Vec3,
}

impl Target {
    pub fn new(id: EntityId, position: Vec3) -> Self {
        Self { id, position }
    }

    pub fn transform(&self) -> Transform {
        Transform::from_position(self.position)
    }
}

impl Body for Target {
    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

/// A projectile that destroyed a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub projectile: EntityId,
    pub target: EntityId,
}

/// Everything removed by one resolver pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub hits: Vec<Hit>,
    /// Projectiles removed for flying past the travel limit.
    pub expired: Vec<EntityId>,
}

/// Resolve collisions for one frame, then expire what flew too far.
///
/// Projectiles are visited from the back of the list (most recent first) and
/// each scans the targets from the back as well. The first target strictly
/// inside `hit_radius` is destroyed together with the projectile; a
/// projectile never takes out more than one target. Projectiles that hit
/// nothing are then checked against `travel_limit`. Iterating by descending
/// index means a removal only shifts entries that were already visited, so
/// each projectile is removed at most once.
pub fn resolve(
    projectiles: &mut Vec<Projectile>,
    targets: &mut Vec<Target>,
    hit_radius: f32,
    travel_limit: f32,
) -> Resolution {
    let mut resolution = Resolution::default();

    for i in (0..projectiles.len()).rev() {
        let position = projectiles[i].position();

        if let Some(j) = first_hit(position, targets.as_slice(), hit_radius) {
            let target = targets.remove(j);
            let projectile = projectiles.remove(i);
            log::debug!(
                "projectile {} destroyed target {} at ({:.1}, {:.1}, {:.1})",
                projectile.id,
                target.id,
                target.position.x,
                target.position.y,
                target.position.z
            );
            resolution.hits.push(Hit {
                projectile: projectile.id,
                target: target.id,
            });
            continue;
        }

        if projectiles[i].should_expire(travel_limit) {
            let projectile = projectiles.remove(i);
            log::debug!(
                "projectile {} expired after {:.1} units",
                projectile.id,
                projectile.distance_from_spawn()
            );
            resolution.expired.push(projectile.id);
        }
    }

    resolution
}
