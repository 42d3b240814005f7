//! Initial placement of targets and emplacements.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::tuning::WorldTuning;

/// Supplies starting positions at session start.
pub trait TargetSeeder {
    fn targets(&mut self) -> Vec<Vec3>;
    fn emplacements(&mut self) -> Vec<Vec3>;
}

/// Scatters targets uniformly over a square at a fixed height.
pub struct RandomSeeder {
    rng: StdRng,
    count: usize,
    half_extent: f32,
    height: f32,
    emplacements: Vec<Vec3>,
}

impl RandomSeeder {
    pub fn new(world: &WorldTuning) -> Self {
        let rng = match world.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            count: world.target_count,
            half_extent: world.target_half_extent,
            height: world.target_height,
            emplacements: world.emplacements.clone(),
        }
    }
}

impl TargetSeeder for RandomSeeder {
    fn targets(&mut self) -> Vec<Vec3> {
        let h = self.half_extent;
        if h <= 0.0 {
            return vec![Vec3::new(0.0, self.height, 0.0); self.count];
        }
        (0..self.count)
            .map(|_| {
                Vec3::new(
                    self.rng.gen_range(-h..h),
                    self.height,
                    self.rng.gen_range(-h..h),
                )
            })
            .collect()
    }

    fn emplacements(&mut self) -> Vec<Vec3> {
        self.emplacements.clone()
    }
}

/// Hands back exactly the positions it was given.
#[derive(Debug, Clone, Default)]
pub struct FixedSeeder {
    pub targets: Vec<Vec3>,
    pub emplacements: Vec<Vec3>,
}

impl FixedSeeder {
    pub fn new(targets: Vec<Vec3>, emplacements: Vec<Vec3>) -> Self {
        Self {
            targets,
            emplacements,
        }
    }
}

impl TargetSeeder for FixedSeeder {
    fn targets(&mut self) -> Vec<Vec3> {
        self.targets.clone()
    }

    fn emplacements(&mut self) -> Vec<Vec3> {
        self.emplacements.clone()
    }
}

/// Pick the seeder the world tuning asks for.
pub fn from_tuning(world: &WorldTuning) -> Box<dyn TargetSeeder> {
    match &world.fixed_targets {
        Some(targets) => Box::new(FixedSeeder::new(targets.clone(), world.emplacements.clone())),
        None => Box::new(RandomSeeder::new(world)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> WorldTuning {
        WorldTuning {
            seed: Some(seed),
            ..WorldTuning::default()
        }
    }

    #[test]
    fn random_targets_stay_in_bounds() {
        let world = seeded(42);
        let targets = RandomSeeder::new(&world).targets();
        assert_eq!(targets.len(), 10);
        for t in targets {
            assert!(t.x >= -50.0 && t.x < 50.0);
            assert!(t.z >= -50.0 && t.z < 50.0);
            assert_eq!(t.y, 2.0);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = RandomSeeder::new(&seeded(7)).targets();
        let b = RandomSeeder::new(&seeded(7)).targets();
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_targets_override_random_placement() {
        let world = WorldTuning {
            fixed_targets: Some(vec![Vec3::new(1.0, 2.0, 3.0)]),
            emplacements: vec![Vec3::ZERO],
            ..WorldTuning::default()
        };
        let mut seeder = from_tuning(&world);
        assert_eq!(seeder.targets(), vec![Vec3::new(1.0, 2.0, 3.0)]);
        assert_eq!(seeder.emplacements(), vec![Vec3::ZERO]);
    }
}
