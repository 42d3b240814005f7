//! Gameplay tuning. Kept apart from run configuration (frame count, script, dt).

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Helicopter handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleTuning {
    /// Speed along the body's forward axis while forward/backward is held (units/s).
    pub cruise_speed: f32,
    /// Yaw rate while a turn key is held (rad/s).
    pub yaw_rate: f32,
    /// Climb/descent rate while ascend/descend is held (units/s).
    pub vertical_speed: f32,
    /// Per-frame multiplier on velocity, yaw rate and vertical rate.
    pub drag: f32,
    /// Lowest allowed altitude.
    pub ground_clearance: f32,
    /// Camera lean while turning, in degrees.
    pub bank_tilt_degrees: f32,
    /// Where the vehicle starts.
    pub start_position: Vec3,
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self {
            cruise_speed: 10.0,
            yaw_rate: 2.0,
            vertical_speed: 5.0,
            drag: 0.95,
            ground_clearance: 1.0,
            bank_tilt_degrees: 25.0,
            start_position: Vec3::new(0.0, 5.0, 0.0),
        }
    }
}

impl VehicleTuning {
    pub fn bank_tilt(&self) -> f32 {
        self.bank_tilt_degrees.to_radians()
    }
}

/// Missile behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    /// Muzzle speed (units/s), constant for the projectile's life.
    pub speed: f32,
    /// Spawn distance ahead of the vehicle.
    pub muzzle_offset: f32,
    /// Spawn height above the vehicle.
    pub muzzle_lift: f32,
    /// Projectiles further than this from the world origin are removed.
    pub travel_limit: f32,
    /// Center-to-center distance below which a projectile hits a target.
    pub hit_radius: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 30.0,
            muzzle_offset: 1.0,
            muzzle_lift: 0.2,
            travel_limit: 100.0,
            hit_radius: 2.0,
        }
    }
}

/// Chase camera.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Offset from the vehicle in its yaw frame.
    pub offset: Vec3,
    /// Fraction of the remaining bank error closed each frame (0..1).
    pub bank_smoothing: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 5.0, 10.0),
            bank_smoothing: 0.10,
        }
    }
}

impl CameraTuning {
    /// Snappier variant used by the second scene.
    pub fn responsive() -> Self {
        Self {
            bank_smoothing: 0.15,
            ..Self::default()
        }
    }
}

/// Scene setup: where targets and emplacements go.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    /// Number of randomly placed targets.
    pub target_count: usize,
    /// Targets are placed with x and z uniform in `[-half_extent, half_extent)`.
    pub target_half_extent: f32,
    /// Height at which targets sit.
    pub target_height: f32,
    /// Explicit target positions; overrides random placement when set.
    pub fixed_targets: Option<Vec<Vec3>>,
    /// Emplacement positions.
    pub emplacements: Vec<Vec3>,
    /// RNG seed for target placement. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            target_count: 10,
            target_half_extent: 50.0,
            target_height: 2.0,
            fixed_targets: None,
            emplacements: vec![
                Vec3::new(-40.0, 0.0, -40.0),
                Vec3::new(40.0, 0.0, -40.0),
                Vec3::new(0.0, 0.0, 45.0),
            ],
            seed: None,
        }
    }
}

/// All gameplay tuning for one scene.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub vehicle: VehicleTuning,
    pub projectile: ProjectileTuning,
    pub camera: CameraTuning,
    pub world: WorldTuning,
}
