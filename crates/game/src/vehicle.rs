//! Helicopter flight model: input mapping, integration, ground floor, drag.

use engine_core::{EntityId, Transform, Vec3Ext};
use glam::Vec3;
use input::ControlInput;
use physics::{damp, KinematicBody};

use crate::projectile::Projectile;
use crate::tuning::{ProjectileTuning, VehicleTuning};

/// What the pilot asked for this frame, resolved from the raw key flags.
///
/// `None` rates mean "leave as is": the value keeps decaying through drag
/// instead of being reset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlIntent {
    /// Signed speed along the body's forward axis.
    pub forward_speed: Option<f32>,
    pub yaw_rate: Option<f32>,
    pub vertical_rate: Option<f32>,
    /// Camera lean to aim for (radians). Zero when not turning.
    pub target_bank: f32,
    pub fire: bool,
}

impl ControlIntent {
    /// Resolve conflicting flags with a fixed order:
    /// - backward is applied, then forward, so forward wins when both are held;
    /// - yaw left is checked before yaw right, so left wins;
    /// - ascend is applied, then descend, so descend wins.
    pub fn from_input(input: &ControlInput, tuning: &VehicleTuning) -> Self {
        let mut forward_speed = None;
        if input.backward {
            forward_speed = Some(-tuning.cruise_speed);
        }
        if input.forward {
            forward_speed = Some(tuning.cruise_speed);
        }

        let (yaw_rate, target_bank) = if input.yaw_left {
            (Some(tuning.yaw_rate), -tuning.bank_tilt())
        } else if input.yaw_right {
            (Some(-tuning.yaw_rate), tuning.bank_tilt())
        } else {
            (None, 0.0)
        };

        let mut vertical_rate = None;
        if input.ascend {
            vertical_rate = Some(tuning.vertical_speed);
        }
        if input.descend {
            vertical_rate = Some(-tuning.vertical_speed);
        }

        Self {
            forward_speed,
            yaw_rate,
            vertical_rate,
            target_bank,
            fire: input.fire,
        }
    }
}

/// The flying vehicle. Lives for the whole session.
#[derive(Debug, Clone)]
pub struct VehicleState {
    pub id: EntityId,
    /// World-frame position and linear velocity.
    pub body: KinematicBody,
    /// Heading about +Y (radians). Zero faces -Z.
    pub yaw: f32,
    pub yaw_rate: f32,
    pub vertical_rate: f32,
}

impl VehicleState {
    pub fn new(id: EntityId, position: Vec3) -> Self {
        Self {
            id,
            body: KinematicBody::at_rest(position),
            yaw: 0.0,
            yaw_rate: 0.0,
            vertical_rate: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.body.velocity
    }

    /// Unit vector the nose points along.
    pub fn forward_axis(&self) -> Vec3 {
        Vec3::NEG_Z.rotate_y(self.yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_position_yaw(self.body.position, self.yaw)
    }

    /// Advance one frame.
    pub fn update(&mut self, intent: &ControlIntent, dt: f32, tuning: &VehicleTuning) {
        if let Some(speed) = intent.forward_speed {
            let axis = self.forward_axis();
            self.body.set_axis_speed(axis, speed);
        }
        if let Some(rate) = intent.yaw_rate {
            self.yaw_rate = rate;
        }
        if let Some(rate) = intent.vertical_rate {
            self.vertical_rate = rate;
        }

        self.body.integrate(dt);
        self.body.position.y += self.vertical_rate * dt;
        self.yaw += self.yaw_rate * dt;

        // Hard landing: no bounce.
        if self.body.position.y < tuning.ground_clearance {
            self.body.position.y = tuning.ground_clearance;
            self.vertical_rate = 0.0;
        }

        self.body.apply_drag(tuning.drag);
        self.yaw_rate = damp(self.yaw_rate, tuning.drag);
        self.vertical_rate = damp(self.vertical_rate, tuning.drag);
    }

    /// Launch a missile from the nose. Always succeeds; there is no cooldown or ammo.
    pub fn fire(&self, id: EntityId, tuning: &ProjectileTuning) -> Projectile {
        let muzzle = Vec3::new(0.0, 0.0, -tuning.muzzle_offset).rotate_y(self.yaw);
        let spawn = self.body.position + muzzle + Vec3::Y * tuning.muzzle_lift;
        let velocity = Vec3::new(0.0, 0.0, -tuning.speed).rotate_y(self.yaw);
        Projectile::new(id, spawn, velocity)
    }
}
