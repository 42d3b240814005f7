//! Per-frame orchestration. Owns every simulated entity.

use engine_core::{EntityId, EntityKind, IdAllocator, Transform};
use input::ControlInput;

use crate::camera_rig::CameraRig;
use crate::combat::{self, Hit, Target};
use crate::emplacement::Emplacement;
use crate::projectile::Projectile;
use crate::seeder::TargetSeeder;
use crate::tuning::Tuning;
use crate::vehicle::{ControlIntent, VehicleState};

/// What happened during one `step`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub fired: Option<EntityId>,
    pub hits: Vec<Hit>,
    pub expired: Vec<EntityId>,
}

/// The whole scene's simulation state.
pub struct Simulation {
    tuning: Tuning,
    ids: IdAllocator,
    frame: u64,

    vehicle: VehicleState,
    rig: CameraRig,
    camera_id: EntityId,
    camera: Transform,

    projectiles: Vec<Projectile>,
    targets: Vec<Target>,
    emplacements: Vec<Emplacement>,
}

impl Simulation {
    /// Build the starting scene. Targets and emplacements come from `seeder`.
    pub fn new<S: TargetSeeder + ?Sized>(tuning: Tuning, seeder: &mut S) -> Self {
        let mut ids = IdAllocator::new();
        let vehicle = VehicleState::new(ids.allocate(), tuning.vehicle.start_position);
        let camera_id = ids.allocate();
        let rig = CameraRig::new();
        let camera = rig.pose(&vehicle, &tuning.camera);

        let targets: Vec<Target> = seeder
            .targets()
            .into_iter()
            .map(|p| Target::new(ids.allocate(), p))
            .collect();
        let emplacements: Vec<Emplacement> = seeder
            .emplacements()
            .into_iter()
            .map(|p| {
                let mut e = Emplacement::new(ids.allocate(), p);
                e.track(vehicle.position());
                e
            })
            .collect();

        log::info!(
            "scene ready: {} targets, {} emplacements, vehicle at {:?}",
            targets.len(),
            emplacements.len(),
            vehicle.position()
        );

        Self {
            tuning,
            ids,
            frame: 0,
            vehicle,
            rig,
            camera_id,
            camera,
            projectiles: Vec::new(),
            targets,
            emplacements,
        }
    }

    /// Advance one frame.
    ///
    /// Order: resolve input (a shot leaves from the pre-move pose), move the
    /// vehicle, update the camera, move projectiles, resolve hits and expiry,
    /// re-aim emplacements at the vehicle's new position.
    pub fn step(&mut self, input: &ControlInput, dt: f32) -> FrameReport {
        let dt = dt.max(0.0);
        self.frame += 1;

        let intent = ControlIntent::from_input(input, &self.tuning.vehicle);
        let fired = intent.fire.then(|| self.fire());

        self.vehicle.update(&intent, dt, &self.tuning.vehicle);

        self.rig.target_bank = intent.target_bank;
        self.rig.update(self.tuning.camera.bank_smoothing);
        self.camera = self.rig.pose(&self.vehicle, &self.tuning.camera);

        for projectile in &mut self.projectiles {
            projectile.update(dt);
        }

        let resolution = combat::resolve(
            &mut self.projectiles,
            &mut self.targets,
            self.tuning.projectile.hit_radius,
            self.tuning.projectile.travel_limit,
        );

        let aim_point = self.vehicle.position();
        for emplacement in &mut self.emplacements {
            emplacement.track(aim_point);
        }

        FrameReport {
            frame: self.frame,
            fired,
            hits: resolution.hits,
            expired: resolution.expired,
        }
    }

    /// Launch a projectile from the vehicle's current pose.
    pub fn fire(&mut self) -> EntityId {
        let id = self.ids.allocate();
        let projectile = self.vehicle.fire(id, &self.tuning.projectile);
        log::debug!(
            "fired projectile {} from {:?} heading {:?}",
            id,
            projectile.spawn_position,
            projectile.velocity()
        );
        self.projectiles.push(projectile);
        id
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn vehicle(&self) -> &VehicleState {
        &self.vehicle
    }

    pub fn camera_rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn camera(&self) -> &Transform {
        &self.camera
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn emplacements(&self) -> &[Emplacement] {
        &self.emplacements
    }

    /// Every live entity with its kind and pose, for the presentation layer.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, EntityKind, Transform)> + '_ {
        let vehicle = std::iter::once((self.vehicle.id, EntityKind::Vehicle, self.vehicle.transform()));
        let camera = std::iter::once((self.camera_id, EntityKind::Camera, self.camera));
        let emplacements = self
            .emplacements
            .iter()
            .map(|e| (e.id, EntityKind::Emplacement, e.transform()));
        let targets = self
            .targets
            .iter()
            .map(|t| (t.id, EntityKind::Target, t.transform()));
        let projectiles = self
            .projectiles
            .iter()
            .map(|p| (p.id, EntityKind::Projectile, p.transform()));

        vehicle
            .chain(camera)
            .chain(emplacements)
            .chain(targets)
            .chain(projectiles)
    }
}
