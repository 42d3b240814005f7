//! One-way bridge from simulation state to whatever draws it.
//!
//! The simulation never holds visual handles. Once per frame, [`Presentation`]
//! walks the live entities, spawns visuals for new ids, despawns visuals whose
//! entity is gone, and pushes the latest pose for everything else.

use engine_core::{EntityId, EntityKind, MeshInstance, Transform, TransformRaw};
use hecs::{Entity, World};
use std::collections::{HashMap, HashSet};

use crate::simulation::Simulation;

/// A rendering backend's view of the scene.
pub trait SceneSink {
    type Handle: Copy;

    fn spawn(&mut self, id: EntityId, kind: EntityKind, transform: &Transform) -> Self::Handle;
    fn despawn(&mut self, handle: Self::Handle);
    fn sync(&mut self, handle: Self::Handle, transform: &Transform);
}

/// Counts from one [`Presentation::sync`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub spawned: usize,
    pub despawned: usize,
    pub updated: usize,
}

/// Maps entity ids to sink handles.
pub struct Presentation<S: SceneSink> {
    sink: S,
    handles: HashMap<EntityId, S::Handle>,
}

impl<S: SceneSink> Presentation<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            handles: HashMap::new(),
        }
    }

    /// Mirror the simulation into the sink.
    pub fn sync(&mut self, sim: &Simulation) -> SyncStats {
        let mut stats = SyncStats::default();
        let mut live = HashSet::with_capacity(self.handles.len());

        for (id, kind, transform) in sim.entities() {
            live.insert(id);
            match self.handles.get(&id) {
                Some(&handle) => {
                    self.sink.sync(handle, &transform);
                    stats.updated += 1;
                }
                None => {
                    let handle = self.sink.spawn(id, kind, &transform);
                    self.handles.insert(id, handle);
                    stats.spawned += 1;
                }
            }
        }

        let sink = &mut self.sink;
        self.handles.retain(|id, handle| {
            if live.contains(id) {
                true
            } else {
                sink.despawn(*handle);
                stats.despawned += 1;
                false
            }
        });

        stats
    }

    pub fn handle(&self, id: EntityId) -> Option<S::Handle> {
        self.handles.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Headless sink that keeps visuals as ECS entities.
#[derive(Default)]
pub struct EcsScene {
    world: World,
}

impl EcsScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of visuals of the given kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.world
            .query::<&EntityKind>()
            .iter()
            .filter(|(_, k)| **k == kind)
            .count()
    }

    /// Instance data for every meshed visual, ready for GPU upload.
    pub fn instances(&self) -> Vec<TransformRaw> {
        self.world
            .query::<(&Transform, &MeshInstance)>()
            .iter()
            .map(|(_, (transform, _))| TransformRaw::from(transform))
            .collect()
    }
}

impl SceneSink for EcsScene {
    type Handle = Entity;

    fn spawn(&mut self, id: EntityId, kind: EntityKind, transform: &Transform) -> Entity {
        match MeshInstance::for_kind(kind) {
            Some(mesh) => self.world.spawn((id, kind, *transform, mesh)),
            None => self.world.spawn((id, kind, *transform)),
        }
    }

    fn despawn(&mut self, handle: Entity) {
        if self.world.despawn(handle).is_err() {
            log::warn!("despawn of unknown visual {:?}", handle);
        }
    }

    fn sync(&mut self, handle: Entity, transform: &Transform) {
        if let Ok(mut current) = self.world.get::<&mut Transform>(handle) {
            *current = *transform;
        }
    }
}
