//! Identity and visual tags shared by the simulation and the presentation layer.

use std::fmt;

/// Stable identifier for a simulated entity. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// What kind of thing an entity is, for picking a visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Vehicle,
    Camera,
    Projectile,
    Target,
    Emplacement,
}

/// Mesh reference component - links entity to a mesh for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshInstance {
    pub mesh_id: u32,
    pub material_id: u32,
}

impl MeshInstance {
    pub fn new(mesh_id: u32, material_id: u32) -> Self {
        Self { mesh_id, material_id }
    }

    /// Default mesh/material slots per entity kind. Cameras have no mesh.
    pub fn for_kind(kind: EntityKind) -> Option<Self> {
        match kind {
            EntityKind::Vehicle => Some(Self::new(1, 1)),
            EntityKind::Projectile => Some(Self::new(2, 2)),
            EntityKind::Target => Some(Self::new(3, 3)),
            EntityKind::Emplacement => Some(Self::new(4, 1)),
            EntityKind::Camera => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let mut ids = IdAllocator::new();
        let a = ids.allocate();
        let b = ids.allocate();
        assert!(b > a);
        assert_ne!(a, b);
    }

    #[test]
    fn camera_has_no_mesh() {
        assert!(MeshInstance::for_kind(EntityKind::Camera).is_none());
        assert!(MeshInstance::for_kind(EntityKind::Target).is_some());
    }
}
