//! Bookkeeping for GPU resources acquired at mount.

use std::collections::BTreeMap;
use std::fmt;

/// Every resource the globe acquires, by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GlobeResource {
    SphereVertices,
    SphereIndices,
    WireframeVertices,
    PointPositions,
    GlobeMaterial,
    WireframeMaterial,
    PointMaterial,
    Renderer,
}

impl GlobeResource {
    pub const ALL: [GlobeResource; 8] = [
        GlobeResource::SphereVertices,
        GlobeResource::SphereIndices,
        GlobeResource::WireframeVertices,
        GlobeResource::PointPositions,
        GlobeResource::GlobeMaterial,
        GlobeResource::WireframeMaterial,
        GlobeResource::PointMaterial,
        GlobeResource::Renderer,
    ];

    pub const GEOMETRY: [GlobeResource; 4] = [
        GlobeResource::SphereVertices,
        GlobeResource::SphereIndices,
        GlobeResource::WireframeVertices,
        GlobeResource::PointPositions,
    ];

    pub const MATERIALS: [GlobeResource; 3] = [
        GlobeResource::GlobeMaterial,
        GlobeResource::WireframeMaterial,
        GlobeResource::PointMaterial,
    ];
}

impl fmt::Display for GlobeResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GlobeResource::SphereVertices => "sphere vertices",
            GlobeResource::SphereIndices => "sphere indices",
            GlobeResource::WireframeVertices => "wireframe vertices",
            GlobeResource::PointPositions => "point positions",
            GlobeResource::GlobeMaterial => "globe material",
            GlobeResource::WireframeMaterial => "wireframe material",
            GlobeResource::PointMaterial => "point material",
            GlobeResource::Renderer => "renderer",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    Live,
    Disposed,
}

/// Live/disposed state per resource. Resources never go back to `Live`.
#[derive(Debug, Clone, Default)]
pub struct ResourceLedger {
    entries: BTreeMap<GlobeResource, ResourceState>,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger with every resource marked live.
    pub fn all_live() -> Self {
        let mut ledger = Self::new();
        for resource in GlobeResource::ALL {
            ledger.acquire(resource);
        }
        ledger
    }

    pub fn acquire(&mut self, resource: GlobeResource) {
        self.entries.entry(resource).or_insert(ResourceState::Live);
    }

    /// Mark `resource` disposed. Returns `true` only on the first call.
    pub fn dispose(&mut self, resource: GlobeResource) -> bool {
        match self.entries.insert(resource, ResourceState::Disposed) {
            Some(ResourceState::Live) => {
                tracing::trace!(%resource, "released");
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, resource: GlobeResource) -> Option<ResourceState> {
        self.entries.get(&resource).copied()
    }

    pub fn is_disposed(&self, resource: GlobeResource) -> bool {
        self.state(resource) == Some(ResourceState::Disposed)
    }

    pub fn live(&self) -> impl Iterator<Item = GlobeResource> + '_ {
        self.entries
            .iter()
            .filter(|(_, state)| **state == ResourceState::Live)
            .map(|(resource, _)| *resource)
    }

    /// True once every tracked resource has been disposed.
    pub fn all_disposed(&self) -> bool {
        self.live().next().is_none()
    }
}
