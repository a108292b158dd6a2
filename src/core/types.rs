//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for world entities (hostiles, resources, projectiles)
///
/// Ids are issued by [`EntityIdGenerator`] and never reused within a run, so a
/// pending-removal list can't alias something spawned later in the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out monotonically increasing entity ids
#[derive(Debug, Clone)]
pub struct EntityIdGenerator {
    next_id: u32,
}

impl EntityIdGenerator {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn next(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for EntityIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulation frame counter
pub type Tick = u64;

/// What a resource pickup is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Food,
    Water,
    Wood,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Food, ResourceKind::Water, ResourceKind::Wood];

    /// Logical asset name for this kind
    pub fn asset_name(&self) -> &'static str {
        match self {
            ResourceKind::Food => "food",
            ResourceKind::Water => "water",
            ResourceKind::Wood => "wood",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generator_is_monotonic() {
        let mut ids = EntityIdGenerator::new();
        let a = ids.next();
        let b = ids.next();
        let c = ids.next();
        assert_eq!(a, EntityId(1));
        assert!(a < b && b < c);
    }

    #[test]
    fn test_resource_kind_asset_names() {
        let names: Vec<_> = ResourceKind::ALL.iter().map(|k| k.asset_name()).collect();
        assert_eq!(names, vec!["food", "water", "wood"]);
    }
}
