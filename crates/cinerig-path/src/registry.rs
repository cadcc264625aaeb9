//! Spline registry - the ordered list of authored paths
//!
//! Entries hold a non-owning collection id; the world owns the
//! collections. An entry whose collection was externally deleted is
//! *dangling*: it is surfaced (never silently pruned) until an explicit
//! remove or a destructive import clears the list.

use cinerig_core::CollectionId;
use cinerig_scene::SceneWorld;

/// Display label for dangling entries
pub const DELETED_LABEL: &str = "~deleted~";

/// One registry record: a display name plus the tree it refers to
#[derive(Debug, Clone)]
pub struct SplineEntry {
    pub name: String,
    pub tree: CollectionId,
}

impl SplineEntry {
    /// Whether the referenced tree collection still exists
    pub fn is_valid(&self, world: &SceneWorld) -> bool {
        world
            .collection_name(self.tree)
            .map(|n| !n.is_empty())
            .unwrap_or(false)
    }

    /// The name shown in a list: the entry's name, or `~deleted~` when
    /// the reference is dangling
    pub fn display_name(&self, world: &SceneWorld) -> String {
        if self.is_valid(world) {
            self.name.clone()
        } else {
            DELETED_LABEL.to_string()
        }
    }
}

/// Ordered spline list with a clamped active index
#[derive(Debug, Default)]
pub struct SplineRegistry {
    entries: Vec<SplineEntry>,
    active: usize,
}

impl SplineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; returns its index
    pub fn add(&mut self, name: impl Into<String>, tree: CollectionId) -> usize {
        self.entries.push(SplineEntry {
            name: name.into(),
            tree,
        });
        self.entries.len() - 1
    }

    /// Remove the entry at `index`, if in range. The active index is
    /// re-clamped the way the original list UI did: one step back, then
    /// into bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<SplineEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(index);
        self.active = index
            .saturating_sub(1)
            .min(self.entries.len().saturating_sub(1));
        Some(entry)
    }

    /// Move an entry from one index to another. Bounds-clamped: out of
    /// range on either side is a no-op. The active index follows the
    /// moved entry.
    pub fn move_to(&mut self, from: usize, to: usize) {
        if from >= self.entries.len() || to >= self.entries.len() || from == to {
            return;
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        if self.active == from {
            self.active = to;
        } else if from < self.active && self.active <= to {
            self.active -= 1;
        } else if to <= self.active && self.active < from {
            self.active += 1;
        }
    }

    /// Drop every entry (the collections survive in the world)
    pub fn clear(&mut self) {
        self.entries.clear();
        self.active = 0;
    }

    pub fn get(&self, index: usize) -> Option<&SplineEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[SplineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Set the active index, clamped into bounds
    pub fn set_active(&mut self, index: usize) {
        self.active = index.min(self.entries.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_of(n: usize) -> SplineRegistry {
        let mut registry = SplineRegistry::new();
        for i in 0..n {
            registry.add(format!("spline{}", i), CollectionId::new());
        }
        registry
    }

    #[test]
    fn remove_reclamps_active_index() {
        let mut registry = registry_of(3);
        registry.set_active(2);

        registry.remove_at(2);
        assert_eq!(registry.active_index(), 1);

        registry.remove_at(0);
        assert!(registry.active_index() < registry.len());

        registry.remove_at(0);
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.active_index(), 0);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut registry = registry_of(2);
        assert!(registry.remove_at(5).is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn move_follows_the_entry_and_stays_in_bounds() {
        let mut registry = registry_of(4);
        registry.set_active(0);

        registry.move_to(0, 2);
        assert_eq!(registry.get(2).unwrap().name, "spline0");
        assert_eq!(registry.active_index(), 2);

        registry.move_to(9, 0);
        assert_eq!(registry.get(2).unwrap().name, "spline0");

        for _ in 0..6 {
            registry.move_to(registry.active_index(), registry.active_index() + 1);
            assert!(registry.active_index() < registry.len());
        }
    }

    #[test]
    fn dangling_entry_is_surfaced_not_pruned() {
        let mut world = SceneWorld::new();
        let tree = world.create_collection("spline");
        let mut registry = SplineRegistry::new();
        registry.add("my path", tree);

        assert!(registry.get(0).unwrap().is_valid(&world));
        assert_eq!(registry.get(0).unwrap().display_name(&world), "my path");

        world.delete_collection(tree).unwrap();

        let entry = registry.get(0).unwrap();
        assert!(!entry.is_valid(&world));
        assert_eq!(entry.display_name(&world), DELETED_LABEL);
        assert_eq!(registry.len(), 1);
    }
}
