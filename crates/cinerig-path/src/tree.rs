//! Spline tree construction and navigation

use crate::role::NodeRole;
use cinerig_core::{CollectionId, Result};
use cinerig_scene::SceneWorld;

/// Requested name for new tree collections; the allocator suffixes
/// subsequent trees into `spline.000`, `spline.001`, ...
pub const TREE_NAME: &str = "spline";

/// The three collections making up one spline path
#[derive(Debug, Clone, Copy)]
pub struct SplineTree {
    pub spline: CollectionId,
    pub dolly: CollectionId,
    pub lookat: CollectionId,
}

/// Allocate a new tree: a `spline` collection with empty `dolly` and
/// `lookat` child sequences, linked under `parent` when given.
pub fn create_tree(world: &mut SceneWorld, parent: Option<CollectionId>) -> Result<SplineTree> {
    let spline = world.create_collection(TREE_NAME);
    if let Some(parent) = parent {
        world.link_collection(spline, parent)?;
    }

    let dolly = world.create_collection(NodeRole::Dolly.sequence_name());
    world.link_collection(dolly, spline)?;

    let lookat = world.create_collection(NodeRole::Lookat.sequence_name());
    world.link_collection(lookat, spline)?;

    Ok(SplineTree {
        spline,
        dolly,
        lookat,
    })
}

/// Find the child sequence of a tree for one role, by name prefix
pub fn sequence_of(world: &SceneWorld, tree: CollectionId, role: NodeRole) -> Option<CollectionId> {
    let children = &world.collection(tree)?.children;
    children.iter().copied().find(|c| {
        world
            .collection_name(*c)
            .map(|n| n.starts_with(role.sequence_name()))
            .unwrap_or(false)
    })
}
