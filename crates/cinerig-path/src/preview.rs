//! Preview alignment - resolve a camera pose from a selected DOLLY node
//!
//! The paired aim target is found the same way the exporter pairs
//! keyframes: equal rank in the name-sorted sibling sequences. No axis
//! remap happens here; the host scene already stores authoring-space
//! coordinates.

use crate::order;
use crate::role::NodeRole;
use crate::tree;
use cinerig_core::{CinerigError, ObjectId, Result, Vec3};
use cinerig_scene::SceneWorld;

/// A resolved preview pose: where the camera goes and what it tracks
#[derive(Debug, Clone, Copy)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Vec3,
    pub target: ObjectId,
}

/// Resolve the preview pose for a selected DOLLY node.
///
/// The node must sit in exactly one collection (its DOLLY sequence),
/// which must belong to a tree with a sibling LOOKAT sequence of equal
/// size. The LOOKAT node at the selected node's sort rank becomes the
/// aim target.
pub fn resolve_preview(world: &SceneWorld, selected: ObjectId) -> Result<CameraPose> {
    let node_name = world
        .object_name(selected)
        .ok_or_else(|| CinerigError::ObjectNotFound(selected.to_string()))?
        .to_string();

    let containers = world.collections_of(selected);
    if containers.len() != 1 {
        return Err(CinerigError::AmbiguousContainer {
            node: node_name,
            count: containers.len(),
        });
    }
    let dolly_seq = containers[0];

    let seq_name = world
        .collection_name(dolly_seq)
        .ok_or_else(|| CinerigError::CollectionNotFound(dolly_seq.to_string()))?
        .to_string();
    let tree_id = world
        .collection_parent(dolly_seq)
        .ok_or_else(|| CinerigError::MissingSequence(seq_name))?;
    let tree_name = world
        .collection_name(tree_id)
        .ok_or_else(|| CinerigError::CollectionNotFound(tree_id.to_string()))?
        .to_string();
    let lookat_seq = tree::sequence_of(world, tree_id, NodeRole::Lookat)
        .ok_or_else(|| CinerigError::MissingSequence(tree_name.clone()))?;

    let dolly_ids = world
        .collection(dolly_seq)
        .map(|c| c.objects.clone())
        .unwrap_or_default();
    let lookat_ids = world
        .collection(lookat_seq)
        .map(|c| c.objects.clone())
        .unwrap_or_default();
    if dolly_ids.len() != lookat_ids.len() {
        return Err(CinerigError::CountMismatch {
            tree: tree_name,
            dolly: dolly_ids.len(),
            lookat: lookat_ids.len(),
        });
    }

    let dollys_sorted = order::sorted_by_name(world, &dolly_ids);
    let lookats_sorted = order::sorted_by_name(world, &lookat_ids);
    let rank = order::rank_of(&dollys_sorted, selected)
        .ok_or_else(|| CinerigError::ObjectNotFound(selected.to_string()))?;
    let target = lookats_sorted[rank];

    let node = world
        .object(selected)
        .ok_or_else(|| CinerigError::ObjectNotFound(selected.to_string()))?;

    Ok(CameraPose {
        position: node.position,
        rotation: node.rotation,
        target,
    })
}
