//! Name-order indexing and rank pairing
//!
//! Sequence iteration order is never storage order: it is derived by
//! sorting node names at the moment of use. Rust's `str` ordering compares
//! bytes, which for UTF-8 equals code-point order, so the sort is plain
//! lexicographic. Names are globally unique, so ties cannot occur.
//!
//! Pairing two sequences by shared sort rank is the only association
//! between a position keyframe and its aim target. The naming scheme
//! (fixed `.000` clone base plus first-unused suffixing) exists to keep
//! ranks aligned across both sequences as nodes are added.

use cinerig_core::ObjectId;
use cinerig_scene::SceneWorld;

/// Sort node ids by object name, lexicographically
pub fn sorted_by_name(world: &SceneWorld, ids: &[ObjectId]) -> Vec<ObjectId> {
    let mut sorted = ids.to_vec();
    sorted.sort_by(|a, b| {
        world
            .object_name(*a)
            .unwrap_or("")
            .cmp(world.object_name(*b).unwrap_or(""))
    });
    sorted
}

/// Rank of a node within an already-sorted sequence
pub fn rank_of(sorted: &[ObjectId], id: ObjectId) -> Option<usize> {
    sorted.iter().position(|s| *s == id)
}

/// Pair two equal-length sequences element-wise after sorting each by name
pub fn pair_by_rank(
    world: &SceneWorld,
    dolly_ids: &[ObjectId],
    lookat_ids: &[ObjectId],
) -> Vec<(ObjectId, ObjectId)> {
    sorted_by_name(world, dolly_ids)
        .into_iter()
        .zip(sorted_by_name(world, lookat_ids))
        .collect()
}
