//! Structural validation of spline trees

use crate::role::NodeRole;
use crate::tree;
use cinerig_core::{CinerigError, CollectionId, Result};
use cinerig_scene::SceneWorld;

/// Minimum number of nodes per sequence for a usable path
pub const MIN_NODES: usize = 4;

/// Validate a tree's structure ahead of export or preview.
///
/// Rules, in order, first failure short-circuiting, each carrying the
/// tree's display name: both sequences exist; counts match; at least
/// [`MIN_NODES`] nodes. Returns the (dolly, lookat) sequence ids.
pub fn validate_tree(
    world: &SceneWorld,
    tree_id: CollectionId,
) -> Result<(CollectionId, CollectionId)> {
    let name = world
        .collection_name(tree_id)
        .ok_or_else(|| CinerigError::CollectionNotFound(tree_id.to_string()))?
        .to_string();

    let dolly = tree::sequence_of(world, tree_id, NodeRole::Dolly)
        .ok_or_else(|| CinerigError::MissingSequence(name.clone()))?;
    let lookat = tree::sequence_of(world, tree_id, NodeRole::Lookat)
        .ok_or_else(|| CinerigError::MissingSequence(name.clone()))?;

    let dolly_count = world.collection(dolly).map(|c| c.objects.len()).unwrap_or(0);
    let lookat_count = world
        .collection(lookat)
        .map(|c| c.objects.len())
        .unwrap_or(0);

    if dolly_count != lookat_count {
        return Err(CinerigError::CountMismatch {
            tree: name,
            dolly: dolly_count,
            lookat: lookat_count,
        });
    }
    if dolly_count < MIN_NODES {
        return Err(CinerigError::MinimumCount {
            tree: name,
            count: dolly_count,
        });
    }

    Ok((dolly, lookat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{instantiate, TemplateRegistry};
    use crate::tree::create_tree;
    use cinerig_core::Vec3;

    fn tree_with_counts(world: &mut SceneWorld, dolly: usize, lookat: usize) -> CollectionId {
        let tree = create_tree(world, None).unwrap();
        let templates = TemplateRegistry::new().ensure(world, None).unwrap();
        for i in 0..dolly {
            let pos = Vec3::new(i as f32, 0.0, 0.0);
            instantiate(world, &templates, NodeRole::Dolly, pos, tree.dolly, false).unwrap();
        }
        for i in 0..lookat {
            let pos = Vec3::new(i as f32, 0.0, 1.0);
            instantiate(world, &templates, NodeRole::Lookat, pos, tree.lookat, false).unwrap();
        }
        tree.spline
    }

    #[test]
    fn accepts_four_paired_nodes() {
        let mut world = SceneWorld::new();
        let tree = tree_with_counts(&mut world, 4, 4);
        assert!(validate_tree(&world, tree).is_ok());
    }

    #[test]
    fn rejects_three_node_tree() {
        let mut world = SceneWorld::new();
        let tree = tree_with_counts(&mut world, 3, 3);
        assert!(matches!(
            validate_tree(&world, tree),
            Err(CinerigError::MinimumCount { count: 3, .. })
        ));
    }

    #[test]
    fn rejects_unequal_counts_before_minimum() {
        let mut world = SceneWorld::new();
        let tree = tree_with_counts(&mut world, 5, 4);
        assert!(matches!(
            validate_tree(&world, tree),
            Err(CinerigError::CountMismatch {
                dolly: 5,
                lookat: 4,
                ..
            })
        ));
    }

    #[test]
    fn rejects_tree_without_sequences() {
        let mut world = SceneWorld::new();
        let bare = world.create_collection("spline");
        assert!(matches!(
            validate_tree(&world, bare),
            Err(CinerigError::MissingSequence(_))
        ));
    }
}
