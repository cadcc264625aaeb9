//! Template registry and node instantiation
//!
//! One canonical DOLLY template and one canonical LOOKAT template are
//! created lazily per session and reused as the clone source for every
//! authored node. The registry is an explicit session-owned object, not
//! process state.

use crate::role::NodeRole;
use cinerig_core::{axes, CollectionId, ObjectId, Result, Vec3};
use cinerig_scene::{Material, SceneObject, SceneWorld};

/// Resolved template handles, obtainable only from [`TemplateRegistry::ensure`]
#[derive(Debug, Clone, Copy)]
pub struct Templates {
    pub dolly: ObjectId,
    pub lookat: ObjectId,
}

impl Templates {
    pub fn for_role(&self, role: NodeRole) -> ObjectId {
        match role {
            NodeRole::Dolly => self.dolly,
            NodeRole::Lookat => self.lookat,
        }
    }
}

/// Lazily created canonical template markers
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    dolly: Option<ObjectId>,
    lookat: Option<ObjectId>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure both templates exist, creating the missing ones under
    /// `parent`. Idempotent; a template whose object was externally
    /// destroyed is re-created.
    pub fn ensure(
        &mut self,
        world: &mut SceneWorld,
        parent: Option<CollectionId>,
    ) -> Result<Templates> {
        let dolly = Self::ensure_role(&mut self.dolly, world, parent, NodeRole::Dolly)?;
        let lookat = Self::ensure_role(&mut self.lookat, world, parent, NodeRole::Lookat)?;
        Ok(Templates { dolly, lookat })
    }

    fn ensure_role(
        slot: &mut Option<ObjectId>,
        world: &mut SceneWorld,
        parent: Option<CollectionId>,
        role: NodeRole,
    ) -> Result<ObjectId> {
        if let Some(id) = *slot {
            if world.object(id).is_some() {
                return Ok(id);
            }
        }

        let marker = SceneObject::new(role.template_name())
            .with_material(Material::new(role.material_name(), role.marker_color()))
            .as_hidden_marker();
        let id = world.add_object(marker);
        if let Some(parent) = parent {
            world.move_to_collection(id, parent)?;
        }

        log::debug!("created {} template", role.sequence_name());
        *slot = Some(id);
        Ok(id)
    }
}

/// Clone a role's template into a node of a target sequence.
///
/// `position` is taken verbatim for cursor-driven placement; with
/// `remap` set it is treated as runtime-space data (file-driven
/// placement) and converted into authoring space first. The clone is
/// renamed to the role's fixed base so the allocator extends the
/// sequence's sortable family, then moved into exactly `target`.
pub fn instantiate(
    world: &mut SceneWorld,
    templates: &Templates,
    role: NodeRole,
    position: Vec3,
    target: CollectionId,
    remap: bool,
) -> Result<ObjectId> {
    let id = world.clone_object(templates.for_role(role))?;

    let location = if remap {
        axes::to_authoring(position)
    } else {
        position
    };

    world.rename_object(id, role.clone_base())?;
    if let Some(node) = world.object_mut(id) {
        node.position = location;
        node.reveal();
    }
    world.move_to_collection(id, target)?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_is_idempotent() {
        let mut world = SceneWorld::new();
        let mut registry = TemplateRegistry::new();

        let first = registry.ensure(&mut world, None).unwrap();
        let second = registry.ensure(&mut world, None).unwrap();

        assert_eq!(first.dolly, second.dolly);
        assert_eq!(first.lookat, second.lookat);
        assert_eq!(world.object_count(), 2);
    }

    #[test]
    fn ensure_recreates_destroyed_template() {
        let mut world = SceneWorld::new();
        let mut registry = TemplateRegistry::new();

        let first = registry.ensure(&mut world, None).unwrap();
        world.delete_object(first.dolly).unwrap();
        let second = registry.ensure(&mut world, None).unwrap();

        assert_ne!(first.dolly, second.dolly);
        assert_eq!(first.lookat, second.lookat);
    }

    #[test]
    fn templates_are_hidden_markers() {
        let mut world = SceneWorld::new();
        let templates = TemplateRegistry::new().ensure(&mut world, None).unwrap();

        let dolly = world.object(templates.dolly).unwrap();
        assert!(dolly.hide_render && dolly.hide_viewport && dolly.hide_select);
        assert!(dolly.show_name);
        assert_eq!(dolly.name, "dolly(reference)");
    }

    #[test]
    fn instantiate_names_form_a_sorted_sequence() {
        let mut world = SceneWorld::new();
        let seq = world.create_collection("dolly");
        let templates = TemplateRegistry::new().ensure(&mut world, None).unwrap();

        for i in 0..3 {
            let pos = Vec3::new(i as f32, 0.0, 0.0);
            instantiate(&mut world, &templates, NodeRole::Dolly, pos, seq, false).unwrap();
        }

        let names: Vec<_> = world
            .collection(seq)
            .unwrap()
            .objects
            .iter()
            .map(|id| world.object_name(*id).unwrap().to_string())
            .collect();
        assert_eq!(names, ["dolly.000", "dolly.001", "dolly.002"]);
    }

    #[test]
    fn instantiate_remaps_file_coordinates() {
        let mut world = SceneWorld::new();
        let seq = world.create_collection("lookat");
        let templates = TemplateRegistry::new().ensure(&mut world, None).unwrap();

        let id = instantiate(
            &mut world,
            &templates,
            NodeRole::Lookat,
            Vec3::new(1.0, 3.0, -2.0),
            seq,
            true,
        )
        .unwrap();

        assert_eq!(world.object(id).unwrap().position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn instantiate_reveals_the_clone_and_links_it_once() {
        let mut world = SceneWorld::new();
        let home = world.create_collection("import.batch");
        let seq = world.create_collection("dolly");
        let mut registry = TemplateRegistry::new();
        let templates = registry.ensure(&mut world, Some(home)).unwrap();

        let id = instantiate(&mut world, &templates, NodeRole::Dolly, Vec3::ZERO, seq, false)
            .unwrap();

        let node = world.object(id).unwrap();
        assert!(!node.hide_render && !node.hide_viewport && !node.hide_select);
        assert_eq!(world.collections_of(id), &[seq]);
    }
}
