//! SceneWorld - object and collection storage with explicit indices
//!
//! Membership ("which collections contain this object") and collection
//! parentage are maintained as indices at mutation time, so lookups never
//! scan the whole graph.

use crate::names::allocate_name;
use crate::object::SceneObject;
use cinerig_core::{CinerigError, CollectionId, ObjectId, Result};
use std::collections::HashMap;

/// A collection (container) of objects and child collections
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub name: String,
    pub objects: Vec<ObjectId>,
    pub children: Vec<CollectionId>,
    pub hide_viewport: bool,
}

/// The scene graph host
pub struct SceneWorld {
    objects: HashMap<ObjectId, SceneObject>,
    object_names: HashMap<String, ObjectId>,
    collections: HashMap<CollectionId, Collection>,
    collection_names: HashMap<String, CollectionId>,
    /// Object -> containing collections (back-reference index)
    memberships: HashMap<ObjectId, Vec<CollectionId>>,
    /// Child collection -> parent collection
    parents: HashMap<CollectionId, CollectionId>,
    /// The currently selected object, if any
    active: Option<ObjectId>,
}

impl Default for SceneWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneWorld {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            object_names: HashMap::new(),
            collections: HashMap::new(),
            collection_names: HashMap::new(),
            memberships: HashMap::new(),
            parents: HashMap::new(),
            active: None,
        }
    }

    // ---- objects ---------------------------------------------------------

    /// Add an object to the world.
    ///
    /// The object's requested name is deduplicated; the final name is
    /// readable through [`SceneWorld::object_name`].
    pub fn add_object(&mut self, mut object: SceneObject) -> ObjectId {
        let id = ObjectId::new();
        let name = allocate_name(&object.name, |n| self.object_names.contains_key(n));
        object.name = name.clone();

        self.objects.insert(id, object);
        self.object_names.insert(name, id);
        self.memberships.insert(id, Vec::new());
        id
    }

    /// Clone an object, including its collection memberships.
    ///
    /// The clone's name is allocated from the source name, so clones of a
    /// suffixed name extend the same sortable family.
    pub fn clone_object(&mut self, source: ObjectId) -> Result<ObjectId> {
        let object = self
            .objects
            .get(&source)
            .cloned()
            .ok_or_else(|| CinerigError::ObjectNotFound(source.to_string()))?;
        let containers = self.collections_of(source).to_vec();

        let id = self.add_object(object);
        for cid in containers {
            self.link_object(id, cid)?;
        }
        Ok(id)
    }

    /// Rename an object; the requested name is deduplicated again.
    /// Returns the final name.
    pub fn rename_object(&mut self, id: ObjectId, requested: &str) -> Result<String> {
        let old = self
            .objects
            .get(&id)
            .map(|o| o.name.clone())
            .ok_or_else(|| CinerigError::ObjectNotFound(id.to_string()))?;

        self.object_names.remove(&old);
        let name = allocate_name(requested, |n| self.object_names.contains_key(n));
        self.object_names.insert(name.clone(), id);
        if let Some(object) = self.objects.get_mut(&id) {
            object.name = name.clone();
        }
        Ok(name)
    }

    /// Delete an object, unlinking it from every collection
    pub fn delete_object(&mut self, id: ObjectId) -> Result<()> {
        let object = self
            .objects
            .remove(&id)
            .ok_or_else(|| CinerigError::ObjectNotFound(id.to_string()))?;

        self.object_names.remove(&object.name);
        if let Some(containers) = self.memberships.remove(&id) {
            for cid in containers {
                if let Some(collection) = self.collections.get_mut(&cid) {
                    collection.objects.retain(|o| *o != id);
                }
            }
        }
        if self.active == Some(id) {
            self.active = None;
        }
        Ok(())
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    pub fn object_id(&self, name: &str) -> Option<ObjectId> {
        self.object_names.get(name).copied()
    }

    pub fn object_name(&self, id: ObjectId) -> Option<&str> {
        self.objects.get(&id).map(|o| o.name.as_str())
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    // ---- collections -----------------------------------------------------

    /// Create a new empty collection; the requested name is deduplicated.
    pub fn create_collection(&mut self, requested: &str) -> CollectionId {
        let id = CollectionId::new();
        let name = allocate_name(requested, |n| self.collection_names.contains_key(n));

        self.collections.insert(
            id,
            Collection {
                name: name.clone(),
                ..Collection::default()
            },
        );
        self.collection_names.insert(name, id);
        id
    }

    /// Delete a collection.
    ///
    /// Members are unlinked (objects survive), child collections are
    /// orphaned, and the parent index is cleaned. Anything still holding
    /// this id observes a dangling reference from here on.
    pub fn delete_collection(&mut self, id: CollectionId) -> Result<()> {
        let collection = self
            .collections
            .remove(&id)
            .ok_or_else(|| CinerigError::CollectionNotFound(id.to_string()))?;

        self.collection_names.remove(&collection.name);
        for oid in &collection.objects {
            if let Some(containers) = self.memberships.get_mut(oid) {
                containers.retain(|c| *c != id);
            }
        }
        for child in &collection.children {
            self.parents.remove(child);
        }
        if let Some(parent) = self.parents.remove(&id) {
            if let Some(parent_collection) = self.collections.get_mut(&parent) {
                parent_collection.children.retain(|c| *c != id);
            }
        }
        Ok(())
    }

    /// Link a child collection under a parent, relinking if it already had one
    pub fn link_collection(&mut self, child: CollectionId, parent: CollectionId) -> Result<()> {
        if !self.collections.contains_key(&child) {
            return Err(CinerigError::CollectionNotFound(child.to_string()));
        }
        if !self.collections.contains_key(&parent) {
            return Err(CinerigError::CollectionNotFound(parent.to_string()));
        }

        if let Some(old) = self.parents.insert(child, parent) {
            if let Some(old_parent) = self.collections.get_mut(&old) {
                old_parent.children.retain(|c| *c != child);
            }
        }
        if let Some(parent_collection) = self.collections.get_mut(&parent) {
            parent_collection.children.push(child);
        }
        Ok(())
    }

    pub fn collection(&self, id: CollectionId) -> Option<&Collection> {
        self.collections.get(&id)
    }

    pub fn collection_mut(&mut self, id: CollectionId) -> Option<&mut Collection> {
        self.collections.get_mut(&id)
    }

    pub fn collection_id(&self, name: &str) -> Option<CollectionId> {
        self.collection_names.get(name).copied()
    }

    pub fn collection_name(&self, id: CollectionId) -> Option<&str> {
        self.collections.get(&id).map(|c| c.name.as_str())
    }

    /// Parent of a collection, via the index maintained at link time
    pub fn collection_parent(&self, id: CollectionId) -> Option<CollectionId> {
        self.parents.get(&id).copied()
    }

    // ---- membership ------------------------------------------------------

    /// Link an object into a collection (no-op if already a member)
    pub fn link_object(&mut self, object: ObjectId, collection: CollectionId) -> Result<()> {
        if !self.objects.contains_key(&object) {
            return Err(CinerigError::ObjectNotFound(object.to_string()));
        }
        let target = self
            .collections
            .get_mut(&collection)
            .ok_or_else(|| CinerigError::CollectionNotFound(collection.to_string()))?;

        let containers = self.memberships.entry(object).or_default();
        if !containers.contains(&collection) {
            containers.push(collection);
            target.objects.push(object);
        }
        Ok(())
    }

    /// Unlink an object from one collection
    pub fn unlink_object(&mut self, object: ObjectId, collection: CollectionId) -> Result<()> {
        let target = self
            .collections
            .get_mut(&collection)
            .ok_or_else(|| CinerigError::CollectionNotFound(collection.to_string()))?;

        target.objects.retain(|o| *o != object);
        if let Some(containers) = self.memberships.get_mut(&object) {
            containers.retain(|c| *c != collection);
        }
        Ok(())
    }

    /// Unlink an object from every collection, then link it into exactly one
    pub fn move_to_collection(&mut self, object: ObjectId, collection: CollectionId) -> Result<()> {
        let containers = self.collections_of(object).to_vec();
        for cid in containers {
            self.unlink_object(object, cid)?;
        }
        self.link_object(object, collection)
    }

    /// Collections containing an object
    pub fn collections_of(&self, object: ObjectId) -> &[CollectionId] {
        self.memberships
            .get(&object)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    // ---- selection -------------------------------------------------------

    pub fn set_active(&mut self, object: Option<ObjectId>) {
        self.active = object;
    }

    pub fn active(&self) -> Option<ObjectId> {
        self.active
    }
}
