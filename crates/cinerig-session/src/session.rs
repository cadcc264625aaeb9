//! The session: shared state plus the commands the UI layer calls

use crate::files::FileStore;
use chrono::Local;
use cinerig_core::{CinerigError, CollectionId, ObjectId, Result, Vec3};
use cinerig_interchange::{export_string, import_document, parse_document};
use cinerig_path::{
    create_tree, instantiate, resolve_preview, NodeRole, SplineRegistry, TemplateRegistry,
};
use cinerig_scene::{SceneObject, SceneWorld};

/// Name of the viewer camera object
pub const CAMERA_NAME: &str = "cinerig.camera";

/// Viewport state toggled by preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Perspective,
    Camera,
}

#[derive(Debug)]
struct PreviewState {
    target: ObjectId,
    hidden: Vec<CollectionId>,
}

/// One authoring session.
///
/// Replaces the original's process-wide globals with a single explicit
/// object: world, registry and templates live here and nowhere else.
pub struct Session {
    pub world: SceneWorld,
    pub registry: SplineRegistry,
    pub templates: TemplateRegistry,
    root: Option<CollectionId>,
    camera: Option<ObjectId>,
    preview: Option<PreviewState>,
    view: ViewMode,
    status_message: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            world: SceneWorld::new(),
            registry: SplineRegistry::new(),
            templates: TemplateRegistry::new(),
            root: None,
            camera: None,
            preview: None,
            view: ViewMode::Perspective,
            status_message: String::new(),
        }
    }

    /// The collection new splines are created under
    pub fn root(&self) -> Option<CollectionId> {
        self.root
    }

    pub fn set_root(&mut self, root: Option<CollectionId>) {
        self.root = root;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    /// The active aim-target constraint, while a preview is running
    pub fn preview_target(&self) -> Option<ObjectId> {
        self.preview.as_ref().map(|p| p.target)
    }

    pub fn camera(&self) -> Option<ObjectId> {
        self.camera
    }

    /// Message describing the last successful export
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    // ---- commands --------------------------------------------------------

    /// Create the template markers if they do not exist yet
    pub fn ensure_templates(&mut self) -> Result<String> {
        self.templates.ensure(&mut self.world, self.root)?;
        Ok("Templates ready".to_string())
    }

    /// Add an empty spline tree and select it in the list
    pub fn add_spline(&mut self) -> Result<String> {
        self.add_spline_inner(None)
    }

    /// Add a spline tree seeded with one DOLLY and one LOOKAT node at the
    /// cursor position (taken verbatim, no axis remap)
    pub fn add_spline_with_nodes(&mut self, cursor: Vec3) -> Result<String> {
        self.add_spline_inner(Some(cursor))
    }

    fn add_spline_inner(&mut self, cursor: Option<Vec3>) -> Result<String> {
        let tree = create_tree(&mut self.world, self.root)?;
        let name = self
            .world
            .collection_name(tree.spline)
            .unwrap_or(cinerig_path::TREE_NAME)
            .to_string();

        let index = self.registry.add(name.clone(), tree.spline);
        self.registry.set_active(index);

        let templates = self.templates.ensure(&mut self.world, self.root)?;
        if let Some(cursor) = cursor {
            instantiate(
                &mut self.world,
                &templates,
                NodeRole::Dolly,
                cursor,
                tree.dolly,
                false,
            )?;
            instantiate(
                &mut self.world,
                &templates,
                NodeRole::Lookat,
                cursor,
                tree.lookat,
                false,
            )?;
        }

        log::debug!("added spline '{}'", name);
        Ok(format!("Added spline '{}'", name))
    }

    /// Remove a list entry. The underlying collections are not deleted.
    pub fn remove_spline_at(&mut self, index: usize) -> Result<String> {
        match self.registry.remove_at(index) {
            Some(entry) => Ok(format!("Removed '{}' from the list", entry.name)),
            None => Ok("Nothing to remove".to_string()),
        }
    }

    /// Reorder the list; out-of-range indices are a no-op
    pub fn move_spline(&mut self, from: usize, to: usize) -> Result<String> {
        self.registry.move_to(from, to);
        Ok("Spline list reordered".to_string())
    }

    /// Clear the list. The underlying collections are not deleted.
    pub fn clear_registry(&mut self) -> Result<String> {
        self.registry.clear();
        Ok("Spline list cleared".to_string())
    }

    /// Toggle viewport visibility of one listed spline
    pub fn toggle_spline_hidden(&mut self, index: usize) -> Result<String> {
        let (tree, name) = match self.registry.get(index) {
            Some(entry) => (entry.tree, entry.name.clone()),
            None => return Ok("Nothing to toggle".to_string()),
        };
        match self.world.collection_mut(tree) {
            Some(collection) => {
                collection.hide_viewport = !collection.hide_viewport;
                let state = if collection.hide_viewport {
                    "hidden"
                } else {
                    "shown"
                };
                Ok(format!("Spline '{}' {}", name, state))
            }
            None => Err(CinerigError::BrokenReference(name)),
        }
    }

    /// Export every listed spline to `path` through the file collaborator
    pub fn export_all(&mut self, files: &mut dyn FileStore, path: &str) -> Result<String> {
        let content = export_string(&self.world, &self.registry)?;
        files.write(path, &content)?;
        self.status_message = format!(
            "File generated at: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        Ok("File generated".to_string())
    }

    /// Import an interchange file, replacing the current list.
    ///
    /// Read and parse happen before any mutation: an unreadable or
    /// malformed file leaves the registry exactly as it was.
    pub fn import_file(&mut self, files: &dyn FileStore, path: &str) -> Result<String> {
        let content = files.read(path)?;
        let doc = parse_document(&content)?;

        let batch = import_document(
            &mut self.world,
            &mut self.registry,
            &mut self.templates,
            &doc,
        )?;
        self.root = Some(batch);
        Ok(format!("Imported {} splines", doc.export.len()))
    }

    /// Add the viewer camera to the scene, once
    pub fn add_camera(&mut self) -> Result<String> {
        if self
            .camera
            .map(|id| self.world.object(id).is_some())
            .unwrap_or(false)
        {
            return Err(CinerigError::CameraExists);
        }
        let id = self.world.add_object(SceneObject::new(CAMERA_NAME));
        self.camera = Some(id);
        Ok("Camera added".to_string())
    }

    /// Enter preview: move the viewer camera to the selected DOLLY node,
    /// aim it at the paired LOOKAT node and hide the listed splines.
    pub fn resolve_preview(&mut self) -> Result<String> {
        self.cancel_preview()?;

        let selected = self.world.active().ok_or(CinerigError::NothingSelected)?;
        let name = self
            .world
            .object_name(selected)
            .ok_or(CinerigError::NothingSelected)?
            .to_string();
        if !name.starts_with(NodeRole::Dolly.node_prefix()) {
            return Err(CinerigError::NotADollyNode(name));
        }

        let camera = self
            .camera
            .filter(|id| self.world.object(*id).is_some())
            .ok_or(CinerigError::CameraMissing)?;

        let pose = resolve_preview(&self.world, selected)?;

        if let Some(cam) = self.world.object_mut(camera) {
            cam.position = pose.position;
            cam.rotation = pose.rotation;
        }

        let hidden: Vec<CollectionId> = self
            .registry
            .entries()
            .iter()
            .filter(|e| e.is_valid(&self.world))
            .map(|e| e.tree)
            .collect();
        for tree in &hidden {
            if let Some(collection) = self.world.collection_mut(*tree) {
                collection.hide_viewport = true;
            }
        }

        self.preview = Some(PreviewState {
            target: pose.target,
            hidden,
        });
        self.view = ViewMode::Camera;
        Ok("Preview active".to_string())
    }

    /// Leave preview: perspective view, aim constraint dropped, splines
    /// shown again. Safe to call when no preview is running.
    pub fn cancel_preview(&mut self) -> Result<String> {
        self.view = ViewMode::Perspective;
        if let Some(state) = self.preview.take() {
            for tree in state.hidden {
                if let Some(collection) = self.world.collection_mut(tree) {
                    collection.hide_viewport = false;
                }
            }
        }
        Ok("Preview cancelled".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::MemoryStore;

    fn session_with_exportable_spline() -> Session {
        let mut session = Session::new();
        session.add_spline().unwrap();
        let tree = session.registry.get(0).unwrap().tree;
        let dolly = cinerig_path::sequence_of(&session.world, tree, NodeRole::Dolly).unwrap();
        let lookat = cinerig_path::sequence_of(&session.world, tree, NodeRole::Lookat).unwrap();

        let templates = session
            .templates
            .ensure(&mut session.world, None)
            .unwrap();
        for i in 0..4 {
            instantiate(
                &mut session.world,
                &templates,
                NodeRole::Dolly,
                Vec3::new(i as f32, 0.0, 0.0),
                dolly,
                false,
            )
            .unwrap();
            instantiate(
                &mut session.world,
                &templates,
                NodeRole::Lookat,
                Vec3::new(i as f32, 0.0, 1.0),
                lookat,
                false,
            )
            .unwrap();
        }
        session
    }

    #[test]
    fn add_spline_with_nodes_places_cursor_verbatim() {
        let mut session = Session::new();
        let cursor = Vec3::new(5.0, -2.0, 7.0);
        session.add_spline_with_nodes(cursor).unwrap();

        let dolly = session.world.object_id("dolly.000").unwrap();
        assert_eq!(session.world.object(dolly).unwrap().position, cursor);
        let lookat = session.world.object_id("lookat.000").unwrap();
        assert_eq!(session.world.object(lookat).unwrap().position, cursor);
    }

    #[test]
    fn export_writes_through_the_store_and_stamps_status() {
        let mut session = session_with_exportable_spline();
        let mut store = MemoryStore::new();

        session.export_all(&mut store, "out.json").unwrap();

        let written = store.get("out.json").unwrap();
        assert!(written.contains("\"export\""));
        assert!(session.status_message().starts_with("File generated at:"));
    }

    #[test]
    fn failed_export_writes_nothing() {
        let mut session = Session::new();
        let mut store = MemoryStore::new();

        let result = session.export_all(&mut store, "out.json");

        assert!(matches!(result, Err(CinerigError::EmptyRegistry)));
        assert!(store.get("out.json").is_none());
        assert_eq!(session.status_message(), "");
    }

    #[test]
    fn malformed_import_leaves_registry_untouched() {
        let mut session = session_with_exportable_spline();
        let mut store = MemoryStore::new();
        store.insert("bad.json", "{ this is not json");

        let result = session.import_file(&store, "bad.json");

        assert!(matches!(result, Err(CinerigError::Parse(_))));
        assert_eq!(session.registry.len(), 1);

        let missing = session.import_file(&store, "absent.json");
        assert!(matches!(missing, Err(CinerigError::Io(_))));
        assert_eq!(session.registry.len(), 1);
    }

    #[test]
    fn export_then_import_replaces_the_list() {
        let mut session = session_with_exportable_spline();
        let mut store = MemoryStore::new();
        session.export_all(&mut store, "paths.json").unwrap();

        session.import_file(&store, "paths.json").unwrap();

        assert_eq!(session.registry.len(), 1);
        assert!(session.root().is_some());
        let root_name = session
            .world
            .collection_name(session.root().unwrap())
            .unwrap();
        assert!(root_name.starts_with("import."));
    }

    #[test]
    fn toggle_spline_hidden_flips_the_collection() {
        let mut session = session_with_exportable_spline();
        let tree = session.registry.get(0).unwrap().tree;

        session.toggle_spline_hidden(0).unwrap();
        assert!(session.world.collection(tree).unwrap().hide_viewport);
        session.toggle_spline_hidden(0).unwrap();
        assert!(!session.world.collection(tree).unwrap().hide_viewport);

        session.world.delete_collection(tree).unwrap();
        assert!(matches!(
            session.toggle_spline_hidden(0),
            Err(CinerigError::BrokenReference(_))
        ));
    }

    #[test]
    fn camera_is_added_once() {
        let mut session = Session::new();
        assert!(session.add_camera().is_ok());
        assert!(matches!(
            session.add_camera(),
            Err(CinerigError::CameraExists)
        ));
    }

    #[test]
    fn preview_aims_camera_at_paired_lookat() {
        let mut session = session_with_exportable_spline();
        session.add_camera().unwrap();

        let selected = session.world.object_id("dolly.002").unwrap();
        session.world.set_active(Some(selected));
        session.resolve_preview().unwrap();

        assert_eq!(session.view_mode(), ViewMode::Camera);
        let target = session.preview_target().unwrap();
        assert_eq!(session.world.object_name(target), Some("lookat.002"));

        let camera = session.camera().unwrap();
        assert_eq!(
            session.world.object(camera).unwrap().position,
            Vec3::new(2.0, 0.0, 0.0)
        );

        let tree = session.registry.get(0).unwrap().tree;
        assert!(session.world.collection(tree).unwrap().hide_viewport);
    }

    #[test]
    fn cancel_preview_restores_viewport_state() {
        let mut session = session_with_exportable_spline();
        session.add_camera().unwrap();
        let selected = session.world.object_id("dolly.000").unwrap();
        session.world.set_active(Some(selected));
        session.resolve_preview().unwrap();

        session.cancel_preview().unwrap();

        assert_eq!(session.view_mode(), ViewMode::Perspective);
        assert!(session.preview_target().is_none());
        let tree = session.registry.get(0).unwrap().tree;
        assert!(!session.world.collection(tree).unwrap().hide_viewport);
    }

    #[test]
    fn preview_requires_selection_camera_and_dolly() {
        let mut session = session_with_exportable_spline();

        assert!(matches!(
            session.resolve_preview(),
            Err(CinerigError::NothingSelected)
        ));

        let lookat = session.world.object_id("lookat.000").unwrap();
        session.world.set_active(Some(lookat));
        assert!(matches!(
            session.resolve_preview(),
            Err(CinerigError::NotADollyNode(_))
        ));

        let dolly = session.world.object_id("dolly.000").unwrap();
        session.world.set_active(Some(dolly));
        assert!(matches!(
            session.resolve_preview(),
            Err(CinerigError::CameraMissing)
        ));
    }

    #[test]
    fn failed_preview_leaves_session_usable() {
        let mut session = session_with_exportable_spline();
        session.add_camera().unwrap();
        assert!(session.resolve_preview().is_err());

        let selected = session.world.object_id("dolly.001").unwrap();
        session.world.set_active(Some(selected));
        assert!(session.resolve_preview().is_ok());
    }
}
