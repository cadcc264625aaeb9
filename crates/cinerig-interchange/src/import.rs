//! Rebuilding a scene from an interchange document

use crate::format::ExportDocument;
use chrono::Local;
use cinerig_core::{CinerigError, CollectionId, Result, Vec3};
use cinerig_path::{create_tree, instantiate, NodeRole, SplineRegistry, TemplateRegistry};
use cinerig_scene::SceneWorld;
use std::fs;
use std::path::Path;

/// Parse an interchange document from a JSON string
pub fn parse_document(content: &str) -> Result<ExportDocument> {
    serde_json::from_str(content).map_err(|e| CinerigError::Parse(e.to_string()))
}

/// Read and parse an interchange document from a file
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<ExportDocument> {
    let content = fs::read_to_string(path)?;
    parse_document(&content)
}

/// Rebuild the registry and scene from an already-parsed document.
///
/// Destructive: the registry is cleared first. Callers must read and
/// parse before invoking, so a bad file never reaches this point and the
/// prior registry survives it. All splines land under one timestamp-named
/// batch collection, which is returned so the session can adopt it as the
/// new root.
///
/// Nodes are instantiated in list order; the allocator hands out strictly
/// increasing name suffixes, so the i-th created node is also the i-th by
/// sort rank and the document's index alignment becomes rank alignment in
/// the scene.
pub fn import_document(
    world: &mut SceneWorld,
    registry: &mut SplineRegistry,
    templates: &mut TemplateRegistry,
    doc: &ExportDocument,
) -> Result<CollectionId> {
    registry.clear();

    let batch = world.create_collection(&batch_name());
    let handles = templates.ensure(world, Some(batch))?;

    for spline in &doc.export {
        let tree = create_tree(world, Some(batch))?;
        let name = world
            .collection_name(tree.spline)
            .unwrap_or(cinerig_path::TREE_NAME)
            .to_string();
        registry.add(name, tree.spline);

        for p in &spline.position {
            instantiate(
                world,
                &handles,
                NodeRole::Dolly,
                Vec3::from_array(*p),
                tree.dolly,
                true,
            )?;
        }
        for p in &spline.lookat {
            instantiate(
                world,
                &handles,
                NodeRole::Lookat,
                Vec3::from_array(*p),
                tree.lookat,
                true,
            )?;
        }
    }

    log::info!("imported {} splines", doc.export.len());
    Ok(batch)
}

fn batch_name() -> String {
    format!("import.{}", Local::now().format("%Y-%m-%d %H:%M:%S"))
}
