//! Encoding a spline registry into an interchange document

use crate::format::{ExportDocument, SplineExport};
use cinerig_core::{axes, CinerigError, Result};
use cinerig_path::{order, validate::validate_tree, SplineRegistry};
use cinerig_scene::SceneWorld;
use std::fs;
use std::path::Path;

/// Build the interchange document for every registry entry, in registry
/// order.
///
/// Fails fast with `EmptyRegistry` before touching any entry; a dangling
/// entry fails with `BrokenReference` carrying its display name. Nothing
/// is mutated on any path.
pub fn export_registry(world: &SceneWorld, registry: &SplineRegistry) -> Result<ExportDocument> {
    if registry.is_empty() {
        return Err(CinerigError::EmptyRegistry);
    }

    let mut doc = ExportDocument {
        export: Vec::with_capacity(registry.len()),
    };

    for entry in registry.entries() {
        if !entry.is_valid(world) {
            return Err(CinerigError::BrokenReference(entry.name.clone()));
        }
        let (dolly_seq, lookat_seq) = validate_tree(world, entry.tree)?;

        let dolly_ids = world
            .collection(dolly_seq)
            .map(|c| c.objects.clone())
            .unwrap_or_default();
        let lookat_ids = world
            .collection(lookat_seq)
            .map(|c| c.objects.clone())
            .unwrap_or_default();

        let mut spline = SplineExport::new();
        for (dolly, lookat) in order::pair_by_rank(world, &dolly_ids, &lookat_ids) {
            let dolly_pos = world
                .object(dolly)
                .ok_or_else(|| CinerigError::ObjectNotFound(dolly.to_string()))?
                .position;
            let lookat_pos = world
                .object(lookat)
                .ok_or_else(|| CinerigError::ObjectNotFound(lookat.to_string()))?
                .position;
            spline.position.push(axes::to_runtime(dolly_pos).to_array());
            spline.lookat.push(axes::to_runtime(lookat_pos).to_array());
        }
        doc.export.push(spline);
    }

    log::debug!("exported {} splines", doc.export.len());
    Ok(doc)
}

/// Export to a pretty-printed JSON string
pub fn export_string(world: &SceneWorld, registry: &SplineRegistry) -> Result<String> {
    let doc = export_registry(world, registry)?;
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Export to a file. The document is fully built before the file is
/// touched, so a failed export writes nothing.
pub fn export_file<P: AsRef<Path>>(
    path: P,
    world: &SceneWorld,
    registry: &SplineRegistry,
) -> Result<()> {
    let content = export_string(world, registry)?;
    fs::write(path, content)?;
    Ok(())
}
