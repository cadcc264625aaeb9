//! Interchange document definitions

use cinerig_core::{CinerigError, Result};
use cinerig_path::validate::MIN_NODES;
use serde::{Deserialize, Serialize};

/// Placeholder duration written for every spline; the runtime supplies
/// real timing elsewhere.
pub const DEFAULT_DURATION: u32 = 10;

/// Root structure of an interchange file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub export: Vec<SplineExport>,
}

/// One spline path: runtime-space position and lookat lists, index-aligned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplineExport {
    #[serde(default = "default_duration")]
    pub duration: u32,
    pub position: Vec<[f32; 3]>,
    pub lookat: Vec<[f32; 3]>,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION
}

impl SplineExport {
    pub fn new() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            position: Vec::new(),
            lookat: Vec::new(),
        }
    }
}

impl Default for SplineExport {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a parsed document against the structural rules every spline
/// must satisfy: equal list lengths, at least [`MIN_NODES`] entries.
pub fn validate_document(doc: &ExportDocument) -> Result<()> {
    for (index, spline) in doc.export.iter().enumerate() {
        let label = format!("export[{}]", index);
        if spline.position.len() != spline.lookat.len() {
            return Err(CinerigError::CountMismatch {
                tree: label,
                dolly: spline.position.len(),
                lookat: spline.lookat.len(),
            });
        }
        if spline.position.len() < MIN_NODES {
            return Err(CinerigError::MinimumCount {
                tree: label,
                count: spline.position.len(),
            });
        }
    }
    Ok(())
}
