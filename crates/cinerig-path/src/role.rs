//! Node roles and their naming/material conventions

use cinerig_core::Color;

/// The role of a node within a spline tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// Camera position keyframe
    Dolly,
    /// Aim-target keyframe
    Lookat,
}

impl NodeRole {
    /// Name of the sequence collection holding nodes of this role.
    /// Lookups match by prefix, since the allocator suffixes later trees'
    /// sequences (`dolly`, `dolly.000`, ...).
    pub fn sequence_name(&self) -> &'static str {
        match self {
            NodeRole::Dolly => "dolly",
            NodeRole::Lookat => "lookat",
        }
    }

    /// Prefix that identifies node objects of this role
    pub fn node_prefix(&self) -> &'static str {
        match self {
            NodeRole::Dolly => "dolly.",
            NodeRole::Lookat => "lookat.",
        }
    }

    /// The fixed base every clone is renamed to. Starting all clones at
    /// `.000` keeps the family free of an unsuffixed member that would
    /// sort after its suffixed siblings.
    pub fn clone_base(&self) -> &'static str {
        match self {
            NodeRole::Dolly => "dolly.000",
            NodeRole::Lookat => "lookat.000",
        }
    }

    /// Name of the canonical template object for this role
    pub fn template_name(&self) -> &'static str {
        match self {
            NodeRole::Dolly => "dolly(reference)",
            NodeRole::Lookat => "lookat(reference)",
        }
    }

    /// Name of the template marker material
    pub fn material_name(&self) -> &'static str {
        match self {
            NodeRole::Dolly => "spline.dolly",
            NodeRole::Lookat => "spline.lookat",
        }
    }

    /// Marker color distinguishing the two roles in the viewport
    pub fn marker_color(&self) -> Color {
        match self {
            NodeRole::Dolly => Color::GREEN,
            NodeRole::Lookat => Color::BLUE,
        }
    }
}
