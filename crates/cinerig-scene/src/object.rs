//! Scene objects and materials

use cinerig_core::{Color, Vec3};

/// A named material with a flat display color
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub color: Color,
}

impl Material {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// A scene object: a named marker with a transform and visibility flags
///
/// The `name` field is the requested name; the world deduplicates it on
/// insertion and keeps it in sync afterwards. `rotation` is Euler degrees,
/// carried through untouched by every spline operation.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub position: Vec3,
    pub rotation: Vec3,
    pub hide_render: bool,
    pub hide_viewport: bool,
    pub hide_select: bool,
    pub show_name: bool,
    pub material: Option<Material>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            hide_render: false,
            hide_viewport: false,
            hide_select: false,
            show_name: false,
            material: None,
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Configure the object as a hidden, non-selectable, name-displaying
    /// marker (the template configuration).
    pub fn as_hidden_marker(mut self) -> Self {
        self.hide_render = true;
        self.hide_viewport = true;
        self.hide_select = true;
        self.show_name = true;
        self
    }

    /// Clear the hidden-marker flags on a freshly instantiated clone.
    pub fn reveal(&mut self) {
        self.hide_render = false;
        self.hide_viewport = false;
        self.hide_select = false;
    }
}
