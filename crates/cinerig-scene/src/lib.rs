//! Cinerig Scene - the scene-graph host collaborator
//!
//! Provides the minimal object system the spline model is authored
//! against: named objects and collections, cloning with deterministic
//! uniqueness-suffixed names, explicit membership and parent indices,
//! and an active-object selection slot.

mod names;
mod object;
mod world;

pub use names::allocate_name;
pub use object::{Material, SceneObject};
pub use world::{Collection, SceneWorld};
