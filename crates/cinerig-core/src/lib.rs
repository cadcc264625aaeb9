//! Cinerig Core - Foundational types for the cinerig spline toolkit
//!
//! This crate provides the types every other cinerig crate depends on:
//! - `ObjectId` / `CollectionId` - Stable scene identifiers
//! - `Vec3`, `Color` - Spatial and material types
//! - `axes` - The authoring/runtime axis remap
//! - Error types and Result alias

pub mod axes;
mod error;
mod id;
mod types;

pub use error::{CinerigError, Result};
pub use id::{CollectionId, ObjectId};
pub use types::{Color, Vec3};
