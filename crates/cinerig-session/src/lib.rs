//! Cinerig Session - session state and the command boundary
//!
//! A [`Session`] owns everything a host UI needs behind its buttons: the
//! scene world, the spline registry, the template registry, the viewer
//! camera and the preview state. Every command runs to completion as one
//! synchronous step and reports through a notification sink; failures are
//! caught at the command boundary and never poison the session.

mod files;
mod notify;
mod session;

pub use files::{DiskStore, FileStore, MemoryStore};
pub use notify::{report, ConsoleNotifier, Notifier};
pub use session::{Session, ViewMode, CAMERA_NAME};
