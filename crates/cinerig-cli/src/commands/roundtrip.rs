//! Import an interchange file into a fresh session and export it again
//!
//! Exercises the full pipeline: file-space coordinates through the
//! authoring-space scene graph and back, with pairing re-derived from
//! node name ranks rather than carried over from the input lists.

use anyhow::{Context, Result};
use cinerig_session::{DiskStore, Session};

pub fn run(input: &str, output: &str) -> Result<()> {
    let mut files = DiskStore;
    let mut session = Session::new();

    let imported = session
        .import_file(&files, input)
        .context("Failed to rebuild scene")?;
    println!("{}", imported);

    session
        .export_all(&mut files, output)
        .context("Failed to export")?;
    println!("Wrote {}", output);
    Ok(())
}
