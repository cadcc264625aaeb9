//! Interchange file inspection

use anyhow::{Context, Result};
use cinerig_interchange::load_document;

pub fn run(path: &str) -> Result<()> {
    let doc = load_document(path).context("Failed to read interchange file")?;

    println!("Splines: {}", doc.export.len());
    for (index, spline) in doc.export.iter().enumerate() {
        println!(
            "  [{}] duration {}s, {} position nodes, {} lookat nodes",
            index,
            spline.duration,
            spline.position.len(),
            spline.lookat.len()
        );
    }

    Ok(())
}
