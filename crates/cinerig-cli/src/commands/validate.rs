//! Interchange file validation

use anyhow::{Context, Result};
use cinerig_interchange::{load_document, validate_document};

pub fn run(path: &str) -> Result<()> {
    let doc = load_document(path).context("Failed to read interchange file")?;

    match validate_document(&doc) {
        Ok(()) => {
            println!("OK: {} splines", doc.export.len());
            Ok(())
        }
        Err(err) => anyhow::bail!("Invalid interchange file: {}", err),
    }
}
