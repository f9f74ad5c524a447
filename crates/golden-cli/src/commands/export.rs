//! Export command handler

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use golden_core::{Catalogue, Repository};

use crate::output::Output;

/// Write every persisted collection as JSON to `path`, or to stdout
pub fn export<R: Repository>(
    catalogue: &Catalogue<R>,
    path: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let export = catalogue.export();

    match path {
        Some(path) => {
            let json = serde_json::to_string_pretty(&export).context("Failed to serialize export")?;
            fs::write(&path, json)
                .with_context(|| format!("Failed to write export file: {:?}", path))?;
            output.success(&format!(
                "Exported {} stories, {} authors, {} read lists to {}",
                export.stories.len(),
                export.authors.len(),
                export.read_lists.len(),
                path.display()
            ));
        }
        None => output.print_json(&export)?,
    }

    Ok(())
}
