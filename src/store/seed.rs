//! Seed catalogs loaded from YAML.
//!
//! The bundled catalog ships inside the binary; a custom file with the same
//! `tools:` layout may be used instead.

use std::path::Path;

use serde::Deserialize;

use crate::domain::Tool;
use crate::error::{Result, ToolmatchError};
use crate::store::catalog_store::CatalogStore;

const BUNDLED_CATALOG: &str = include_str!("../../data/tools.yml");

/// YAML file structure
#[derive(Debug, Deserialize)]
struct SeedFile {
    tools: Vec<Tool>,
}

/// The starter catalog bundled with toolmatch.
pub fn bundled_tools() -> Result<Vec<Tool>> {
    parse_seed(BUNDLED_CATALOG)
}

/// Load a seed catalog from a YAML file.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Tool>> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        ToolmatchError::Storage(format!("Failed to read seed file {}: {}", path.as_ref().display(), e))
    })?;
    parse_seed(&content)
}

/// Parse a seed catalog from YAML text.
pub fn parse_seed(content: &str) -> Result<Vec<Tool>> {
    let seed: SeedFile = serde_yaml::from_str(content)?;
    Ok(seed.tools)
}

impl CatalogStore {
    /// Insert `tools` only when the catalog is empty.
    ///
    /// Returns the number of tools inserted (0 when data already exists).
    pub fn seed_if_empty(&mut self, tools: &[Tool]) -> Result<usize> {
        let existing = self.count_tools()?;
        if existing > 0 {
            log::info!("Catalog already contains {} tools, skipping seed", existing);
            return Ok(0);
        }

        let inserted = self.insert_tools(tools)?;
        log::info!("Seeded catalog with {} tools", inserted.len());
        Ok(inserted.len())
    }
}
