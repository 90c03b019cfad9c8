//! # Catalog Sinks
//!
//! Where a finished catalog goes. Generation never writes anything itself; the
//! caller hands a complete [`Catalog`] to a sink once every category succeeded.

use crate::{Catalog, ItemForgeResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Destination for a finished catalog.
pub trait CatalogSink {
    fn write(&mut self, catalog: &Catalog) -> ItemForgeResult<()>;
}

/// Serializes a catalog the way it is stored on disk: pretty JSON with a
/// trailing newline.
pub fn to_pretty_json(catalog: &Catalog) -> ItemForgeResult<String> {
    let mut json = serde_json::to_string_pretty(catalog)?;
    json.push('\n');
    Ok(json)
}

/// Writes the catalog to a JSON file, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSink for JsonFileSink {
    fn write(&mut self, catalog: &Catalog) -> ItemForgeResult<()> {
        let json = to_pretty_json(catalog)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, json)?;
        info!("Wrote {} items to {}", catalog.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CatalogAssembler, GenerationConfig, Item, Lexicon};
    use tempfile::TempDir;

    fn small_catalog() -> ItemForgeResult<Catalog> {
        let lexicon = Lexicon::standard();
        CatalogAssembler::new(&lexicon).assemble(&GenerationConfig::for_testing(3))
    }

    #[test]
    fn test_file_sink_creates_parent_directories() -> ItemForgeResult<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("assets").join("data").join("items.json");
        let catalog = small_catalog()?;

        let mut sink = JsonFileSink::new(&path);
        sink.write(&catalog)?;

        let written = fs::read_to_string(sink.path())?;
        assert!(written.ends_with("}\n"));
        assert_eq!(written, to_pretty_json(&catalog)?);
        let parsed: Catalog = serde_json::from_str(&written)?;
        let ids: Vec<&str> = parsed.items().map(Item::id).collect();
        let expected: Vec<&str> = catalog.items().map(Item::id).collect();
        assert_eq!(ids, expected);
        Ok(())
    }
}
