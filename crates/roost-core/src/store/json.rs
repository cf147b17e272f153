//! Catalog persisted as a single JSON document with atomic writes.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use roost_paths::RoostPaths;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::CatalogStore;
use super::errors::StoreError;
use crate::catalog::Catalog;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    catalog: Catalog,
}

#[derive(Debug, Clone)]
pub struct JsonCatalogStore {
    file: PathBuf,
    temp_file: PathBuf,
}

impl JsonCatalogStore {
    pub fn new(paths: &RoostPaths) -> Self {
        Self {
            file: paths.catalog_file(),
            temp_file: paths.catalog_temp_file(),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        warn!(
            event = "core.store.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err
        );
    }
}

impl CatalogStore for JsonCatalogStore {
    /// A missing file is an empty catalog.
    fn load(&self) -> Result<Catalog, StoreError> {
        let content = match fs::read_to_string(&self.file) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(event = "core.store.catalog_missing", path = %self.file.display());
                return Ok(Catalog::default());
            }
            Err(e) => {
                return Err(StoreError::IoError {
                    path: self.file.clone(),
                    source: e,
                });
            }
        };

        let document: CatalogDocument =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
                path: self.file.clone(),
                message: e.to_string(),
            })?;

        if document.version > FORMAT_VERSION {
            return Err(StoreError::Corrupt {
                path: self.file.clone(),
                message: format!(
                    "format version {} is newer than supported version {FORMAT_VERSION}",
                    document.version
                ),
            });
        }

        debug!(
            event = "core.store.load_completed",
            path = %self.file.display(),
            categories = document.catalog.categories.len()
        );
        Ok(document.catalog)
    }

    fn save(&mut self, catalog: &Catalog) -> Result<(), StoreError> {
        let io_error = |path: &Path, source| StoreError::IoError {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = self.file.parent() {
            fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;
        }

        let document = CatalogDocument {
            version: FORMAT_VERSION,
            saved_at: Some(Utc::now()),
            catalog: catalog.clone(),
        };
        let json = serde_json::to_string_pretty(&document)?;

        if let Err(e) = fs::write(&self.temp_file, json) {
            cleanup_temp_file(&self.temp_file, &e);
            return Err(io_error(&self.temp_file, e));
        }
        if let Err(e) = fs::rename(&self.temp_file, &self.file) {
            cleanup_temp_file(&self.temp_file, &e);
            return Err(io_error(&self.file, e));
        }

        info!(
            event = "core.store.save_completed",
            path = %self.file.display(),
            categories = catalog.categories.len()
        );
        Ok(())
    }
}
