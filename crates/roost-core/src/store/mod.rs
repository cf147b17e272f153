mod errors;
mod json;

pub use errors::StoreError;
pub use json::JsonCatalogStore;

use crate::catalog::Catalog;

/// Where the catalog lives between runs.
pub trait CatalogStore {
    fn load(&self) -> Result<Catalog, StoreError>;
    fn save(&mut self, catalog: &Catalog) -> Result<(), StoreError>;
}
