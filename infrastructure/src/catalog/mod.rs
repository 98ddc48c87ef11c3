//! Catalog loading — question catalogs from TOML files.

mod toml_loader;

pub use toml_loader::{CatalogLoadError, TomlCatalogLoader};
