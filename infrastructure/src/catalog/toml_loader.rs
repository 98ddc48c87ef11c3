//! TOML catalog loader
//!
//! Reads a question catalog from a file of `[[categories]]` tables:
//!
//! ```toml
//! [[categories]]
//! id = "vision_strategy"
//! title = "비전 및 전략"
//! short_title = "비전/전략"
//!
//! [[categories.questions]]
//! id = "q_vision_1"
//! text = "..."
//! ```

use maturity_domain::{Catalog, Category, DomainError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading a catalog file
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Malformed catalog {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
}

/// Loads catalogs from TOML files
pub struct TomlCatalogLoader;

impl TomlCatalogLoader {
    /// Load and validate a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog, CatalogLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&content).map_err(|e| e.at(path))?;
        info!(
            "Loaded catalog from {} ({} categories, {} questions)",
            path.display(),
            catalog.len(),
            catalog.total_questions()
        );
        Ok(catalog)
    }

    /// Load the catalog file when given, otherwise the built-in catalog
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("Using built-in catalog");
                Ok(Catalog::builtin())
            }
        }
    }

    fn parse(content: &str) -> Result<Catalog, ParseFailure> {
        let file: CatalogFile = toml::from_str(content).map_err(ParseFailure::Toml)?;
        Catalog::new(file.categories).map_err(ParseFailure::Domain)
    }
}

enum ParseFailure {
    Toml(toml::de::Error),
    Domain(DomainError),
}

impl ParseFailure {
    fn at(self, path: &Path) -> CatalogLoadError {
        let path = path.to_path_buf();
        match self {
            ParseFailure::Toml(source) => CatalogLoadError::Parse { path, source },
            ParseFailure::Domain(source) => CatalogLoadError::Malformed { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CATEGORIES: &str = r#"
[[categories]]
id = "people"
title = "People"
short_title = "People"

[[categories.questions]]
id = "p1"
text = "Do people use AI daily?"

[[categories.questions]]
id = "p2"
text = "Is training available?"

[categories.guidance]
analysis = "Adoption depends on habits."
recommendations = ["Run weekly demos"]

[[categories]]
id = "data"
title = "Data"
short_title = "Data"

[[categories.questions]]
id = "d1"
text = "Is data catalogued?"
"#;

    fn write(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_valid_catalog() {
        let (_dir, path) = write(TWO_CATEGORIES);
        let catalog = TomlCatalogLoader::load(&path).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.total_questions(), 3);
        let people = catalog.find_category("people").unwrap();
        assert_eq!(
            people.guidance.as_ref().unwrap().recommendations,
            vec!["Run weekly demos".to_string()]
        );
        assert!(catalog.find_category("data").unwrap().guidance.is_none());
    }

    #[test]
    fn test_duplicate_question_is_malformed() {
        let content = TWO_CATEGORIES.replace("id = \"d1\"", "id = \"p1\"");
        let (_dir, path) = write(&content);

        let err = TomlCatalogLoader::load(&path).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::Malformed {
                source: DomainError::DuplicateQuestionId(ref id),
                ..
            } if id == "p1"
        ));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let (_dir, path) = write("[[categories]\nid = ");
        assert!(matches!(
            TomlCatalogLoader::load(&path),
            Err(CatalogLoadError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        assert!(matches!(
            TomlCatalogLoader::load("/nonexistent/catalog.toml"),
            Err(CatalogLoadError::Read { .. })
        ));
    }

    #[test]
    fn test_builtin_fallback() {
        let catalog = TomlCatalogLoader::load_or_builtin(None).unwrap();
        assert_eq!(catalog.total_questions(), 35);
    }
}
