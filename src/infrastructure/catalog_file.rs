use crate::domain::models::Item;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("catalog {path} contains duplicate id {id}")]
    DuplicateId { path: PathBuf, id: u64 },
}

/// On-disk layout:
///
/// ```toml
/// [[users]]
/// id = 1
/// name = "Alice"
/// email = "alice@example.com"
/// ```
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    users: Vec<Item>,
}

pub fn load_catalog(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&content, path)
}

fn parse_catalog(content: &str, path: &Path) -> Result<Vec<Item>, CatalogError> {
    let file: CatalogFile = toml::from_str(content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    for item in &file.users {
        if !seen.insert(item.id) {
            return Err(CatalogError::DuplicateId {
                path: path.to_path_buf(),
                id: item.id.0,
            });
        }
        if item.name.is_none() {
            tracing::warn!(id = item.id.0, "catalog entry has no name");
        }
    }

    Ok(file.users)
}
