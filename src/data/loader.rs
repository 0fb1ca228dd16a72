use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::{Catalog, CatalogError, Question};

/// Error loading a question catalog from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog in {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Load and validate a catalog from a JSON array of questions.
pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&json_content).map_err(|err| match err {
        ParseFailure::Json(source) => LoadError::Parse {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Catalog(source) => LoadError::Invalid {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!(path = %path.display(), questions = catalog.len(), "loaded question catalog");
    Ok(catalog)
}

#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub fn parse_catalog(json: &str) -> Result<Catalog, ParseFailure> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    Ok(Catalog::new(questions)?)
}
