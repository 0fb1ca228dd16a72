mod builtin;
mod loader;

pub use builtin::builtin_catalog;
pub use loader::{LoadError, ParseFailure, load_catalog_from_json, parse_catalog};
