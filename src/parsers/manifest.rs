//! Name and description of TOML package manifests

use crate::error::{CodemapError, Result};
use crate::models::package::name_and_description;
use std::path::Path;
use toml::Value;

pub const CARGO_TOML: &str = "Cargo.toml";
pub const PYPROJECT_TOML: &str = "pyproject.toml";

const CARGO_TABLES: &[&[&str]] = &[&["package"]];
const PYPROJECT_TABLES: &[&[&str]] = &[&["project"], &["tool", "poetry"]];

/// `name - description` of a Cargo or pyproject manifest.
///
/// `file_name` selects the table layout; other names yield `Ok(None)`.
pub fn describe_toml_manifest(file_name: &str, source: &str, path: &Path) -> Result<Option<String>> {
    let tables: &[&[&str]] = match file_name {
        CARGO_TOML => CARGO_TABLES,
        PYPROJECT_TOML => PYPROJECT_TABLES,
        _ => return Ok(None),
    };

    let document: toml::Table = toml::from_str(source).map_err(|e| CodemapError::TomlParse {
        file: path.to_path_buf(),
        source: e,
    })?;

    Ok(tables
        .iter()
        .filter_map(|keys| lookup(&document, keys))
        .find_map(|table| {
            name_and_description(
                table.get("name").and_then(Value::as_str),
                table.get("description").and_then(Value::as_str),
            )
        }))
}

fn lookup<'a>(document: &'a toml::Table, keys: &[&str]) -> Option<&'a toml::Table> {
    let (first, rest) = keys.split_first()?;
    rest.iter()
        .try_fold(document.get(*first)?, |value, key| value.get(*key))
        .and_then(Value::as_table)
}
