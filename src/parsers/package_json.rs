//! Package.json parsing
//!
//! Only the fields that describe a package or point at its executables are
//! extracted; values of the wrong JSON type are ignored rather than rejected.

use crate::error::{CodemapError, Result};
use crate::models::package::{BinField, PackageDetails};
use crate::utils::read_source;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Manifest file name
pub const PACKAGE_JSON: &str = "package.json";

/// Parser for package.json files
pub struct PackageJsonParser;

impl PackageJsonParser {
    /// Parse package.json content into PackageDetails
    pub fn parse(content: &str) -> Result<PackageDetails> {
        let json_value: Value = serde_json::from_str(content)
            .map_err(|e| CodemapError::json_parse_error(PACKAGE_JSON, e))?;

        let obj = match json_value {
            Value::Object(obj) => obj,
            _ => {
                return Err(CodemapError::InvalidManifest {
                    path: PACKAGE_JSON.into(),
                    message: "Root value is not an object".into(),
                });
            }
        };

        Ok(PackageDetails {
            name: Self::extract_optional_string(&obj, "name"),
            description: Self::extract_optional_string(&obj, "description"),
            main: Self::extract_optional_string(&obj, "main"),
            bin: Self::extract_bin(&obj),
        })
    }

    /// Parse a package.json file, reading at most the source limit
    pub fn parse_file(path: &Path) -> Result<PackageDetails> {
        let content = read_source(path)?;

        Self::parse(&content).map_err(|e| match e {
            CodemapError::JsonParse { source, .. } => CodemapError::JsonParse {
                file: path.to_path_buf(),
                source,
            },
            CodemapError::InvalidManifest { message, .. } => CodemapError::InvalidManifest {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    fn extract_optional_string(obj: &Map<String, Value>, field: &str) -> Option<String> {
        obj.get(field).and_then(Value::as_str).map(str::to_string)
    }

    fn extract_bin(obj: &Map<String, Value>) -> Option<BinField> {
        match obj.get("bin")? {
            Value::String(target) => Some(BinField::Single(target.clone())),
            Value::Object(entries) => {
                let map: BTreeMap<String, String> = entries
                    .iter()
                    .filter_map(|(name, target)| {
                        target.as_str().map(|target| (name.clone(), target.to_string()))
                    })
                    .collect();
                Some(BinField::Map(map))
            }
            _ => None,
        }
    }
}
