//! Package manifest data

use std::collections::BTreeMap;

/// The `bin` field of a package.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinField {
    /// `"bin": "./cli.js"`, the executable is named after the package
    Single(String),
    /// `"bin": {"name": "./cli.js", ...}`
    Map(BTreeMap<String, String>),
}

/// The subset of package.json codemap cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDetails {
    pub name: Option<String>,
    pub description: Option<String>,
    pub main: Option<String>,
    pub bin: Option<BinField>,
}

impl PackageDetails {
    /// Named executables declared by the package, resolving the single-string
    /// form to the package name
    pub fn executables(&self) -> Vec<(String, String)> {
        match &self.bin {
            Some(BinField::Map(map)) => map
                .iter()
                .map(|(name, target)| (name.clone(), target.clone()))
                .collect(),
            Some(BinField::Single(target)) => match &self.name {
                Some(name) => vec![(name.clone(), target.clone())],
                None => Vec::new(),
            },
            None => Vec::new(),
        }
    }
}

/// Join a manifest's name and description the way the report shows them
pub fn name_and_description(name: Option<&str>, description: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [name, description].into_iter().flatten().collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" - "))
    }
}
