//! One-line file descriptions

use crate::error::{degrade, Result};
use crate::models::file_metadata::dotted_extension;
use crate::models::package::name_and_description;
use crate::parsers::comments::{comment_marker, first_comment};
use crate::parsers::manifest::describe_toml_manifest;
use crate::parsers::package_json::{PackageJsonParser, PACKAGE_JSON};
use crate::parsers::python::PythonParser;
use crate::utils::read_source;
use std::path::Path;

/// Description given to files that cannot be read as UTF-8 text
pub const BINARY_OR_UNREADABLE: &str = "[binary or unreadable]";

/// Describes a file from its docstring, first comment or manifest fields
pub struct FileClassifier {
    python: PythonParser,
}

impl FileClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            python: PythonParser::new()?,
        })
    }

    /// One-line description of `path`, if anything describes it
    pub fn describe(&mut self, path: &Path) -> Option<String> {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "unreadable file");
                return Some(BINARY_OR_UNREADABLE.to_string());
            }
        };

        let extension = dotted_extension(path).unwrap_or_default();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let docstring = if extension == ".py" {
            self.python.module_docstring(&source)
        } else {
            None
        };
        let description = docstring
            .or_else(|| comment_marker(&extension).and_then(|marker| first_comment(&source, marker)))
            .or_else(|| describe_manifest(&file_name, &source, path));

        description.and_then(|text| first_line(&text))
    }
}

fn describe_manifest(file_name: &str, source: &str, path: &Path) -> Option<String> {
    if file_name == PACKAGE_JSON {
        let details = degrade(PackageJsonParser::parse(source))?;
        return name_and_description(details.name.as_deref(), details.description.as_deref());
    }

    degrade(describe_toml_manifest(file_name, source, path)).flatten()
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}
