//! Output formatting functionality
//!
//! The markdown report is built as a list of lines, one section at a time,
//! and joined with `\n` at the end.

use crate::error::Result;
use crate::models::analysis::CodebaseMap;
use crate::models::dependency_graph::DependencyGraph;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// External packages listed in the dependency section
pub const TOP_EXTERNAL_DEPENDENCIES: usize = 20;

const FENCE: &str = "```";

/// Render the full markdown report
pub fn format_map_markdown(map: &CodebaseMap, mermaid: bool) -> String {
    let mut lines = Vec::new();

    push_header(&mut lines, map);
    push_overview(&mut lines, map);
    push_readme(&mut lines, map);
    push_tree(&mut lines, map);
    push_entry_points(&mut lines, map);
    push_descriptions(&mut lines, map);
    if let Some(graph) = &map.dependencies {
        push_dependencies(&mut lines, graph, mermaid);
    }

    lines.join("\n")
}

/// Serialize the collected map as pretty-printed JSON
pub fn format_map_json(map: &CodebaseMap, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(map)?
    } else {
        serde_json::to_string(map)?
    };
    Ok(json)
}

fn push_header(lines: &mut Vec<String>, map: &CodebaseMap) {
    lines.push(format!("# Codebase Map: `{}`", map.project_name));
    lines.push(String::new());
    lines.push(format!(
        "> Generated by codemap | Path: `{}`",
        map.root.display()
    ));
    lines.push(String::new());
}

fn push_overview(lines: &mut Vec<String>, map: &CodebaseMap) {
    let overview = &map.overview;
    lines.push("## Overview".to_string());
    lines.push(String::new());
    lines.push(format!("- **Files**: {}", overview.total_files));
    lines.push(format!("- **Directories**: {}", overview.total_dirs));
    if !overview.top_extensions.is_empty() {
        let types = overview
            .top_extensions
            .iter()
            .map(|(ext, count)| format!("`{}` ({})", ext, count))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("- **Top file types**: {}", types));
    }
    lines.push(String::new());
}

fn push_readme(lines: &mut Vec<String>, map: &CodebaseMap) {
    if let Some(excerpt) = &map.readme_excerpt {
        lines.push("### README Excerpt".to_string());
        lines.push(String::new());
        lines.push(FENCE.to_string());
        lines.push(excerpt.clone());
        lines.push(FENCE.to_string());
        lines.push(String::new());
    }
}

fn push_tree(lines: &mut Vec<String>, map: &CodebaseMap) {
    lines.push("## File Tree".to_string());
    lines.push(String::new());
    lines.push(FENCE.to_string());
    lines.push(format!("{}/", map.project_name));
    lines.extend(map.tree.iter().cloned());
    lines.push(FENCE.to_string());
    lines.push(String::new());
}

fn push_entry_points(lines: &mut Vec<String>, map: &CodebaseMap) {
    lines.push("## Entry Points".to_string());
    lines.push(String::new());
    if map.entry_points.is_empty() {
        lines.push("_No entry points detected._".to_string());
    } else {
        for entry in &map.entry_points {
            lines.push(format!(
                "- **`{}`** `[{}]` - {}",
                entry.path, entry.category, entry.reason
            ));
        }
    }
    lines.push(String::new());
}

fn push_descriptions(lines: &mut Vec<String>, map: &CodebaseMap) {
    lines.push("## Module Descriptions".to_string());
    lines.push(String::new());

    if map.descriptions.is_empty() {
        lines.push("_No module descriptions found._".to_string());
        lines.push(String::new());
        return;
    }

    // the root groups under "." so it sorts the same way as any other key
    let mut by_dir: BTreeMap<String, Vec<(&str, &str)>> = BTreeMap::new();
    for (rel, description) in &map.descriptions {
        let (parent, file_name) = match rel.rsplit_once('/') {
            Some((parent, file_name)) => (parent.to_string(), file_name),
            None => (".".to_string(), rel.as_str()),
        };
        by_dir
            .entry(parent)
            .or_default()
            .push((file_name, description.as_str()));
    }

    for (parent, files) in &by_dir {
        let label = if parent == "." {
            format!("{}/", map.project_name)
        } else {
            parent.clone()
        };
        lines.push(format!("### `{}`", label));
        lines.push(String::new());
        for (file_name, description) in files {
            lines.push(format!("- **`{}`** - {}", file_name, description));
        }
        lines.push(String::new());
    }
}

fn push_dependencies(lines: &mut Vec<String>, graph: &DependencyGraph, mermaid: bool) {
    lines.push("## Dependency Graph".to_string());
    lines.push(String::new());

    if graph.is_empty() {
        lines.push("_No dependency information extracted._".to_string());
        lines.push(String::new());
        return;
    }

    let external = graph.top_external(TOP_EXTERNAL_DEPENDENCIES);
    if !external.is_empty() {
        lines.push("### External Dependencies".to_string());
        lines.push(String::new());
        for (package, count) in external {
            let plural = if count > 1 { "s" } else { "" };
            lines.push(format!(
                "- `{}` (imported in {} file{})",
                package, count, plural
            ));
        }
        lines.push(String::new());
    }

    lines.push("### Local Module Dependencies".to_string());
    lines.push(String::new());
    if graph.has_local() {
        for (path, record) in graph.iter() {
            if record.local.is_empty() {
                continue;
            }
            let imports = record
                .local
                .iter()
                .map(|module| format!("`{}`", module))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("- **`{}`** imports: {}", path, imports));
        }
    } else {
        lines.push("_No local dependencies detected._".to_string());
    }
    lines.push(String::new());

    if mermaid {
        let diagram = mermaid_diagram(graph);
        if !diagram.is_empty() {
            lines.push("### Dependency Diagram (Mermaid)".to_string());
            lines.push(String::new());
            lines.extend(diagram);
            lines.push(String::new());
        }
    }
}

/// Fenced Mermaid flowchart of local Python imports; empty without edges
pub fn mermaid_diagram(graph: &DependencyGraph) -> Vec<String> {
    let edges = graph.local_edges(|path| path.ends_with(".py"));
    if edges.is_empty() {
        return Vec::new();
    }

    let mut node_ids: HashMap<String, String> = HashMap::new();
    let mut lines = vec![format!("{}mermaid", FENCE), "graph TD".to_string()];

    for (source, target) in &edges {
        let source_id = node_id(&mut node_ids, source);
        let target_id = node_id(&mut node_ids, target);
        let source_label = Path::new(source)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.clone());
        let trimmed = target.trim_start_matches('.');
        let target_label = if trimmed.is_empty() { target.as_str() } else { trimmed };

        lines.push(format!(
            "    {}[\"{}\"] --> {}[\"{}\"]",
            source_id, source_label, target_id, target_label
        ));
    }

    lines.push(FENCE.to_string());
    lines
}

fn node_id(ids: &mut HashMap<String, String>, key: &str) -> String {
    let next = format!("N{}", ids.len());
    ids.entry(key.to_string()).or_insert(next).clone()
}
