//! Python source analysis backed by tree-sitter
//!
//! Three questions are asked of a Python module: its docstring, whether it
//! guards a script body behind `if __name__ == ...`, and which modules it
//! imports. A tree with syntax errors never answers the last two.

use crate::error::{CodemapError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::{Node, Parser, Tree};

static DOUBLE_QUOTED_DOCSTRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)\A"""(.*?)""""#).expect("valid docstring regex"));

static SINGLE_QUOTED_DOCSTRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A'''(.*?)'''").expect("valid docstring regex"));

/// Reusable tree-sitter parser configured for Python
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| CodemapError::SourceParse {
                message: format!("failed to load Python grammar: {}", e),
            })?;
        Ok(Self { parser })
    }

    /// Parse `source`, failing when the result contains any syntax error
    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| CodemapError::SourceParse {
                message: "parser produced no tree".to_string(),
            })?;

        if tree.root_node().has_error() {
            return Err(CodemapError::SourceParse {
                message: "source contains syntax errors".to_string(),
            });
        }

        Ok(tree)
    }

    /// The module docstring, stripped.
    ///
    /// A clean parse is authoritative: a module without a leading string has
    /// no docstring. Only when the source fails to parse (typically because the
    /// read limit cut it short) is the text heuristic consulted.
    pub fn module_docstring(&mut self, source: &str) -> Option<String> {
        match self.parse(source) {
            Ok(tree) => docstring_from_tree(&tree, source),
            Err(err) => {
                tracing::debug!(error = %err, "falling back to textual docstring match");
                docstring_from_text(source)
            }
        }
    }

    /// Whether any `if` or `elif` in the module compares `__name__` with a
    /// string
    pub fn has_main_guard(&mut self, source: &str) -> bool {
        let tree = match self.parse(source) {
            Ok(tree) => tree,
            Err(_) => return false,
        };

        let mut found = false;
        visit(tree.root_node(), &mut |node| {
            if !found && matches!(node.kind(), "if_statement" | "elif_clause") {
                if let Some(condition) = node.child_by_field_name("condition") {
                    found = is_name_comparison(condition, source);
                }
            }
        });
        found
    }

    /// Imported module references in source order (duplicates kept).
    ///
    /// `import a.b` yields `a`, `from a.b import c` yields `a`, and relative
    /// imports keep their dots: `from ..pkg import x` yields `..pkg`.
    pub fn imports(&mut self, source: &str) -> Vec<String> {
        let tree = match self.parse(source) {
            Ok(tree) => tree,
            Err(err) => {
                tracing::debug!(error = %err, "no imports extracted");
                return Vec::new();
            }
        };

        let mut modules = Vec::new();
        visit(tree.root_node(), &mut |node| match node.kind() {
            "import_statement" => {
                let mut cursor = node.walk();
                for name in node.children_by_field_name("name", &mut cursor) {
                    let dotted = if name.kind() == "aliased_import" {
                        name.child_by_field_name("name")
                    } else {
                        Some(name)
                    };
                    if let Some(dotted) = dotted {
                        modules.push(top_level_component(&node_text(dotted, source)));
                    }
                }
            }
            "import_from_statement" => {
                if let Some(module) = node.child_by_field_name("module_name") {
                    if module.kind() == "relative_import" {
                        modules.push(relative_reference(module, source));
                    } else {
                        modules.push(top_level_component(&node_text(module, source)));
                    }
                }
            }
            "future_import_statement" => modules.push("__future__".to_string()),
            _ => {}
        });
        modules
    }
}

/// Depth-first pre-order traversal of every node
fn visit<'tree, F>(root: Node<'tree>, f: &mut F)
where
    F: FnMut(Node<'tree>),
{
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        f(node);
        let mut cursor = node.walk();
        let children: Vec<Node<'tree>> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
}

fn node_text(node: Node<'_>, source: &str) -> String {
    source
        .get(node.byte_range())
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn top_level_component(dotted: &str) -> String {
    dotted.split('.').next().unwrap_or(dotted).to_string()
}

fn relative_reference(node: Node<'_>, source: &str) -> String {
    let mut reference = String::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "import_prefix" => reference.extend(node_text(child, source).chars().filter(|c| *c == '.')),
            "dotted_name" => reference.push_str(&node_text(child, source)),
            _ => {}
        }
    }
    reference
}

fn is_name_comparison(condition: Node<'_>, source: &str) -> bool {
    if condition.kind() != "comparison_operator" {
        return false;
    }

    let mut cursor = condition.walk();
    let operands: Vec<Node<'_>> = condition.named_children(&mut cursor).collect();
    let left_is_name = operands
        .first()
        .map(|left| left.kind() == "identifier" && node_text(*left, source) == "__name__")
        .unwrap_or(false);

    left_is_name && operands.iter().skip(1).any(|operand| operand.kind() == "string")
}

/// First statement of a cleanly parsed module, when it is a plain string or
/// an implicit concatenation of plain strings
fn docstring_from_tree(tree: &Tree, source: &str) -> Option<String> {
    let root = tree.root_node();
    let mut cursor = root.walk();
    let first = root
        .named_children(&mut cursor)
        .find(|node| node.kind() != "comment")?;

    if first.kind() != "expression_statement" || first.named_child_count() != 1 {
        return None;
    }
    let expression = first.named_child(0)?;
    let pieces: Vec<Node<'_>> = match expression.kind() {
        "string" => vec![expression],
        "concatenated_string" => {
            let mut cursor = expression.walk();
            expression
                .named_children(&mut cursor)
                .filter(|node| node.kind() != "comment")
                .collect()
        }
        _ => return None,
    };

    let mut content = String::new();
    for piece in pieces {
        content.push_str(&string_value(piece, source)?);
    }

    let content = content.trim();
    if content.is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}

/// Value of a plain string literal; byte and f-strings have none
fn string_value(string: Node<'_>, source: &str) -> Option<String> {
    if string.kind() != "string" {
        return None;
    }

    let mut cursor = string.walk();
    let children: Vec<Node<'_>> = string.children(&mut cursor).collect();
    if children.iter().any(|child| child.kind() == "interpolation") {
        return None;
    }

    let start = children.iter().find(|child| child.kind() == "string_start")?;
    let end = children.iter().rev().find(|child| child.kind() == "string_end")?;

    let prefix = source.get(start.byte_range())?;
    if prefix.chars().any(|c| matches!(c, 'b' | 'B' | 'f' | 'F')) {
        return None;
    }

    let raw = source.get(start.end_byte()..end.start_byte())?;
    if prefix.chars().any(|c| matches!(c, 'r' | 'R')) {
        Some(raw.to_string())
    } else {
        Some(unescape(raw))
    }
}

/// Decode the common backslash escapes; unknown escapes are kept verbatim
fn unescape(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('r') => decoded.push('\r'),
            Some('\\') => decoded.push('\\'),
            Some('\'') => decoded.push('\''),
            Some('"') => decoded.push('"'),
            // line continuation
            Some('\n') => {}
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            }
            None => decoded.push('\\'),
        }
    }

    decoded
}

/// Text heuristic for sources that do not parse
fn docstring_from_text(source: &str) -> Option<String> {
    let mut rest = source.trim_start();
    // interpreter directive, encoding declaration, other leading comments
    while rest.starts_with('#') {
        rest = match rest.find('\n') {
            Some(newline) => rest[newline + 1..].trim_start(),
            None => "",
        };
    }

    let captures = DOUBLE_QUOTED_DOCSTRING
        .captures(rest)
        .or_else(|| SINGLE_QUOTED_DOCSTRING.captures(rest))?;
    let content = captures.get(1)?.as_str().trim();

    if content.is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}
