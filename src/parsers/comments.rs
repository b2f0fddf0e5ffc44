//! Leading comment lines as file descriptions

/// Single-line comment marker for a lowercased dotted extension
pub fn comment_marker(extension: &str) -> Option<&'static str> {
    match extension {
        ".py" | ".sh" | ".bash" | ".zsh" | ".rb" | ".pl" | ".r" => Some("#"),
        ".js" | ".ts" | ".jsx" | ".tsx" | ".go" | ".rs" | ".java" | ".kt" | ".c" | ".cpp"
        | ".h" => Some("//"),
        ".lua" | ".hs" => Some("--"),
        _ => None,
    }
}

/// First meaningful comment line.
///
/// All leading marker characters are removed (`///` and `#!` included), and
/// interpreter directives and empty comments are skipped.
pub fn first_comment(source: &str, marker: &str) -> Option<String> {
    source.lines().find_map(|line| {
        let trimmed = line.trim();
        if !trimmed.starts_with(marker) {
            return None;
        }

        let text = trimmed
            .trim_start_matches(|c: char| marker.contains(c))
            .trim();
        if text.is_empty() || text.starts_with('!') {
            None
        } else {
            Some(text.to_string())
        }
    })
}
