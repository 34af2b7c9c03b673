/// Escapes special characters in a string for use in queries
pub fn escape_for_query(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Wraps an escaped string in double quotes (DocumentDB string literal)
pub fn double_quoted(s: &str) -> String {
    format!("\"{}\"", escape_for_query(s))
}

/// Wraps an escaped string in single quotes (JsonServer string literal, bracket keys)
pub fn single_quoted(s: &str) -> String {
    format!("'{}'", escape_for_query(s))
}

/// Whether a property name can be written after a dot without brackets
pub fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
