//! Bracket and quote rules shared by the parser and the generator.
//!
//! JCR-SQL2 wraps names that are not legal SQL identifiers in square
//! brackets: namespaced names (`[jcr:title]`) and repository paths
//! (`[/content/site]`). Paths whose text would confuse the tokenizer
//! (spaces, dots) additionally get double-quoted inside the brackets.

/// True when the token is wrapped in one `[` … `]` pair.
pub fn is_bracketed(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('[') && token.ends_with(']')
}

/// Strip exactly one outermost bracket pair, if both halves are present.
///
/// Half-bracketed tokens (`[name` or `name]`) are returned verbatim.
pub fn strip_brackets(token: &str) -> &str {
    if is_bracketed(token) {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

/// Wrap a name in brackets when it contains the JCR namespace
/// delimiter `:`, which is not a legal SQL identifier character.
pub fn bracket_if_namespaced(name: &str) -> String {
    if name.contains(':') {
        format!("[{}]", name)
    } else {
        name.to_string()
    }
}

/// Wrap a node type name in brackets unless it already is.
pub fn ensure_brackets(name: &str) -> String {
    if is_bracketed(name) {
        name.to_string()
    } else {
        format!("[{}]", name)
    }
}

/// Render a repository path in its quoted canonical form.
///
/// Already-bracketed paths are emitted verbatim. Otherwise the path is
/// double-quoted when it contains a space or a dot, and bracketed in
/// all cases, so the scanner reads it back as a single token.
pub fn format_path(path: &str) -> String {
    if is_bracketed(path) {
        return path.to_string();
    }
    if path.contains(' ') || path.contains('.') {
        format!("[\"{}\"]", path)
    } else {
        format!("[{}]", path)
    }
}

/// Undo [`format_path`]: strip one bracket pair, then one pair of
/// matching outer quotes if present.
pub fn strip_path(token: &str) -> &str {
    let inner = strip_brackets(token);
    let bytes = inner.as_bytes();
    if inner.len() >= 2
        && (bytes[0] == b'\'' || bytes[0] == b'"')
        && bytes[inner.len() - 1] == bytes[0]
    {
        &inner[1..inner.len() - 1]
    } else {
        inner
    }
}
