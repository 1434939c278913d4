//! Path expression tokenizer.

/// PathToken is one step of a path expression: a map member name or a list
/// index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathToken {
    /// Map member name.
    Key(String),
    /// List index from a bracketed `[<digits>]` segment.
    Index(usize),
}

impl std::fmt::Display for PathToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathToken::Key(k) => write!(f, ".{}", k),
            PathToken::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// Parses a path expression into its token sequence.
///
/// The grammar matches, left to right, either a bracketed non-negative
/// integer `[<digits>]` (an [`PathToken::Index`]) or a maximal run of
/// characters excluding `.`, `[`, `]` (a [`PathToken::Key`]). Dots are
/// pure separators. The parser is tolerant: a bracket that does not
/// enclose digits is skipped and its contents tokenize on their own, so a
/// malformed expression yields fewer tokens rather than an error. An empty
/// expression yields no tokens.
pub fn parse_path(path: &str) -> Vec<PathToken> {
    let bytes = path.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'.' | b']' => pos += 1,
            b'[' => {
                if let Some((index, end)) = match_bracketed_index(bytes, pos) {
                    tokens.push(index);
                    pos = end;
                } else {
                    pos += 1;
                }
            }
            _ => {
                let start = pos;
                while pos < bytes.len() && !matches!(bytes[pos], b'.' | b'[' | b']') {
                    pos += 1;
                }
                tokens.push(PathToken::Key(path[start..pos].to_string()));
            }
        }
    }

    tokens
}

/// Matches `[<digits>]` starting at `pos` (which must be a `[`). Returns
/// the index token and the position just past the closing bracket.
fn match_bracketed_index(bytes: &[u8], pos: usize) -> Option<(PathToken, usize)> {
    let mut end = pos + 1;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == pos + 1 || end >= bytes.len() || bytes[end] != b']' {
        return None;
    }
    let digits = std::str::from_utf8(&bytes[pos + 1..end]).ok()?;
    // A digit run too long for usize degrades to a key token.
    match digits.parse::<usize>() {
        Ok(index) => Some((PathToken::Index(index), end + 1)),
        Err(_) => Some((PathToken::Key(digits.to_string()), end + 1)),
    }
}
