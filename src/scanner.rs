use std::collections::VecDeque;

/// Error raised when a token does not match what the grammar expects.
#[derive(Debug, Clone)]
pub struct SyntaxError {
    /// Expected token or phrase
    pub expected: String,
    /// Offending token; empty at end of input
    pub found: String,
    /// Full query text, for diagnostics
    pub query: String,
}

impl SyntaxError {
    pub fn new(
        expected: impl Into<String>,
        found: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        SyntaxError {
            expected: expected.into(),
            found: found.into(),
            query: query.into(),
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.found.is_empty() {
            write!(
                f,
                "Expected {}, found end of input in query: {}",
                self.expected, self.query
            )
        } else {
            write!(
                f,
                "Expected {}, found '{}' in query: {}",
                self.expected, self.found, self.query
            )
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Lazy tokenizer over a JCR-SQL2 source string.
///
/// Tokens are verbatim substrings of the source with surrounding
/// whitespace stripped; no case folding happens here. Bracketed names
/// (`[jcr:title]`) and quoted strings (`'hello world'`) are single
/// tokens including their delimiters. Lookahead is buffered in a
/// deque; the parser never asks more than three tokens ahead.
pub struct Scanner {
    source: String,
    chars: Vec<char>,
    pos: usize,
    buffer: VecDeque<String>,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.to_string(),
            chars: source.chars().collect(),
            pos: 0,
            buffer: VecDeque::new(),
        }
    }

    /// The full source string, for error reporting.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Return the k-th upcoming token without consuming it.
    ///
    /// `k = 0` is the next token. Returns the empty string past
    /// end of input.
    pub fn lookup(&mut self, k: usize) -> String {
        self.fill(k);
        self.buffer.get(k).cloned().unwrap_or_default()
    }

    /// Consume and return the next token; empty past end of input.
    pub fn fetch(&mut self) -> String {
        self.fill(0);
        self.buffer.pop_front().unwrap_or_default()
    }

    /// Consume the next token and fail unless it equals `expected`
    /// case-insensitively.
    pub fn expect(&mut self, expected: &str) -> Result<(), SyntaxError> {
        let found = self.fetch();
        if Self::token_is(&found, expected) {
            Ok(())
        } else {
            Err(SyntaxError::new(
                format!("'{}'", expected),
                found,
                self.source.clone(),
            ))
        }
    }

    /// Sequentially [`expect`](Scanner::expect) each token.
    pub fn expect_all(&mut self, expected: &[&str]) -> Result<(), SyntaxError> {
        for token in expected {
            self.expect(token)?;
        }
        Ok(())
    }

    /// Case-insensitive token equality.
    pub fn token_is(actual: &str, expected: &str) -> bool {
        actual.eq_ignore_ascii_case(expected)
    }

    fn fill(&mut self, upto: usize) {
        while self.buffer.len() <= upto {
            match self.scan_token() {
                Some(token) => self.buffer.push_back(token),
                None => break,
            }
        }
    }

    fn scan_token(&mut self) -> Option<String> {
        while self.pos < self.chars.len() && self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }
        if self.pos >= self.chars.len() {
            return None;
        }

        let start = self.pos;
        match self.chars[self.pos] {
            // Bracketed name or path, no nesting; the closing bracket
            // terminates. At end of input the partial token is emitted
            // and the parser reports it.
            '[' => {
                self.pos += 1;
                while self.pos < self.chars.len() && self.chars[self.pos] != ']' {
                    self.pos += 1;
                }
                if self.pos < self.chars.len() {
                    self.pos += 1;
                }
            }
            // Quoted string, including both quote characters. Internal
            // whitespace stays verbatim. Unterminated strings emit what
            // was scanned; the parser raises the syntax error.
            quote @ ('\'' | '"') => {
                self.pos += 1;
                while self.pos < self.chars.len() && self.chars[self.pos] != quote {
                    self.pos += 1;
                }
                if self.pos < self.chars.len() {
                    self.pos += 1;
                }
            }
            '<' => {
                self.pos += 1;
                if self.pos < self.chars.len() && matches!(self.chars[self.pos], '=' | '>') {
                    self.pos += 1;
                }
            }
            '>' => {
                self.pos += 1;
                if self.pos < self.chars.len() && self.chars[self.pos] == '=' {
                    self.pos += 1;
                }
            }
            ',' | '.' | '(' | ')' | '*' | '=' | '$' | ']' => {
                self.pos += 1;
            }
            _ => {
                while self.pos < self.chars.len()
                    && !self.chars[self.pos].is_whitespace()
                    && !is_delimiter(self.chars[self.pos])
                {
                    self.pos += 1;
                }
            }
        }

        Some(self.chars[start..self.pos].iter().collect())
    }
}

fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        '[' | ']' | '\'' | '"' | ',' | '.' | '(' | ')' | '*' | '=' | '<' | '>' | '$'
    )
}

#[test]
fn test_words_and_punctuation() {
    let mut scanner = Scanner::new("SELECT * FROM [nt:base] AS a");
    assert_eq!(scanner.fetch(), "SELECT");
    assert_eq!(scanner.fetch(), "*");
    assert_eq!(scanner.fetch(), "FROM");
    assert_eq!(scanner.fetch(), "[nt:base]");
    assert_eq!(scanner.fetch(), "AS");
    assert_eq!(scanner.fetch(), "a");
    assert_eq!(scanner.fetch(), "");
}

#[test]
fn test_quoted_string_is_one_token() {
    let mut scanner = Scanner::new("CONTAINS(*, 'hello  world')");
    assert_eq!(scanner.fetch(), "CONTAINS");
    assert_eq!(scanner.fetch(), "(");
    assert_eq!(scanner.fetch(), "*");
    assert_eq!(scanner.fetch(), ",");
    assert_eq!(scanner.fetch(), "'hello  world'");
    assert_eq!(scanner.fetch(), ")");
}

#[test]
fn test_comparison_operators() {
    let mut scanner = Scanner::new("a<=b >= c <> d < e > f = g");
    assert_eq!(scanner.fetch(), "a");
    assert_eq!(scanner.fetch(), "<=");
    assert_eq!(scanner.fetch(), "b");
    assert_eq!(scanner.fetch(), ">=");
    assert_eq!(scanner.fetch(), "c");
    assert_eq!(scanner.fetch(), "<>");
    assert_eq!(scanner.fetch(), "d");
    assert_eq!(scanner.fetch(), "<");
    assert_eq!(scanner.fetch(), "e");
    assert_eq!(scanner.fetch(), ">");
    assert_eq!(scanner.fetch(), "f");
    assert_eq!(scanner.fetch(), "=");
    assert_eq!(scanner.fetch(), "g");
}

#[test]
fn test_bracketed_path_keeps_spaces() {
    let mut scanner = Scanner::new("ISDESCENDANTNODE([/content/a b])");
    assert_eq!(scanner.fetch(), "ISDESCENDANTNODE");
    assert_eq!(scanner.fetch(), "(");
    assert_eq!(scanner.fetch(), "[/content/a b]");
    assert_eq!(scanner.fetch(), ")");
}

#[test]
fn test_lookup_does_not_consume() {
    let mut scanner = Scanner::new("a . b");
    assert_eq!(scanner.lookup(0), "a");
    assert_eq!(scanner.lookup(1), ".");
    assert_eq!(scanner.lookup(2), "b");
    assert_eq!(scanner.lookup(3), "");
    assert_eq!(scanner.fetch(), "a");
}

#[test]
fn test_dollar_splits_off_name() {
    let mut scanner = Scanner::new("x = $param");
    assert_eq!(scanner.fetch(), "x");
    assert_eq!(scanner.fetch(), "=");
    assert_eq!(scanner.fetch(), "$");
    assert_eq!(scanner.fetch(), "param");
}

#[test]
fn test_expect_is_case_insensitive() {
    let mut scanner = Scanner::new("from x");
    assert!(scanner.expect("FROM").is_ok());
    assert!(scanner.expect("y").is_err());
}
