// tests/scanner_tests.rs

use jql2::scanner::Scanner;

// ============================================================================
// Token classes
// ============================================================================

#[test]
fn test_keywords_and_identifiers() {
    let mut scanner = Scanner::new("SELECT title FROM base");
    assert_eq!(scanner.fetch(), "SELECT");
    assert_eq!(scanner.fetch(), "title");
    assert_eq!(scanner.fetch(), "FROM");
    assert_eq!(scanner.fetch(), "base");
    assert_eq!(scanner.fetch(), "");
}

#[test]
fn test_case_is_preserved() {
    let mut scanner = Scanner::new("Select From");
    assert_eq!(scanner.fetch(), "Select");
    assert_eq!(scanner.fetch(), "From");
}

#[test]
fn test_namespaced_words_are_single_tokens() {
    // ':' and '-' are identifier characters
    let mut scanner = Scanner::new("jcr:title my-prop my_prop");
    assert_eq!(scanner.fetch(), "jcr:title");
    assert_eq!(scanner.fetch(), "my-prop");
    assert_eq!(scanner.fetch(), "my_prop");
}

#[test]
fn test_bracketed_name_includes_brackets() {
    let mut scanner = Scanner::new("[nt:unstructured].[jcr:title]");
    assert_eq!(scanner.fetch(), "[nt:unstructured]");
    assert_eq!(scanner.fetch(), ".");
    assert_eq!(scanner.fetch(), "[jcr:title]");
}

#[test]
fn test_bracket_scan_has_no_nesting() {
    // The first ']' terminates the token
    let mut scanner = Scanner::new("[a[b]c]");
    assert_eq!(scanner.fetch(), "[a[b]");
    assert_eq!(scanner.fetch(), "c");
    assert_eq!(scanner.fetch(), "]");
}

#[test]
fn test_single_and_double_quoted_strings() {
    let mut scanner = Scanner::new("'single' \"double\"");
    assert_eq!(scanner.fetch(), "'single'");
    assert_eq!(scanner.fetch(), "\"double\"");
}

#[test]
fn test_quoted_string_spans_punctuation() {
    let mut scanner = Scanner::new("'a = b, (c)'");
    assert_eq!(scanner.fetch(), "'a = b, (c)'");
}

#[test]
fn test_punctuation_tokens() {
    let mut scanner = Scanner::new(", . ( ) * $");
    assert_eq!(scanner.fetch(), ",");
    assert_eq!(scanner.fetch(), ".");
    assert_eq!(scanner.fetch(), "(");
    assert_eq!(scanner.fetch(), ")");
    assert_eq!(scanner.fetch(), "*");
    assert_eq!(scanner.fetch(), "$");
}

#[test]
fn test_two_char_operators_without_spaces() {
    let mut scanner = Scanner::new("a<>b");
    assert_eq!(scanner.fetch(), "a");
    assert_eq!(scanner.fetch(), "<>");
    assert_eq!(scanner.fetch(), "b");
}

#[test]
fn test_punctuation_splits_words() {
    let mut scanner = Scanner::new("a.b=c");
    assert_eq!(scanner.fetch(), "a");
    assert_eq!(scanner.fetch(), ".");
    assert_eq!(scanner.fetch(), "b");
    assert_eq!(scanner.fetch(), "=");
    assert_eq!(scanner.fetch(), "c");
}

#[test]
fn test_paths_are_words() {
    let mut scanner = Scanner::new("/content/site/en");
    assert_eq!(scanner.fetch(), "/content/site/en");
}

// ============================================================================
// End of input and partial tokens
// ============================================================================

#[test]
fn test_empty_and_whitespace_input() {
    assert_eq!(Scanner::new("").fetch(), "");
    assert_eq!(Scanner::new("  \t\n ").fetch(), "");
}

#[test]
fn test_fetch_past_end_keeps_returning_empty() {
    let mut scanner = Scanner::new("x");
    assert_eq!(scanner.fetch(), "x");
    assert_eq!(scanner.fetch(), "");
    assert_eq!(scanner.fetch(), "");
}

#[test]
fn test_unterminated_quote_emits_partial_token() {
    let mut scanner = Scanner::new("'abc");
    assert_eq!(scanner.fetch(), "'abc");
    assert_eq!(scanner.fetch(), "");
}

#[test]
fn test_unterminated_bracket_emits_partial_token() {
    let mut scanner = Scanner::new("[abc");
    assert_eq!(scanner.fetch(), "[abc");
}

// ============================================================================
// Lookahead and expectation
// ============================================================================

#[test]
fn test_lookup_is_stable_and_buffered() {
    let mut scanner = Scanner::new("a b c");
    assert_eq!(scanner.lookup(2), "c");
    assert_eq!(scanner.lookup(0), "a");
    assert_eq!(scanner.lookup(1), "b");
    assert_eq!(scanner.fetch(), "a");
    assert_eq!(scanner.lookup(0), "b");
}

#[test]
fn test_expect_consumes_on_match() {
    let mut scanner = Scanner::new("FROM base");
    assert!(scanner.expect("from").is_ok());
    assert_eq!(scanner.fetch(), "base");
}

#[test]
fn test_expect_reports_expected_and_found() {
    let mut scanner = Scanner::new("WHERE");
    let err = scanner.expect("FROM").unwrap_err();
    assert_eq!(err.expected, "'FROM'");
    assert_eq!(err.found, "WHERE");
    assert_eq!(err.query, "WHERE");
}

#[test]
fn test_expect_all_stops_at_first_mismatch() {
    let mut scanner = Scanner::new("LEFT OUTER WRONG");
    let err = scanner.expect_all(&["LEFT", "OUTER", "JOIN"]).unwrap_err();
    assert_eq!(err.found, "WRONG");
}

#[test]
fn test_token_is_ignores_case() {
    assert!(Scanner::token_is("Join", "JOIN"));
    assert!(Scanner::token_is("JOIN", "join"));
    assert!(!Scanner::token_is("JOIN", "JOINED"));
}
