//! Tokenizer and `(x,y)` pair parser
//!
//! The body is split on runs of whitespace and every token must contain a
//! parenthesized pair. A single token without one fails the whole body.

use regex::Regex;
use std::sync::LazyLock;

use super::error::CalcError;

/// Unanchored and greedy: `x` extends to the last comma that still has a
/// closing parenthesis somewhere after it.
static PAIR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*),(.*)\)").expect("pair pattern must compile"));

/// Raw components of one token, not yet coerced to numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub x: String,
    pub y: String,
}

impl Coordinate {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Split on any run of whitespace, newlines included. Never yields empty tokens.
///
/// The ASCII information separators U+001C..=U+001F count as whitespace too.
pub fn tokenize(body: &str) -> impl Iterator<Item = &str> {
    body.split(is_separator).filter(|token| !token.is_empty())
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

pub fn parse_token(token: &str) -> Result<Coordinate, CalcError> {
    let captures = PAIR_PATTERN
        .captures(token)
        .ok_or_else(|| CalcError::Pattern {
            token: token.to_string(),
        })?;

    Ok(Coordinate::new(&captures[1], &captures[2]))
}

/// Parse every token of `body`, stopping at the first one without a pair.
pub fn parse_coordinates(body: &str) -> Result<Vec<Coordinate>, CalcError> {
    tokenize(body).map(parse_token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_preserves_order() {
        let tokens: Vec<&str> = tokenize("(1,2) (3,4)").collect();
        assert_eq!(tokens, vec!["(1,2)", "(3,4)"]);
    }

    #[test]
    fn test_tokenize_mixed_whitespace() {
        let tokens: Vec<&str> = tokenize("  (1,2)\n\t(3,4)\r\n\n(5,6)  ").collect();
        assert_eq!(tokens, vec!["(1,2)", "(3,4)", "(5,6)"]);
        assert_eq!(tokenize(" \n\t ").count(), 0);
    }

    #[test]
    fn test_tokenize_information_separators() {
        let tokens: Vec<&str> = tokenize("(1,2)\x1f(3,4)\x1c\x1d(5,6)\x1e").collect();
        assert_eq!(tokens, vec!["(1,2)", "(3,4)", "(5,6)"]);
    }

    #[test]
    fn test_tokenize_no_break_space() {
        let tokens: Vec<&str> = tokenize("(1,2)\u{a0}(3,4)").collect();
        assert_eq!(tokens, vec!["(1,2)", "(3,4)"]);
    }

    #[test]
    fn test_parse_simple_pair() {
        assert_eq!(parse_token("(1,2)").unwrap(), Coordinate::new("1", "2"));
    }

    #[test]
    fn test_parse_greedy_last_comma() {
        assert_eq!(parse_token("(1,2,3)").unwrap(), Coordinate::new("1,2", "3"));
        assert_eq!(parse_token("((1,2))").unwrap(), Coordinate::new("(1", "2)"));
    }

    #[test]
    fn test_parse_unanchored() {
        assert_eq!(parse_token("p(1.5,-2)q").unwrap(), Coordinate::new("1.5", "-2"));
    }

    #[test]
    fn test_parse_non_numeric_pair_still_matches() {
        assert_eq!(parse_token("(a,b)").unwrap(), Coordinate::new("a", "b"));
        assert_eq!(parse_token("(,)").unwrap(), Coordinate::new("", ""));
    }

    #[test]
    fn test_parse_missing_pattern() {
        for token in ["abc", "(1 2)", "1,2", "(1,2", ")1,2("] {
            assert_eq!(
                parse_token(token),
                Err(CalcError::Pattern {
                    token: token.to_string()
                }),
                "token {token:?} should not match"
            );
        }
    }

    #[test]
    fn test_parse_coordinates_fails_on_any_bad_token() {
        let err = parse_coordinates("(1,2) abc (3,4)").unwrap_err();
        assert_eq!(
            err,
            CalcError::Pattern {
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_parse_coordinates_all_valid() {
        let coords = parse_coordinates("(1,2)\n(a,b)").unwrap();
        assert_eq!(coords, vec![Coordinate::new("1", "2"), Coordinate::new("a", "b")]);
    }
}
