//! Range-script parsing for bulk factor selection.
//!
//! A script is a comma-separated list of single indices and closed ranges,
//! optionally wrapped in one pair of square brackets:
//!
//! ```text
//! [1,2,3,5:7]  ->  {1, 2, 3, 5, 6, 7}
//! ```
//!
//! Ranges are inclusive on both ends. Blank tokens (trailing commas,
//! doubled commas) are ignored.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Parses a selection script into a set of factor indices.
///
/// Parsing is atomic: on error nothing is returned, so a caller merging the
/// result into an existing selection can never half-apply a script. The
/// parsed indices are not range-checked here; out-of-range values are
/// rejected later, at reconstruction time.
///
/// # Errors
/// Returns [`Error::InvalidToken`] naming the first token that is neither
/// an integer nor an `int:int` range.
pub fn parse(script: &str) -> Result<BTreeSet<i64>> {
    let mut indices = BTreeSet::new();
    for token in strip_brackets(script.trim()).split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some((lo, hi)) = token.split_once(':') {
            let lo = parse_int(lo, token)?;
            let hi = parse_int(hi, token)?;
            // Empty when hi < lo, same as the half-open range lo..hi+1.
            indices.extend(lo..=hi);
        } else {
            indices.insert(parse_int(token, token)?);
        }
    }
    Ok(indices)
}

/// Strips a single pair of enclosing brackets, if present.
fn strip_brackets(script: &str) -> &str {
    let script = script.strip_prefix('[').unwrap_or(script);
    script.strip_suffix(']').unwrap_or(script)
}

fn parse_int(text: &str, token: &str) -> Result<i64> {
    text.trim().parse().map_err(|_| Error::InvalidToken {
        token: token.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singles_and_range() {
        let parsed = parse("1,2,3,5:7").unwrap();
        assert_eq!(parsed, BTreeSet::from([1, 2, 3, 5, 6, 7]));
    }

    #[test]
    fn test_bracketed_inclusive_range() {
        assert_eq!(parse("[2:4]").unwrap(), BTreeSet::from([2, 3, 4]));
    }

    #[test]
    fn test_blank_tokens_ignored() {
        assert_eq!(parse("1,,2, ,3,").unwrap(), BTreeSet::from([1, 2, 3]));
        assert!(parse("").unwrap().is_empty());
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert!(parse("7:5").unwrap().is_empty());
        assert_eq!(parse("3:3").unwrap(), BTreeSet::from([3]));
    }

    #[test]
    fn test_negative_and_duplicate_indices_tolerated() {
        assert_eq!(parse("-1,4,4").unwrap(), BTreeSet::from([-1, 4]));
    }

    #[test]
    fn test_whitespace_inside_ranges() {
        assert_eq!(parse(" [ 2 : 4 , 9 ] ").unwrap(), BTreeSet::from([2, 3, 4, 9]));
    }

    #[test]
    fn test_invalid_token_named_in_error() {
        let err = parse("1,two,3").unwrap_err();
        match err {
            Error::InvalidToken { token } => assert_eq!(token, "two"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_range_bound() {
        assert!(parse("1:x").is_err());
        assert!(parse("1:2:3").is_err());
    }

    #[test]
    fn test_parse_is_idempotent_under_remerge() {
        let first = parse("0,3:5").unwrap();
        let mut merged = first.clone();
        merged.extend(parse("0,3:5").unwrap());
        assert_eq!(merged, first);
    }
}
