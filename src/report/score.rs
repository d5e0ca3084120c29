//! Parsing of a group's `Total` string.
//!
//! The autograder writes totals such as `"14 / 22"` or `"14 / 22 (1 hidden)"`.
//! Anything that does not start with two integers separated by a slash scores
//! `0 / 0`, which callers treat as "not a scored group".

use crate::types::ScoreFraction;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOTAL_RE: Regex = Regex::new(r"^(\d+)\s*/\s*(\d+)").unwrap();
    static ref HIDDEN_RE: Regex = Regex::new(r"\((?:(\d+)\s*)?hidden\)").unwrap();
}

/// Marker that a group has tests not itemized in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenTests {
    /// Count from `"(N hidden)"`, `None` for a bare `"(hidden)"`
    pub count: Option<u64>,
}

/// Parse the leading `"<score> / <possible>"` of a total.
///
/// Numbers too large for `u64` fall back to `0 / 0` like any other mismatch.
pub fn parse_total(total: &str) -> ScoreFraction {
    let Some(caps) = TOTAL_RE.captures(total) else {
        return ScoreFraction::default();
    };

    match (caps[1].parse::<u64>(), caps[2].parse::<u64>()) {
        (Ok(score), Ok(possible)) => ScoreFraction::new(score, possible),
        _ => ScoreFraction::default(),
    }
}

/// Look for a `"(hidden)"` or `"(N hidden)"` marker anywhere in a total.
pub fn hidden_marker(total: &str) -> Option<HiddenTests> {
    HIDDEN_RE
        .captures(total)
        .map(|caps| HiddenTests { count: caps.get(1).and_then(|m| m.as_str().parse().ok()) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_total() {
        assert_eq!(parse_total("5 / 5"), ScoreFraction::new(5, 5));
        assert_eq!(parse_total("2/7"), ScoreFraction::new(2, 7));
    }

    #[test]
    fn test_parse_total_with_hidden_suffix() {
        assert_eq!(parse_total("14 / 22 (1 hidden)"), ScoreFraction::new(14, 22));
    }

    #[test]
    fn test_parse_total_must_match_at_start() {
        assert_eq!(parse_total("score: 3 / 4"), ScoreFraction::default());
        assert_eq!(parse_total(" 3 / 4"), ScoreFraction::default());
        assert_eq!(parse_total("pending"), ScoreFraction::default());
        assert_eq!(parse_total(""), ScoreFraction::default());
    }

    #[test]
    fn test_parse_total_overflow_is_zero() {
        assert_eq!(parse_total("99999999999999999999999 / 3"), ScoreFraction::default());
    }

    #[test]
    fn test_hidden_marker_forms() {
        assert_eq!(hidden_marker("14 / 22 (1 hidden)"), Some(HiddenTests { count: Some(1) }));
        assert_eq!(hidden_marker("3 / 9 (hidden)"), Some(HiddenTests { count: None }));
        assert_eq!(hidden_marker("3 / 9"), None);
        assert_eq!(hidden_marker("3 / 9 hidden"), None);
    }
}
