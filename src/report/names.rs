//! Test name cleanup for display.
//!
//! Autograder test identifiers look like `"Test Package 3 TestReadsFile"`.
//! Display names drop the boilerplate and split camel case into words.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PACKAGE_RE: Regex = Regex::new(r"Test Package \d+").unwrap();
}

/// Turn a raw test identifier into a readable name.
///
/// Returns an empty string when nothing but boilerplate was present; callers
/// skip such entries.
pub fn format_test_name(name: &str) -> String {
    let stripped = PACKAGE_RE.replace_all(name, "");
    let stripped = stripped.replace("Test", "");
    split_words(stripped.trim()).trim().to_string()
}

/// Insert a space before every ASCII capital after the first character,
/// unless whitespace already separates it.
fn split_words(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| !p.is_whitespace()) {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }

    out
}
