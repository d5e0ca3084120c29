/// JSON extraction module for pulling the score report out of a raw log
///
/// The autograder prints its results as a JSON object somewhere in the log,
/// surrounded by arbitrary output. There are no delimiters, so we look for
/// brace-balanced `{...}` spans and take the last one: later output belongs
/// to the more recent run.
use log::debug;
use serde_json::{Map, Value};
use std::ops::Range;
use thiserror::Error;

/// Longest prefix of a rejected block quoted back in error messages
const SNIPPET_CHARS: usize = 60;

/// Why no report could be extracted from a log
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No JSON object found in log")]
    NotFound,

    #[error("Last JSON block at byte {offset} is not valid JSON ({source}): {snippet}")]
    MalformedJson {
        offset: usize,
        snippet: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Find every top-level brace-balanced span, in text order
///
/// Nested groups are part of their enclosing span. A `{` that is never
/// closed starts nothing, and a `}` with nothing open is ignored. Braces are
/// counted everywhere, including inside JSON string literals.
pub fn find_balanced_blocks(text: &str) -> Vec<Range<usize>> {
    // Braces are ASCII, so byte offsets are always char boundaries
    let mut open: Vec<usize> = Vec::new();
    let mut pairs: Vec<Range<usize>> = Vec::new();

    for (i, byte) in text.bytes().enumerate() {
        match byte {
            b'{' => open.push(i),
            b'}' => {
                if let Some(start) = open.pop() {
                    pairs.push(start..i + 1);
                }
            }
            _ => {}
        }
    }

    // Pairs nest without partial overlap; keep the outermost ones
    pairs.sort_by_key(|span| span.start);
    let mut blocks: Vec<Range<usize>> = Vec::new();
    for span in pairs {
        match blocks.last() {
            Some(last) if span.start < last.end => continue,
            _ => blocks.push(span),
        }
    }

    blocks
}

/// Extract and parse the last balanced `{...}` block of a log
///
/// Earlier blocks are ignored even when they are valid JSON, and a broken
/// last block is an error rather than a reason to fall back to them.
pub fn extract_last_json_object(text: &str) -> Result<Map<String, Value>, ExtractError> {
    let blocks = find_balanced_blocks(text);
    debug!("Found {} balanced brace block(s) in {} bytes of log", blocks.len(), text.len());

    let last = blocks.last().cloned().ok_or(ExtractError::NotFound)?;
    debug!("Parsing block at bytes {}..{}", last.start, last.end);

    let candidate = &text[last.clone()];
    serde_json::from_str::<Map<String, Value>>(candidate).map_err(|source| ExtractError::MalformedJson {
        offset: last.start,
        snippet: snippet(candidate),
        source,
    })
}

fn snippet(block: &str) -> String {
    let mut chars = block.chars();
    let head: String = chars.by_ref().take(SNIPPET_CHARS).collect();
    if chars.next().is_some() { format!("{}...", head) } else { head }
}
