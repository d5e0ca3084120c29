//! Conversion of a parsed report into display lines.
//!
//! This is a single pass over the top-level entries of the report. Entries
//! that are not scored groups are skipped quietly; one odd group never stops
//! the rest of the report from rendering.

use super::names::format_test_name;
use super::score::{hidden_marker, parse_total};
use crate::types::{AggregateTotals, DisplayLine, LineKind, Severity};
use log::debug;
use serde_json::{Map, Value};

/// Top-level keys that carry run metadata, never scores
pub const RESERVED_KEYS: [&str; 5] = ["autgrader_run_log", "system_run_log", "start_time", "end_time", "run_time"];

/// Key of the group field holding `"<score> / <possible>"`
const TOTAL_KEY: &str = "Total";

/// Display lines plus the totals they were built from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormattedReport {
    pub lines: Vec<DisplayLine>,
    pub totals: AggregateTotals,
}

impl FormattedReport {
    /// True when no group contributed a score
    pub fn is_empty(&self) -> bool {
        self.totals.groups == 0
    }
}

/// Build the display lines for a whole report.
pub fn format_report(report: &Map<String, Value>) -> FormattedReport {
    let mut formatted = FormattedReport::default();

    for (group_name, group_data) in report {
        if RESERVED_KEYS.contains(&group_name.as_str()) {
            continue;
        }
        let Some(group) = group_data.as_object() else {
            continue;
        };
        let Some(total) = group.get(TOTAL_KEY) else {
            debug!("Skipping '{}': no {} field", group_name, TOTAL_KEY);
            continue;
        };

        let total_str = total.as_str().unwrap_or_default();
        let fraction = parse_total(total_str);
        let Some(ratio) = fraction.ratio() else {
            debug!("Skipping '{}': total {} has nothing possible", group_name, total);
            continue;
        };
        let Some(totals) = formatted.totals.checked_add(fraction) else {
            debug!("Skipping '{}': total {} overflows the running totals", group_name, total);
            continue;
        };

        let lines = &mut formatted.lines;
        lines.push(DisplayLine::new(LineKind::GroupHeader, group_name.as_str(), Severity::Heading));
        lines.push(DisplayLine::new(LineKind::GroupScore, fraction.display(), Severity::for_percentage(ratio)));

        for (test_name, test_score) in group {
            if test_name == TOTAL_KEY {
                continue;
            }
            if let Some(line) = test_line(test_name, test_score) {
                lines.push(line);
            }
        }

        if let Some(hidden) = hidden_marker(total_str) {
            let note = match hidden.count {
                Some(count) => format!("Contains hidden tests ({} hidden)", count),
                None => "Contains hidden tests".to_string(),
            };
            lines.push(DisplayLine::new(LineKind::HiddenNote, note, Severity::Middle));
        }

        formatted.totals = totals;
    }

    let overall = formatted.totals.as_fraction();
    if let Some(ratio) = overall.ratio() {
        formatted.lines.push(DisplayLine::new(
            LineKind::OverallScore,
            overall.display(),
            Severity::for_percentage(ratio),
        ));
    }

    if let Some(run_time) = report.get("run_time") {
        let text = match run_time {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        formatted.lines.push(DisplayLine::new(LineKind::RunTime, text, Severity::Info));
    }

    debug!(
        "Formatted {} group(s), {} line(s), overall {}/{}",
        formatted.totals.groups,
        formatted.lines.len(),
        overall.score,
        overall.possible
    );

    formatted
}

/// Line for one per-test entry, `None` for non-numeric values or empty names
fn test_line(test_name: &str, test_score: &Value) -> Option<DisplayLine> {
    let (score, shown) = match test_score {
        Value::Number(n) => (n.as_f64()?, n.to_string()),
        Value::Bool(b) => (if *b { 1.0 } else { 0.0 }, b.to_string()),
        _ => return None,
    };

    let name = format_test_name(test_name);
    if name.is_empty() {
        return None;
    }

    Some(DisplayLine::new(LineKind::TestScore, format!("{}: {}", name, shown), Severity::for_test_score(score)))
}
