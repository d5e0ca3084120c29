//! JSON export of a formatted report.
//!
//! Used by `--json` so scripts can consume the same lines and tiers the
//! console renderer shows.

use super::format::FormattedReport;
use std::io::Write;

/// Write the report as pretty-printed JSON.
///
/// # Arguments
/// * `report` - Lines and totals from `format_report`
/// * `source` - Description of where the log came from
/// * `writer` - Destination, usually stdout
pub fn export_json_report<W: Write>(report: &FormattedReport, source: &str, mut writer: W) -> std::io::Result<()> {
    use serde_json::json;

    let overall = report.totals.as_fraction();
    let document = json!({
        "source": source,
        "score": overall.score,
        "possible": overall.possible,
        "percentage": overall.ratio().map(|r| r * 100.0),
        "groups": report.totals.groups,
        "lines": report.lines,
    });

    serde_json::to_writer_pretty(&mut writer, &document)?;
    writeln!(writer)
}
