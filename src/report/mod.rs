//! Report generation module - turning a parsed score report into lines.
//!
//! This module handles:
//! - Parsing group totals and hidden-test markers
//! - Cleaning up test names for display
//! - Building the ordered display lines and aggregate totals
//! - Export to JSON
//!
//! Console rendering is handled by the console_format module.
//!
//! # Module Organization
//!
//! - `score` - `Total` string parsing
//! - `names` - Test name formatting
//! - `format` - The report walk producing `DisplayLine`s
//! - `export` - JSON export

mod export;
mod format;
mod names;
mod score;


pub use export::export_json_report;
pub use format::format_report;
