/// User interface and status output utilities
///
/// This module handles:
/// - Colored terminal text on stderr
/// - Error and warning message formatting
///
/// Report output goes to stdout through `console_format`; everything here
/// goes to stderr so `--json` output stays clean.

use std::io::Write;

/// Print a colored label to stderr, with fallback to plain text
fn eprint_label(label: &str, fg: term::color::Color) {
    if !really_print_color(label, fg) {
        eprint!("{}", label);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        let Some(ref mut t) = term::stderr() else {
            return false;
        };
        if t.fg(fg).is_err() {
            return false;
        }
        let _ = t.attr(term::Attr::Bold);
        if write!(t, "{}", s).is_err() {
            return false;
        }
        let _ = t.reset();

        true
    }
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    eprintln!();
    eprint_label("error", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
    eprintln!();
}

/// Print a warning message with colored "warning" prefix
pub fn print_warning(msg: &str) {
    eprint_label("warning", term::color::BRIGHT_YELLOW);
    eprintln!(": {}", msg);
}
