/// Console formatting module - Pure rendering concerns
///
/// This module turns `DisplayLine`s into terminal text:
/// - Labels, bullets and indentation per line kind
/// - Severity colors through terminfo, or plain text
/// - Blank-line spacing between groups
///
/// It accepts pre-formatted lines from the report module and never decides
/// what a score means.
///
/// ## Output Flexibility
///
/// `ReportWriter` writes to any `Write + Send` destination (terminfo needs
/// `Send`), so tests render into a `Vec<u8>` with colors off.
use crate::types::{DisplayLine, LineKind, Severity};
use std::io::{self, Write};
use term::Terminal;
use term::color::Color;
use term::terminfo::{TermInfo, TerminfoTerminal};

/// Banner printed above every report
pub const REPORT_TITLE: &str = "=== Autograder Results ===";

enum Sink<W: Write> {
    Plain(W),
    Color(TerminfoTerminal<W>),
}

/// Writer for report output - configurable for color/plain text
pub struct ReportWriter<W: Write> {
    sink: Sink<W>,
    /// A group has been written and not yet closed by a blank line
    group_open: bool,
}

impl<W: Write + Send> ReportWriter<W> {
    /// Create a new report writer
    ///
    /// Colors are only used when requested and the terminal description from
    /// the environment can be loaded.
    pub fn new(writer: W, use_colors: bool) -> Self {
        let sink = match use_colors.then(|| TermInfo::from_env().ok()).flatten() {
            Some(info) => Sink::Color(TerminfoTerminal::new_with_terminfo(writer, info)),
            None => Sink::Plain(writer),
        };
        Self { sink, group_open: false }
    }

    /// Write the title banner and the log it came from
    pub fn write_title(&mut self, source: &str) -> io::Result<()> {
        self.write_plain("\n")?;
        self.write_styled(REPORT_TITLE, term::color::BRIGHT_MAGENTA, true)?;
        self.write_plain("\n")?;
        self.write_styled(&format!("Log: {}", source), term::color::BRIGHT_BLACK, false)?;
        self.write_plain("\n\n")
    }

    /// Write all lines of a report
    pub fn write_report(&mut self, lines: &[DisplayLine]) -> io::Result<()> {
        if !lines.iter().any(|l| l.kind == LineKind::GroupHeader) {
            self.write_styled("No scored groups found in report", term::color::BRIGHT_YELLOW, false)?;
            self.write_plain("\n")?;
        }
        for line in lines {
            self.write_line(line)?;
        }
        self.close_group()?;
        self.flush()
    }

    /// Write one line with the label and indentation for its kind
    pub fn write_line(&mut self, line: &DisplayLine) -> io::Result<()> {
        let color = severity_color(line.severity);
        match line.kind {
            LineKind::GroupHeader => {
                self.close_group()?;
                self.write_styled(&format!("{}:", line.text), color, true)?;
                self.group_open = true;
            }
            LineKind::GroupScore => {
                self.write_plain("  Score: ")?;
                self.write_styled(&line.text, color, false)?;
            }
            LineKind::TestScore => {
                self.write_plain("    ")?;
                self.write_styled("•", term::color::BRIGHT_BLACK, false)?;
                let (name, value) = line.text.rsplit_once(": ").unwrap_or(("", line.text.as_str()));
                self.write_plain(&format!(" {}: ", name))?;
                self.write_styled(value, color, false)?;
            }
            LineKind::HiddenNote => {
                self.write_plain("  ")?;
                self.write_styled(&format!("Note: {}", line.text), color, false)?;
            }
            LineKind::OverallScore => {
                self.close_group()?;
                self.write_styled("Overall Score: ", term::color::WHITE, true)?;
                self.write_styled(&line.text, color, true)?;
            }
            LineKind::RunTime => {
                self.close_group()?;
                self.write_plain("\n")?;
                self.write_styled(&format!("Run completed in {}", line.text), color, false)?;
            }
        }
        self.write_plain("\n")
    }

    fn close_group(&mut self) -> io::Result<()> {
        if self.group_open {
            self.group_open = false;
            self.write_plain("\n")?;
        }
        Ok(())
    }

    fn write_plain(&mut self, text: &str) -> io::Result<()> {
        match &mut self.sink {
            Sink::Plain(w) => w.write_all(text.as_bytes()),
            Sink::Color(t) => t.write_all(text.as_bytes()),
        }
    }

    /// Write text in a color, falling back to plain text when the terminal
    /// refuses the color
    fn write_styled(&mut self, text: &str, color: Color, bold: bool) -> io::Result<()> {
        match &mut self.sink {
            Sink::Plain(w) => w.write_all(text.as_bytes()),
            Sink::Color(t) => {
                let _ = t.fg(color);
                if bold {
                    let _ = t.attr(term::Attr::Bold);
                }
                t.write_all(text.as_bytes())?;
                let _ = t.reset();
                Ok(())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.sink {
            Sink::Plain(w) => w.flush(),
            Sink::Color(t) => t.flush(),
        }
    }
}

/// Terminal color for a severity
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Heading => term::color::BRIGHT_BLUE,
        Severity::Best => term::color::BRIGHT_GREEN,
        Severity::Middle => term::color::BRIGHT_YELLOW,
        Severity::Worst => term::color::BRIGHT_RED,
        Severity::Info => term::color::BRIGHT_BLACK,
    }
}
