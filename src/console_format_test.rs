/// Tests for console formatting module
///
/// These render into a buffer with colors off and check the exact layout
/// an operator sees.

#[cfg(test)]
mod tests {
    use crate::console_format::*;
    use crate::types::{DisplayLine, LineKind, Severity};

    fn render(source: &str, lines: &[DisplayLine]) -> String {
        let mut buf = Vec::new();
        {
            let mut writer = ReportWriter::new(&mut buf, false);
            writer.write_title(source).unwrap();
            writer.write_report(lines).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    fn two_suite_lines() -> Vec<DisplayLine> {
        vec![
            DisplayLine::new(LineKind::GroupHeader, "Suite1", Severity::Heading),
            DisplayLine::new(LineKind::GroupScore, "2/2 (100.0%)", Severity::Best),
            DisplayLine::new(LineKind::TestScore, "Alpha: 2", Severity::Best),
            DisplayLine::new(LineKind::GroupHeader, "Suite2", Severity::Heading),
            DisplayLine::new(LineKind::GroupScore, "0/3 (0.0%)", Severity::Worst),
            DisplayLine::new(LineKind::TestScore, "Beta: 0", Severity::Worst),
            DisplayLine::new(LineKind::HiddenNote, "Contains hidden tests", Severity::Middle),
            DisplayLine::new(LineKind::OverallScore, "2/5 (40.0%)", Severity::Worst),
            DisplayLine::new(LineKind::RunTime, "1.0s", Severity::Info),
        ]
    }

    #[test]
    fn test_plain_layout() {
        let output = render("logs/autograder_1.log", &two_suite_lines());
        let expected = "\n=== Autograder Results ===\n\
                        Log: logs/autograder_1.log\n\
                        \n\
                        Suite1:\n  Score: 2/2 (100.0%)\n    • Alpha: 2\n\
                        \n\
                        Suite2:\n  Score: 0/3 (0.0%)\n    • Beta: 0\n  Note: Contains hidden tests\n\
                        \n\
                        Overall Score: 2/5 (40.0%)\n\
                        \n\
                        Run completed in 1.0s\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_empty_report_notice() {
        let output = render("stdin", &[]);
        assert!(output.contains(REPORT_TITLE));
        assert!(output.contains("No scored groups found"));
        assert!(!output.contains("Overall Score"));
    }

    #[test]
    fn test_run_time_only() {
        let lines = vec![DisplayLine::new(LineKind::RunTime, "3s", Severity::Info)];
        let output = render("stdin", &lines);
        assert!(output.ends_with("No scored groups found in report\n\nRun completed in 3s\n"));
    }

    #[test]
    fn test_test_name_with_colon() {
        let lines = vec![
            DisplayLine::new(LineKind::GroupHeader, "G", Severity::Heading),
            DisplayLine::new(LineKind::TestScore, "Case: Edge: 1", Severity::Middle),
        ];
        let output = render("stdin", &lines);
        assert!(output.contains("    • Case: Edge: 1\n"));
    }

    #[test]
    fn test_plain_writer_has_no_escape_codes() {
        let output = render("stdin", &two_suite_lines());
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_severity_colors_are_distinct() {
        let colors = [
            severity_color(Severity::Best),
            severity_color(Severity::Middle),
            severity_color(Severity::Worst),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
