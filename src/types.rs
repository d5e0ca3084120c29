/// Core data structures for score reports
///
/// This module defines the values passed from the formatter to the
/// renderers: display lines, their severity, and the running totals.

/// Presentation tier of a display line
///
/// `Best`, `Middle` and `Worst` grade a score; `Heading` and `Info` mark
/// lines that are not scores at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Heading,
    Best,
    Middle,
    Worst,
    Info,
}

impl Severity {
    /// Tier for a score ratio in `0.0..=1.0`
    pub fn for_percentage(ratio: f64) -> Self {
        if ratio >= 0.9 {
            Severity::Best
        } else if ratio >= 0.7 {
            Severity::Middle
        } else {
            Severity::Worst
        }
    }

    /// Tier for the absolute score of a single test
    pub fn for_test_score(score: f64) -> Self {
        if score >= 2.0 {
            Severity::Best
        } else if score == 1.0 {
            Severity::Middle
        } else {
            Severity::Worst
        }
    }
}

/// What a display line stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Name of a scored group
    GroupHeader,
    /// "score/possible (pct%)" for one group
    GroupScore,
    /// "Name: value" for one test inside a group
    TestScore,
    /// The group's total mentions hidden tests
    HiddenNote,
    /// "score/possible (pct%)" across all groups
    OverallScore,
    /// Value of the report's `run_time` field
    RunTime,
}

/// One line of report output, without any labels or terminal styling
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DisplayLine {
    pub kind: LineKind,
    pub text: String,
    pub severity: Severity,
}

impl DisplayLine {
    pub fn new(kind: LineKind, text: impl Into<String>, severity: Severity) -> Self {
        Self { kind, text: text.into(), severity }
    }
}

/// A `score / possible` pair parsed from a group's `Total`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreFraction {
    pub score: u64,
    pub possible: u64,
}

impl ScoreFraction {
    pub fn new(score: u64, possible: u64) -> Self {
        Self { score, possible }
    }

    /// Ratio of score to possible, `None` when nothing was possible
    pub fn ratio(&self) -> Option<f64> {
        if self.possible == 0 {
            None
        } else {
            Some(self.score as f64 / self.possible as f64)
        }
    }

    /// "score/possible (pct%)" with one decimal place
    pub fn display(&self) -> String {
        let percent = self.ratio().unwrap_or(0.0) * 100.0;
        format!("{}/{} ({:.1}%)", self.score, self.possible, percent)
    }
}

/// Running sums over every group that contributed to a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateTotals {
    pub score: u64,
    pub possible: u64,
    pub groups: usize,
}

impl AggregateTotals {
    /// Totals with one more group added, `None` if either sum overflows
    pub fn checked_add(&self, fraction: ScoreFraction) -> Option<Self> {
        Some(Self {
            score: self.score.checked_add(fraction.score)?,
            possible: self.possible.checked_add(fraction.possible)?,
            groups: self.groups + 1,
        })
    }

    pub fn as_fraction(&self) -> ScoreFraction {
        ScoreFraction::new(self.score, self.possible)
    }
}
