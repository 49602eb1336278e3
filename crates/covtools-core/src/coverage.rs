//! Requirement coverage analysis
//!
//! Scans a plain-text requirements document for annotated paragraphs and
//! classifies each by its leading status marker. A paragraph opens with a
//! line of the form `<marker>[TAG] text`, where the marker is `+` (covered
//! by tests), `-` (not yet covered), `!` (not applicable) or absent
//! (pending), and runs to the next blank line. Keyword counting is a plain
//! substring tally of `MUST` / `SHOULD`, matching specification-writing
//! convention.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opens a paragraph: optional status marker, bracketed tag, first text line.
static START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+!-]?)\[[^\]]+\] (.*)$").expect("valid start pattern"));

/// A line of nothing but whitespace closes the current paragraph.
static BLANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*$").expect("valid blank pattern"));

// Case-sensitive literal matches, deliberately not word-boundary aware:
// SHOULDN'T and MUSTARD count too.
static SHOULD_RE: Lazy<Regex> = Lazy::new(|| Regex::new("SHOULD").expect("valid keyword pattern"));
static MUST_RE: Lazy<Regex> = Lazy::new(|| Regex::new("MUST").expect("valid keyword pattern"));

/// Test-coverage status of a requirement paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageStatus {
    /// `+` - covered by tests
    Done,
    /// No marker - unmarked, still pending triage
    Pending,
    /// `-` - not yet covered by tests
    Todo,
    /// `!` - not applicable
    NotApplicable,
}

impl CoverageStatus {
    /// Statuses in the order the report lists them
    pub const REPORT_ORDER: [CoverageStatus; 4] = [
        CoverageStatus::Done,
        CoverageStatus::Pending,
        CoverageStatus::Todo,
        CoverageStatus::NotApplicable,
    ];

    /// Map a captured status marker to its status
    fn from_marker(marker: &str) -> Self {
        match marker {
            "+" => CoverageStatus::Done,
            "-" => CoverageStatus::Todo,
            "!" => CoverageStatus::NotApplicable,
            _ => CoverageStatus::Pending,
        }
    }

    /// Label used in the printed report
    pub fn label(self) -> &'static str {
        match self {
            CoverageStatus::Done => "done",
            CoverageStatus::Pending => "pending",
            CoverageStatus::Todo => "todo",
            CoverageStatus::NotApplicable => "n/a",
        }
    }
}

/// A single annotated requirement paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Coverage status from the leading marker
    pub status: CoverageStatus,
    lines: Vec<String>,
}

impl Statement {
    fn new(status: CoverageStatus, first_line: &str) -> Self {
        Self {
            status,
            lines: vec![first_line.to_string()],
        }
    }

    /// Continuation lines are stored with surrounding whitespace trimmed.
    fn push_line(&mut self, line: &str) {
        self.lines.push(line.trim().to_string());
    }

    /// Full paragraph body: the first line plus all continuation lines
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Non-overlapping occurrences of the literal `SHOULD`
    pub fn should_count(&self) -> usize {
        SHOULD_RE.find_iter(&self.text()).count()
    }

    /// Non-overlapping occurrences of the literal `MUST`
    pub fn must_count(&self) -> usize {
        MUST_RE.find_iter(&self.text()).count()
    }
}

/// Scanner state: looking for the next paragraph opener, or accumulating
/// continuation lines into the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Seeking,
    InParagraph,
}

/// A parsed requirements document: its annotated paragraphs in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecDocument {
    statements: Vec<Statement>,
}

impl SpecDocument {
    /// Parse a document with the two-state scanner.
    ///
    /// Lines that never open a paragraph are silently skipped; a blank line
    /// closes the current paragraph without becoming part of it. Adjacent
    /// bracketed lines with no blank line between them merge into a single
    /// statement whose text contains the second bracketed line verbatim.
    pub fn parse(content: &str) -> Self {
        let mut statements: Vec<Statement> = Vec::new();
        let mut state = ScanState::Seeking;
        for line in content.lines() {
            match state {
                ScanState::Seeking => {
                    if let Some(caps) = START_RE.captures(line) {
                        let status = CoverageStatus::from_marker(&caps[1]);
                        statements.push(Statement::new(status, &caps[2]));
                        state = ScanState::InParagraph;
                    }
                }
                ScanState::InParagraph => {
                    if BLANK_RE.is_match(line) {
                        state = ScanState::Seeking;
                    } else if let Some(current) = statements.last_mut() {
                        current.push_line(line);
                    }
                }
            }
        }
        Self { statements }
    }

    /// All statements, in document order
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Statements containing at least one `SHOULD`, in document order
    pub fn shoulds(&self) -> Vec<&Statement> {
        self.statements
            .iter()
            .filter(|s| s.should_count() > 0)
            .collect()
    }

    /// Statements containing at least one `MUST`, in document order
    pub fn musts(&self) -> Vec<&Statement> {
        self.statements
            .iter()
            .filter(|s| s.must_count() > 0)
            .collect()
    }
}
